// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Operator implementations.
//!
//! Each module builds derived stream stages out of [`StreamNode`]s and input
//! strategies; the public operator surface lives as methods on the stream
//! types themselves.
//!
//! [`StreamNode`]: brook_core::StreamNode

pub(crate) mod condition_on;
pub(crate) mod filter;
pub(crate) mod filter_null;
pub(crate) mod flat_map;
pub(crate) mod map;
pub(crate) mod or;
pub(crate) mod peek;
pub(crate) mod with_default;
