// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Experimental extensions for brook.
//!
//! Everything in this crate is usable but unsettled: APIs may change shape
//! or disappear. Currently it holds transaction support, which lets a batch
//! of source mutations read as a single downstream emission.
//!
//! ```
//! use brook_experimental::{Transactions, TransactionalExt};
//! use brook_stream::prelude::*;
//! use brook_test_utils::Sink;
//!
//! let counter: Var<i32> = Var::new(Some(0));
//! let sink: Sink<Option<i32>> = Sink::new();
//!
//! let stream = ValueStream::of(&counter).transactional();
//! let _subscription = stream.subscribe(sink.observer());
//! assert_eq!(sink.drain(), [Some(0)]);
//!
//! Transactions::run(|| {
//!     counter.set(1);
//!     counter.set(2);
//!     counter.set(3);
//! });
//!
//! // only the last value of the batch came through
//! assert_eq!(sink.drain(), [Some(3)]);
//! ```

pub mod transactional;
pub mod transactions;

pub use transactional::TransactionalExt;
pub use transactions::Transactions;
