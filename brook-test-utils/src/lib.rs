// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the brook workspace.
//!
//! - [`Sink`]: collects everything a stream delivers, with drain-style
//!   assertions.
//! - [`ActivationProbe`]: an input strategy that counts activations and
//!   cancellations, for verifying laziness.
//! - [`CallCounter`]: counts invocations of predicates, mappers and side
//!   effects.

pub mod activation_probe;
pub mod call_counter;
pub mod sink;

pub use activation_probe::ActivationProbe;
pub use call_counter::CallCounter;
pub use sink::Sink;
