// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Convenience re-exports for typical usage.
//!
//! ```
//! use brook_stream::prelude::*;
//!
//! let toggle: Var<bool> = Var::new(Some(false));
//! let flag = ValueStream::of(&toggle).or_else(false);
//! ```

pub use brook_core::{
    ObservableStream, Observer, OptionalValue, Result, StreamError, Subscriber, Subscription,
};

pub use crate::change::ChangeStream;
pub use crate::event::EventStream;
pub use crate::signal::SignalStream;
pub use crate::source::{Change, ChangeSource, EventSource, Observable, SignalSource, Var};
pub use crate::value::ValueStream;
