// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lazy, composable observable streams for UI state.
//!
//! This is the umbrella crate: it re-exports the stable surface of
//! [`brook_core`] and [`brook_stream`]. Most programs only need the
//! [`prelude`].
//!
//! # A five-minute tour
//!
//! State lives in [`Var`] slots; pipelines are derived from them and stay
//! inert until subscribed:
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use brook::prelude::*;
//!
//! let connected: Var<bool> = Var::new(Some(false));
//! let status = ValueStream::of(&connected)
//!     .map(|up| if *up { "online" } else { "offline" })
//!     .or_else("unknown");
//!
//! // nothing is observed yet
//! assert_eq!(connected.listener_count(), 0);
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let subscription = {
//!     let seen = Rc::clone(&seen);
//!     status.subscribe(move |payload: &Option<&str>| {
//!         seen.borrow_mut().push(*payload);
//!     })
//! };
//!
//! // subscribing activated the chain and delivered the current value
//! assert_eq!(connected.listener_count(), 1);
//! connected.set(true);
//! assert_eq!(*seen.borrow(), [Some("offline"), Some("online")]);
//!
//! // dropping the last subscription detaches the chain again
//! subscription.unsubscribe();
//! assert_eq!(connected.listener_count(), 0);
//! ```

pub use brook_core::{
    Emitter, ObservableStream, Observer, OptionalValue, Result, StreamError, Subscriber,
    Subscription,
};
pub use brook_stream::{
    Change, ChangeSource, ChangeStream, EventSource, EventStream, Observable, SignalSource,
    SignalStream, ValueStream, Var,
};

pub mod prelude {
    //! Convenience re-exports for typical usage.

    pub use brook_stream::prelude::*;
}
