// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lazy observable streams for UI state.
//!
//! This crate provides small, composable streams in the spirit of reactive
//! bindings: a source of changes at one end, any number of pure
//! transformation stages in the middle, and observers at the other end.
//! Streams are **lazy** — no stage does any work, and no source is observed,
//! until someone subscribes downstream — and **synchronous**: an emission
//! flows through the whole chain within the call that produced it.
//!
//! # Stream kinds
//!
//! The kind of a stream tells an observer what a subscription will deliver:
//!
//! - **[`SignalStream`]**: it happened, but neither what nor to which value.
//!   Payload-free notifications.
//! - **[`ChangeStream<T>`]**: something changed to this payload. Emissions
//!   only happen on actual changes; subscribing stays silent until the next
//!   change. Payloads may be null-like (`None`).
//! - **[`ValueStream<T>`]**: like a change stream, but with a current value
//!   that is delivered to every new subscriber immediately, and queryable via
//!   [`current_value`](ValueStream::current_value).
//! - **[`EventStream<T>`]**: distinct occurrences rather than state changes.
//!   Payloads are never null-like, which makes these streams suitable for
//!   combining independent sources without `None` ambiguity.
//!
//! Operators move deliberately between kinds: [`filter`](ValueStream::filter)
//! on a value stream yields a change stream because a filtered stream can no
//! longer vouch for a current value, and
//! [`with_default`](ChangeStream::with_default) promotes a change stream back
//! to a value stream by supplying the missing answer.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use brook_stream::prelude::*;
//!
//! let name: Var<String> = Var::new(None);
//!
//! let greeting = ValueStream::of(&name)
//!     .map(|name| format!("Hello, {name}!"))
//!     .or_else("Hello, stranger!".to_string());
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let subscription = {
//!     let seen = Rc::clone(&seen);
//!     greeting.subscribe(move |payload: &Option<String>| {
//!         if let Some(text) = payload {
//!             seen.borrow_mut().push(text.clone());
//!         }
//!     })
//! };
//!
//! name.set("world".to_string());
//! subscription.unsubscribe();
//! name.set("nobody is listening".to_string());
//!
//! assert_eq!(*seen.borrow(), ["Hello, stranger!", "Hello, world!"]);
//! ```

pub mod change;
pub mod event;
mod ops;
pub mod prelude;
pub mod signal;
pub mod source;
pub mod value;

pub use brook_core::{
    Emitter, ObservableStream, Observer, OptionalValue, Result, StreamError, Subscriber,
    Subscription,
};

pub use change::ChangeStream;
pub use event::EventStream;
pub use signal::SignalStream;
pub use source::{Change, ChangeSource, EventSource, Observable, SignalSource, Var};
pub use value::ValueStream;
