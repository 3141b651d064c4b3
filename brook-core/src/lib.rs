// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types and lazy activation machinery for the brook observable-stream library.
//!
//! This crate provides the building blocks the stream types in `brook-stream`
//! are assembled from:
//!
//! - **[`StreamNode`]**: The shared activation engine. It tracks observers,
//!   subscribes to its inputs when the first observer arrives and unsubscribes
//!   when the last one leaves.
//! - **[`ObservableStream`]**: The trait every stream kind implements, carrying
//!   observer management and the [`subscribe`](ObservableStream::subscribe)
//!   convenience.
//! - **[`Subscription`]**: A cancellation handle. Dropping it cancels as well,
//!   so a subscription kept in a local binding follows normal scope rules.
//! - **[`OptionalValue`]**: A presence wrapper used for current-value queries,
//!   distinguishing "no value available" from any payload, including null-like
//!   payloads encoded as `Option::None`.
//! - **[`Emitter`]** and **[`Subscriber`]**: The boundary through which external
//!   change sources are adapted into streams.
//!
//! # Laziness
//!
//! Streams do no work while nobody observes them. The contract is enforced in a
//! single place, [`StreamNode`]: the transition from zero observers to one
//! invokes the node's input strategy, and the transition back to zero cancels
//! whatever that strategy returned. Every operator in `brook-stream` reduces to
//! a node plus a strategy, so the laziness guarantee holds uniformly across
//! arbitrary operator chains.
//!
//! # Threading
//!
//! Everything here is single-threaded by design, mirroring the UI-toolkit
//! setting this library targets. Types are `!Send` and `!Sync`; sharing happens
//! through [`std::rc::Rc`].

pub mod emitter;
pub mod error;
pub mod node;
pub mod observable;
pub mod optional_value;
pub mod registry;
pub mod subscription;

pub use emitter::Emitter;
pub use error::{Result, StreamError};
pub use node::StreamNode;
pub use observable::{ObservableStream, Observer, Subscriber};
pub use optional_value::OptionalValue;
pub use registry::ObserverRegistry;
pub use subscription::Subscription;
