// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Imperative injection point for event streams.

use brook_core::{Emitter, Result, StreamError, StreamNode, Subscription};

use crate::event::EventStream;

/// An event stream fed by calling [`push`](EventSource::push).
pub struct EventSource<T: Clone + 'static> {
    stream: EventStream<T>,
}

impl<T: Clone + 'static> EventSource<T> {
    pub fn new() -> Self {
        Self {
            stream: EventStream::from_node(StreamNode::new(|_: Emitter<T>| Subscription::empty())),
        }
    }

    /// Delivers `value` to current observers.
    pub fn push(&self, value: T) {
        self.stream.node().emit(&value);
    }

    /// Like [`push`](EventSource::push), for callers holding an `Option`
    /// from a nullable interface. Event streams guarantee meaningful
    /// payloads, so `None` is rejected rather than delivered.
    pub fn try_push(&self, value: Option<T>) -> Result<()> {
        match value {
            Some(value) => {
                self.push(value);
                Ok(())
            }
            None => Err(StreamError::invalid_argument(
                "event sources cannot deliver a null-like payload",
            )),
        }
    }

    /// The stream side of this source.
    pub fn stream(&self) -> EventStream<T> {
        self.stream.clone()
    }
}

impl<T: Clone + 'static> Default for EventSource<T> {
    fn default() -> Self {
        Self::new()
    }
}
