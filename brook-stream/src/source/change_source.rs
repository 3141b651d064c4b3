// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Imperative injection point for change streams.

use brook_core::{Emitter, StreamNode, Subscription};

use crate::change::ChangeStream;

/// A change stream fed by calling [`push`](ChangeSource::push).
///
/// The source end never blocks and never buffers: pushing while the stream
/// side has no observers delivers to nobody.
pub struct ChangeSource<T: Clone + 'static> {
    stream: ChangeStream<T>,
}

impl<T: Clone + 'static> ChangeSource<T> {
    pub fn new() -> Self {
        Self {
            stream: ChangeStream::from_node(StreamNode::new(|_: Emitter<Option<T>>| {
                Subscription::empty()
            })),
        }
    }

    /// Delivers `value` to current observers; `None` is a legal payload
    /// here, meaning the observed state became null-like.
    pub fn push(&self, value: impl Into<Option<T>>) {
        self.stream.node().emit(&value.into());
    }

    /// The stream side of this source.
    pub fn stream(&self) -> ChangeStream<T> {
        self.stream.clone()
    }
}

impl<T: Clone + 'static> Default for ChangeSource<T> {
    fn default() -> Self {
        Self::new()
    }
}
