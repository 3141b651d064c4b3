// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Imperative injection point for signal streams.

use brook_core::{Emitter, StreamNode, Subscription};

use crate::signal::SignalStream;

/// A signal stream fed by calling [`trigger`](SignalSource::trigger).
pub struct SignalSource {
    stream: SignalStream,
}

impl SignalSource {
    pub fn new() -> Self {
        Self {
            stream: SignalStream::from_node(StreamNode::new(|_: Emitter<()>| Subscription::empty())),
        }
    }

    /// Notifies current observers.
    pub fn trigger(&self) {
        self.stream.node().emit(&());
    }

    /// The stream side of this source.
    pub fn stream(&self) -> SignalStream {
        self.stream.clone()
    }
}

impl Default for SignalSource {
    fn default() -> Self {
        Self::new()
    }
}
