// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Emission handle passed to input strategies.

use std::rc::Weak;

use crate::node::StreamNode;

/// Pushes payloads into the observers of one stream stage.
///
/// Emitters hold a weak reference to their stage: an input strategy can stash
/// the emitter in a long-lived callback without keeping the whole downstream
/// pipeline alive. Emitting into a stage that has been dropped is a no-op.
pub struct Emitter<P: 'static> {
    node: Weak<StreamNode<P>>,
}

impl<P: 'static> Emitter<P> {
    pub(crate) fn new(node: Weak<StreamNode<P>>) -> Self {
        Self { node }
    }

    /// Delivers `value` to every observer of the stage, in registration
    /// order. Does nothing when the stage has no observers or no longer
    /// exists.
    pub fn emit(&self, value: &P) {
        if let Some(node) = self.node.upgrade() {
            node.emit(value);
        }
    }
}

impl<P: 'static> Clone for Emitter<P> {
    fn clone(&self) -> Self {
        Self {
            node: Weak::clone(&self.node),
        }
    }
}
