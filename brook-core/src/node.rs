// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The shared activation engine behind every stream stage.
//!
//! A [`StreamNode`] owns three things: the observer registry, the subscription
//! to its inputs while active, and the strategy that creates that
//! subscription. Stages differ only in their strategies; activation and
//! deactivation behave identically across the whole library because they live
//! here and nowhere else.

use std::cell::RefCell;
use std::rc::Rc;

use crate::emitter::Emitter;
use crate::error::StreamError;
use crate::observable::Observer;
use crate::optional_value::OptionalValue;
use crate::registry::ObserverRegistry;
use crate::subscription::Subscription;

type ObserveFn<P> = Box<dyn Fn(Emitter<P>) -> Subscription>;
type SnapshotFn<P> = Box<dyn Fn() -> OptionalValue<P>>;

/// One stage in a stream pipeline.
///
/// Nodes are shared behind [`Rc`]; the stream wrappers in `brook-stream` are
/// thin handles around `Rc<StreamNode<P>>`. A node without a snapshot
/// strategy is change-kind or event-kind: it has no current value and
/// [`current_value`](StreamNode::current_value) panics. A node with one is
/// value-kind and replays the snapshot to every newly added observer.
pub struct StreamNode<P: 'static> {
    observers: ObserverRegistry<P>,
    input: RefCell<Option<Subscription>>,
    observe_inputs: ObserveFn<P>,
    snapshot: Option<SnapshotFn<P>>,
}

impl<P: 'static> StreamNode<P> {
    /// Creates a node without a current value.
    pub fn new(observe_inputs: impl Fn(Emitter<P>) -> Subscription + 'static) -> Rc<Self> {
        Rc::new(Self {
            observers: ObserverRegistry::new(),
            input: RefCell::new(None),
            observe_inputs: Box::new(observe_inputs),
            snapshot: None,
        })
    }

    /// Creates a node whose current value is answered by `snapshot`.
    pub fn with_snapshot(
        observe_inputs: impl Fn(Emitter<P>) -> Subscription + 'static,
        snapshot: impl Fn() -> OptionalValue<P> + 'static,
    ) -> Rc<Self> {
        Rc::new(Self {
            observers: ObserverRegistry::new(),
            input: RefCell::new(None),
            observe_inputs: Box::new(observe_inputs),
            snapshot: Some(Box::new(snapshot)),
        })
    }

    /// Registers an observer.
    ///
    /// Ordering matters here and is fixed: the node first activates its
    /// inputs if this is the first observer, then replays its snapshot (if it
    /// has one) to the new observer alone, and only then registers the
    /// observer for live emissions. An activation that emits synchronously
    /// therefore cannot reach an observer that has not seen the current value
    /// yet.
    pub fn add_observer(self: &Rc<Self>, observer: Observer<P>) {
        if self.input.borrow().is_none() {
            #[cfg(feature = "tracing")]
            tracing::trace!("first observer arrived, observing inputs");

            let subscription = (self.observe_inputs)(Emitter::new(Rc::downgrade(self)));
            *self.input.borrow_mut() = Some(subscription);
        }

        if let Some(snapshot) = &self.snapshot {
            snapshot().if_present(|value| observer(&value));
        }

        self.observers.add(observer);
    }

    /// Removes one registration of `observer`; deactivates the inputs when
    /// the last observer leaves.
    pub fn remove_observer(&self, observer: &Observer<P>) {
        self.observers.remove(observer);

        if self.observers.is_empty() {
            let input = self.input.borrow_mut().take();
            if let Some(subscription) = input {
                #[cfg(feature = "tracing")]
                tracing::trace!("last observer left, cancelling input subscription");

                subscription.unsubscribe();
            }
        }
    }

    /// Delivers `value` to all currently registered observers, in
    /// registration order. A no-op without observers.
    pub fn emit(&self, value: &P) {
        self.observers.for_each(|observer| observer(value));
    }

    /// Answers a current-value query.
    ///
    /// # Panics
    ///
    /// Panics when this stage has no snapshot strategy; only value-kind
    /// stages can answer.
    pub fn current_value(&self) -> OptionalValue<P> {
        match &self.snapshot {
            Some(snapshot) => snapshot(),
            None => panic!(
                "{}",
                StreamError::unsupported(
                    "this stage has no current value; derive a value stream with a default first"
                )
            ),
        }
    }

    /// Whether the node currently observes its inputs.
    pub fn is_active(&self) -> bool {
        self.input.borrow().is_some()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
