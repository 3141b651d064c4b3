// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Streams of discrete occurrences with guaranteed-meaningful payloads.

use std::rc::Rc;

use brook_core::{ObservableStream, Observer, StreamNode, Subscriber, Subscription};

use crate::ops;
use crate::source::Var;
use crate::value::ValueStream;

/// A stream of events.
///
/// Event payloads are bare `T`: the null-like value cannot occur, by type.
/// This is the kind to use when occurrences from independent sources are
/// combined, where a null-like payload would be ambiguous.
pub struct EventStream<T: Clone + 'static> {
    node: Rc<StreamNode<T>>,
}

impl<T: Clone + 'static> EventStream<T> {
    /// The meaningful values `var` transitions to; transitions to the
    /// null-like value are dropped.
    pub fn of(var: &Var<T>) -> Self {
        let observe = {
            let var = var.clone();
            move |emitter: crate::Emitter<T>| {
                var.observe(move |change| {
                    if let Some(value) = &change.current {
                        emitter.emit(value);
                    }
                })
            }
        };
        Self::from_node(StreamNode::new(observe))
    }

    /// A stream that never emits.
    pub fn never() -> Self {
        Self::from_node(StreamNode::new(|_: crate::Emitter<T>| Subscription::empty()))
    }

    /// Adapts an external source of events into an event stream.
    pub fn of_subscriber(subscriber: impl Subscriber<T> + 'static) -> Self {
        Self::from_node(StreamNode::new(move |emitter| {
            subscriber.observe_inputs(emitter)
        }))
    }

    pub(crate) fn from_node(node: Rc<StreamNode<T>>) -> Self {
        Self { node }
    }

    pub(crate) fn node(&self) -> &Rc<StreamNode<T>> {
        &self.node
    }

    /// Transforms each event.
    pub fn map<U: Clone + 'static>(&self, mapper: impl Fn(&T) -> U + 'static) -> EventStream<U> {
        self.filter_map(move |value| Some(mapper(value)))
    }

    /// Transforms each event, dropping those for which `mapper` returns
    /// `None`.
    pub fn filter_map<U: Clone + 'static>(
        &self,
        mapper: impl Fn(&T) -> Option<U> + 'static,
    ) -> EventStream<U> {
        ops::map::event(self, Rc::new(mapper))
    }

    /// Keeps events for which `predicate` holds.
    pub fn filter(&self, predicate: impl Fn(&T) -> bool + 'static) -> EventStream<T> {
        ops::filter::event(self, Rc::new(predicate))
    }

    /// Switches between event streams derived from each event.
    pub fn flat_map<U: Clone + 'static>(
        &self,
        mapper: impl Fn(&T) -> EventStream<U> + 'static,
    ) -> EventStream<U> {
        ops::flat_map::event(self, Rc::new(move |value: &T| Some(mapper(value))))
    }

    /// Runs `side_effect` for each event before passing it on. Recursive
    /// emission through this stage panics.
    pub fn peek(&self, side_effect: impl Fn(&T) + 'static) -> EventStream<T> {
        ops::peek::event(self, Rc::new(side_effect))
    }

    /// Promotes this stream to a [`ValueStream`] whose current value is
    /// `value`. Events are not stored, so every new subscriber is greeted
    /// with the default, not with the last event seen.
    pub fn with_default(&self, value: T) -> ValueStream<T> {
        self.with_default_get(move || value.clone())
    }

    /// Promotes this stream to a [`ValueStream`] whose current value is
    /// computed by `supplier` on every query.
    pub fn with_default_get(&self, supplier: impl Fn() -> T + 'static) -> ValueStream<T> {
        ops::with_default::value_from_event(self, Rc::new(supplier))
    }

    /// Gates this stream on `condition`: events only flow while the
    /// condition holds.
    pub fn condition_on(&self, condition: &ValueStream<bool>) -> EventStream<T> {
        ops::condition_on::event(self, condition)
    }
}

impl<T: Clone + 'static> Clone for EventStream<T> {
    fn clone(&self) -> Self {
        Self {
            node: Rc::clone(&self.node),
        }
    }
}

impl<T: Clone + 'static> ObservableStream for EventStream<T> {
    type Payload = T;

    fn add_observer(&self, observer: Observer<Self::Payload>) {
        self.node.add_observer(observer);
    }

    fn remove_observer(&self, observer: &Observer<Self::Payload>) {
        self.node.remove_observer(observer);
    }
}
