// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Streams of state changes without a current value.

use std::rc::Rc;

use brook_core::{ObservableStream, Observer, StreamNode, Subscriber, Subscription};

use crate::event::EventStream;
use crate::ops;
use crate::source::Var;
use crate::value::ValueStream;

/// A stream of changes.
///
/// Unlike a [`ValueStream`], a change stream has nothing to say until the
/// next change actually happens: subscribing is silent. Payloads are
/// `Option<T>` with `None` as the null-like value.
pub struct ChangeStream<T: Clone + 'static> {
    node: Rc<StreamNode<Option<T>>>,
}

impl<T: Clone + 'static> ChangeStream<T> {
    /// The future changes of `var`, not including the value it holds now.
    pub fn of(var: &Var<T>) -> Self {
        let observe = {
            let var = var.clone();
            move |emitter: crate::Emitter<Option<T>>| {
                var.observe(move |change| emitter.emit(&change.current))
            }
        };
        Self::from_node(StreamNode::new(observe))
    }

    /// A stream that never emits.
    pub fn never() -> Self {
        Self::from_node(StreamNode::new(|_: crate::Emitter<Option<T>>| Subscription::empty()))
    }

    /// Adapts an external source of changes into a change stream.
    pub fn of_subscriber(subscriber: impl Subscriber<Option<T>> + 'static) -> Self {
        Self::from_node(StreamNode::new(move |emitter| {
            subscriber.observe_inputs(emitter)
        }))
    }

    pub(crate) fn from_node(node: Rc<StreamNode<Option<T>>>) -> Self {
        Self { node }
    }

    pub(crate) fn node(&self) -> &Rc<StreamNode<Option<T>>> {
        &self.node
    }

    /// Transforms each change. Null-like payloads pass through untouched.
    pub fn map<U: Clone + 'static>(&self, mapper: impl Fn(&T) -> U + 'static) -> ChangeStream<U> {
        ops::map::change(self, ops::map::null_safe(move |v| Some(mapper(v)), || None))
    }

    /// Switches between change streams derived from each change. Null-like
    /// payloads suspend tracking until the next meaningful change.
    pub fn flat_map<U: Clone + 'static>(
        &self,
        mapper: impl Fn(&T) -> ChangeStream<U> + 'static,
    ) -> ChangeStream<U> {
        ops::flat_map::change(
            self,
            Rc::new(move |payload: &Option<T>| match payload {
                Some(value) => Some(mapper(value)),
                None => Some(ChangeStream::never()),
            }),
        )
    }

    /// Keeps changes for which `predicate` holds, plus all null-like
    /// payloads, which are never handed to the predicate.
    pub fn filter(&self, predicate: impl Fn(&T) -> bool + 'static) -> ChangeStream<T> {
        ops::filter::change(self, Rc::new(predicate))
    }

    /// Drops null-like payloads, yielding an event stream of the meaningful
    /// changes.
    pub fn filter_null(&self) -> EventStream<T> {
        ops::filter_null::event(self)
    }

    /// Runs `side_effect` for each change before passing it on. Recursive
    /// emission through this stage panics.
    pub fn peek(&self, side_effect: impl Fn(&Option<T>) + 'static) -> ChangeStream<T> {
        ops::peek::change(self, Rc::new(side_effect))
    }

    /// Replaces null-like payloads with `value`.
    pub fn or_else(&self, value: impl Into<Option<T>>) -> ChangeStream<T> {
        let value = value.into();
        self.or_else_get(move || value.clone())
    }

    /// Replaces null-like payloads with whatever `supplier` returns at
    /// emission time.
    pub fn or_else_get(&self, supplier: impl Fn() -> Option<T> + 'static) -> ChangeStream<T> {
        ops::map::change(
            self,
            ops::map::null_safe(|value: &T| Some(value.clone()), supplier),
        )
    }

    /// Promotes this stream to a [`ValueStream`] whose current value is
    /// `value`. Changes are not stored, so every new subscriber is greeted
    /// with the default, not with the last change seen.
    pub fn with_default(&self, value: impl Into<Option<T>>) -> ValueStream<T> {
        let value = value.into();
        self.with_default_get(move || value.clone())
    }

    /// Promotes this stream to a [`ValueStream`] whose current value is
    /// computed by `supplier` on every query.
    pub fn with_default_get(&self, supplier: impl Fn() -> Option<T> + 'static) -> ValueStream<T> {
        ops::with_default::value(self, Rc::new(supplier))
    }

    /// Gates this stream on `condition`: changes only flow while the
    /// condition holds. The flip to `true` by itself emits nothing; there
    /// is no current value to re-deliver.
    pub fn condition_on(&self, condition: &ValueStream<bool>) -> ChangeStream<T> {
        ops::condition_on::change(self, condition)
    }
}

impl<T: Clone + 'static> Clone for ChangeStream<T> {
    fn clone(&self) -> Self {
        Self {
            node: Rc::clone(&self.node),
        }
    }
}

impl<T: Clone + 'static> ObservableStream for ChangeStream<T> {
    type Payload = Option<T>;

    fn add_observer(&self, observer: Observer<Self::Payload>) {
        self.node.add_observer(observer);
    }

    fn remove_observer(&self, observer: &Observer<Self::Payload>) {
        self.node.remove_observer(observer);
    }
}
