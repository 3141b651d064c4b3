// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Streams of state with a queryable current value.

use std::rc::Rc;

use brook_core::{
    ObservableStream, Observer, OptionalValue, StreamNode, Subscriber, Subscription,
};

use crate::change::ChangeStream;
use crate::event::EventStream;
use crate::ops;
use crate::source::Var;

/// A stream of values over time.
///
/// Value streams always have an answer: new subscribers receive the current
/// value immediately, and [`current_value`](ValueStream::current_value) can
/// be asked at any time, observed or not. Payloads are `Option<T>`, where
/// `None` is the null-like value; the stream does not skip it, because "the
/// value became absent" is itself a state worth reporting.
pub struct ValueStream<T: Clone + 'static> {
    node: Rc<StreamNode<Option<T>>>,
}

impl<T: Clone + 'static> ValueStream<T> {
    /// The values of `var`, starting with the one it currently holds.
    pub fn of(var: &Var<T>) -> Self {
        let observe = {
            let var = var.clone();
            move |emitter: crate::Emitter<Option<T>>| {
                var.observe(move |change| emitter.emit(&change.current))
            }
        };
        let snapshot = {
            let var = var.clone();
            move || OptionalValue::of(var.get())
        };
        Self::from_node(StreamNode::with_snapshot(observe, snapshot))
    }

    /// A stream that is always `value` and never changes.
    pub fn constant(value: impl Into<Option<T>>) -> Self {
        let value = value.into();
        Self::from_node(StreamNode::with_snapshot(
            |_: crate::Emitter<Option<T>>| Subscription::empty(),
            move || OptionalValue::of(value.clone()),
        ))
    }

    /// Adapts an external source of values into a value stream.
    ///
    /// While observed, the stream runs `subscriber`; `current` answers
    /// current-value queries, and its result also greets each new
    /// subscriber.
    pub fn of_subscriber(
        subscriber: impl Subscriber<Option<T>> + 'static,
        current: impl Fn() -> Option<T> + 'static,
    ) -> Self {
        Self::from_parts(subscriber, move || OptionalValue::of(current()))
    }

    /// Like [`of_subscriber`](ValueStream::of_subscriber), for sources whose
    /// current value can be missing entirely rather than null-like.
    pub fn from_parts(
        subscriber: impl Subscriber<Option<T>> + 'static,
        snapshot: impl Fn() -> OptionalValue<Option<T>> + 'static,
    ) -> Self {
        Self::from_node(StreamNode::with_snapshot(
            move |emitter| subscriber.observe_inputs(emitter),
            snapshot,
        ))
    }

    /// A stream that emits nothing and answers no current value. Used as the
    /// closed position of a [`condition_on`](ValueStream::condition_on)
    /// gate; the resulting stream is the one stream kind whose
    /// current-value query can come up empty.
    pub(crate) fn never() -> Self {
        Self::from_node(StreamNode::with_snapshot(
            |_: crate::Emitter<Option<T>>| Subscription::empty(),
            OptionalValue::empty,
        ))
    }

    pub(crate) fn from_node(node: Rc<StreamNode<Option<T>>>) -> Self {
        Self { node }
    }

    /// The value this stream would hand a new subscriber right now.
    ///
    /// Works without activating the stream: the query walks the operator
    /// chain down to the source. `Empty` only occurs behind a closed
    /// [`condition_on`](ValueStream::condition_on) gate.
    pub fn current_value(&self) -> OptionalValue<Option<T>> {
        self.node.current_value()
    }

    /// Transforms each value. Null-like payloads pass through untransformed:
    /// `mapper` only sees meaningful values.
    pub fn map<U: Clone + 'static>(&self, mapper: impl Fn(&T) -> U + 'static) -> ValueStream<U> {
        ops::map::value(self, ops::map::null_safe(move |v| Some(mapper(v)), || None))
    }

    /// Switches to the stream `mapper` derives from each value; emissions
    /// and the current value both follow the active substream. While this
    /// stream's value is null-like, the result is constant null-like.
    pub fn flat_map<U: Clone + 'static>(
        &self,
        mapper: impl Fn(&T) -> ValueStream<U> + 'static,
    ) -> ValueStream<U> {
        ops::flat_map::value(
            self,
            Rc::new(move |payload: &Option<T>| {
                Some(match payload {
                    Some(value) => mapper(value),
                    None => ValueStream::constant(None),
                })
            }),
        )
    }

    /// Switches between change streams derived from each value. While this
    /// stream's value is null-like, nothing is tracked and nothing emits.
    pub fn flat_map_to_change<U: Clone + 'static>(
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

    /// Keeps values for which `predicate` holds, plus all null-like
    /// payloads, which are never handed to the predicate.
    ///
    /// Filtering forfeits the current value, so the result is a
    /// [`ChangeStream`]; chain [`with_default`](ChangeStream::with_default)
    /// to restore one.
    pub fn filter(&self, predicate: impl Fn(&T) -> bool + 'static) -> ChangeStream<T> {
        ops::filter::change(self, Rc::new(predicate))
    }

    /// Drops null-like payloads, yielding an event stream of the meaningful
    /// values.
    pub fn filter_null(&self) -> EventStream<T> {
        ops::filter_null::event(self)
    }

    /// Runs `side_effect` for each payload before passing it downstream.
    ///
    /// The side effect sees null-like payloads too, and the current value
    /// replayed when the first subscriber activates the stage; later
    /// subscribers are served from the snapshot without it. It must not
    /// cause this stage to emit again while it is running; doing so panics
    /// rather than delivering emissions out of order.
    pub fn peek(&self, side_effect: impl Fn(&Option<T>) + 'static) -> ValueStream<T> {
        ops::peek::value(self, Rc::new(side_effect))
    }

    /// Replaces null-like payloads with `value`.
    pub fn or_else(&self, value: impl Into<Option<T>>) -> ValueStream<T> {
        let value = value.into();
        self.or_else_get(move || value.clone())
    }

    /// Replaces null-like payloads with whatever `supplier` returns at
    /// emission time.
    pub fn or_else_get(&self, supplier: impl Fn() -> Option<T> + 'static) -> ValueStream<T> {
        ops::map::value(
            self,
            ops::map::null_safe(|value: &T| Some(value.clone()), supplier),
        )
    }

    /// Falls back to the stream `supplier` builds whenever this stream's
    /// value is null-like; meaningful values win again as soon as they
    /// arrive.
    pub fn or(&self, supplier: impl Fn() -> ValueStream<T> + 'static) -> ValueStream<T> {
        ops::or::value(self, Rc::new(supplier))
    }

    /// Gates this stream on `condition`. While the condition holds, values
    /// flow and the flip to `true` re-delivers the current value; while it
    /// does not, the gate is the empty stream, and the current-value query
    /// answers `Empty`.
    pub fn condition_on(&self, condition: &ValueStream<bool>) -> ValueStream<T> {
        ops::condition_on::value(self, condition)
    }
}

impl<T: Clone + 'static> Clone for ValueStream<T> {
    fn clone(&self) -> Self {
        Self {
            node: Rc::clone(&self.node),
        }
    }
}

impl<T: Clone + 'static> ObservableStream for ValueStream<T> {
    type Payload = Option<T>;

    fn add_observer(&self, observer: Observer<Self::Payload>) {
        self.node.add_observer(observer);
    }

    fn remove_observer(&self, observer: &Observer<Self::Payload>) {
        self.node.remove_observer(observer);
    }
}
