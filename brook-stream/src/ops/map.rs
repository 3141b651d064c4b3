// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-payload transformation stages.
//!
//! The same machinery backs `map`, `or_else` and `or_else_get`: all of them
//! are a payload function applied between one upstream stage and one
//! downstream stage. [`null_safe`] assembles that function from a mapper for
//! meaningful values and a replacement for null-like ones.

use std::rc::Rc;

use brook_core::{Emitter, ObservableStream, StreamNode, Subscription};

use crate::change::ChangeStream;
use crate::event::EventStream;
use crate::value::ValueStream;

pub(crate) type PayloadFn<S, T> = Rc<dyn Fn(&Option<S>) -> Option<T>>;

/// Splits payload handling into the meaningful and the null-like case.
pub(crate) fn null_safe<S, T>(
    mapper: impl Fn(&S) -> Option<T> + 'static,
    null_replacement: impl Fn() -> Option<T> + 'static,
) -> PayloadFn<S, T> {
    Rc::new(move |payload| match payload {
        Some(value) => mapper(value),
        None => null_replacement(),
    })
}

pub(crate) fn change<S, T>(source: &ChangeStream<S>, op: PayloadFn<S, T>) -> ChangeStream<T>
where
    S: Clone + 'static,
    T: Clone + 'static,
{
    ChangeStream::from_node(StreamNode::new(observe(source.clone(), op)))
}

pub(crate) fn value<S, T>(source: &ValueStream<S>, op: PayloadFn<S, T>) -> ValueStream<T>
where
    S: Clone + 'static,
    T: Clone + 'static,
{
    let snapshot = {
        let source = source.clone();
        let op = Rc::clone(&op);
        move || source.current_value().map(|payload| op(&payload))
    };
    ValueStream::from_node(StreamNode::with_snapshot(
        observe(source.clone(), op),
        snapshot,
    ))
}

/// Event mapping rejects null-like results instead of forwarding them.
pub(crate) fn event<S, T>(
    source: &EventStream<S>,
    mapper: Rc<dyn Fn(&S) -> Option<T>>,
) -> EventStream<T>
where
    S: Clone + 'static,
    T: Clone + 'static,
{
    EventStream::from_node(StreamNode::new({
        let source = source.clone();
        move |emitter: Emitter<T>| {
            let mapper = Rc::clone(&mapper);
            source.subscribe(move |value| {
                if let Some(mapped) = mapper(value) {
                    emitter.emit(&mapped);
                }
            })
        }
    }))
}

fn observe<Src, S, T>(
    source: Src,
    op: PayloadFn<S, T>,
) -> impl Fn(Emitter<Option<T>>) -> Subscription
where
    Src: ObservableStream<Payload = Option<S>>,
    S: 'static,
    T: 'static,
{
    move |emitter| {
        let op = Rc::clone(&op);
        source.subscribe(move |payload| emitter.emit(&op(payload)))
    }
}
