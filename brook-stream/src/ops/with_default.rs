// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Promotion of weaker stream kinds to value streams, and signal sampling.
//!
//! A change or event stream cannot answer a current-value query; supplying a
//! default is precisely the missing piece. The default supplier is consulted
//! on every query, so the answer of a promoted stream can track external
//! state.

use std::rc::Rc;

use brook_core::{Emitter, ObservableStream, OptionalValue, StreamNode};

use crate::change::ChangeStream;
use crate::event::EventStream;
use crate::signal::SignalStream;
use crate::value::ValueStream;

pub(crate) fn value<Src, T>(source: &Src, supplier: Rc<dyn Fn() -> Option<T>>) -> ValueStream<T>
where
    Src: ObservableStream<Payload = Option<T>>,
    T: Clone + 'static,
{
    let snapshot = {
        let supplier = Rc::clone(&supplier);
        move || OptionalValue::of(supplier())
    };
    ValueStream::from_node(StreamNode::with_snapshot(
        {
            let source = source.clone();
            move |emitter: Emitter<Option<T>>| source.subscribe(move |payload| emitter.emit(payload))
        },
        snapshot,
    ))
}

pub(crate) fn value_from_event<T>(
    source: &EventStream<T>,
    supplier: Rc<dyn Fn() -> T>,
) -> ValueStream<T>
where
    T: Clone + 'static,
{
    let snapshot = move || OptionalValue::of(Some(supplier()));
    ValueStream::from_node(StreamNode::with_snapshot(
        {
            let source = source.clone();
            move |emitter: Emitter<Option<T>>| {
                source.subscribe(move |value| emitter.emit(&Some(value.clone())))
            }
        },
        snapshot,
    ))
}

pub(crate) fn value_from_signal(source: &SignalStream) -> ValueStream<()> {
    ValueStream::from_node(StreamNode::with_snapshot(
        {
            let source = source.clone();
            move |emitter: Emitter<Option<()>>| source.subscribe(move |_| emitter.emit(&None))
        },
        || OptionalValue::of(None),
    ))
}

/// Backs [`SignalStream::replace`]: every notification samples `supplier`.
pub(crate) fn change_from_signal<T>(
    source: &SignalStream,
    supplier: Rc<dyn Fn() -> Option<T>>,
) -> ChangeStream<T>
where
    T: Clone + 'static,
{
    ChangeStream::from_node(StreamNode::new({
        let source = source.clone();
        move |emitter: Emitter<Option<T>>| {
            let supplier = Rc::clone(&supplier);
            source.subscribe(move |_| emitter.emit(&supplier()))
        }
    }))
}
