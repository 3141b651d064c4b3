// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Predicate-based filtering stages.
//!
//! Null-like payloads bypass the predicate and are always forwarded; a
//! filtered stream remains honest about disappearing values even when the
//! predicate would have no way to judge them.

use std::rc::Rc;

use brook_core::{Emitter, ObservableStream, StreamNode};

use crate::change::ChangeStream;
use crate::event::EventStream;

pub(crate) fn change<Src, T>(source: &Src, predicate: Rc<dyn Fn(&T) -> bool>) -> ChangeStream<T>
where
    Src: ObservableStream<Payload = Option<T>>,
    T: Clone + 'static,
{
    ChangeStream::from_node(StreamNode::new({
        let source = source.clone();
        move |emitter: Emitter<Option<T>>| {
            let predicate = Rc::clone(&predicate);
            source.subscribe(move |payload| match payload {
                Some(value) if !predicate(value) => {}
                _ => emitter.emit(payload),
            })
        }
    }))
}

pub(crate) fn event<T>(source: &EventStream<T>, predicate: Rc<dyn Fn(&T) -> bool>) -> EventStream<T>
where
    T: Clone + 'static,
{
    EventStream::from_node(StreamNode::new({
        let source = source.clone();
        move |emitter: Emitter<T>| {
            let predicate = Rc::clone(&predicate);
            source.subscribe(move |value| {
                if predicate(value) {
                    emitter.emit(value);
                }
            })
        }
    }))
}
