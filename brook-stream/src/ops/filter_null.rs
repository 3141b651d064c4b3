// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Crossing from nullable to non-null payloads.

use brook_core::{Emitter, ObservableStream, StreamNode};

use crate::event::EventStream;

/// Forwards only meaningful payloads, unwrapped. The result is event-kind:
/// with the null-like value gone there is no faithful notion of a current
/// value left.
pub(crate) fn event<Src, T>(source: &Src) -> EventStream<T>
where
    Src: ObservableStream<Payload = Option<T>>,
    T: Clone + 'static,
{
    EventStream::from_node(StreamNode::new({
        let source = source.clone();
        move |emitter: Emitter<T>| {
            source.subscribe(move |payload| {
                if let Some(value) = payload {
                    emitter.emit(value);
                }
            })
        }
    }))
}
