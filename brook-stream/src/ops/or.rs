// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fallback to an alternative stream while the primary value is null-like.

use std::rc::Rc;

use brook_core::{Emitter, ObservableStream, StreamNode};

use crate::ops::flat_map;
use crate::value::ValueStream;

/// Switches between the source and a supplied alternative, keyed on whether
/// the source's payload is null-like.
///
/// The meaningful branch cannot track the source directly: switching back on
/// a meaningful payload subscribes the substream, whose initial delivery
/// already hands that payload downstream, and the substream would then relay
/// the very same source emission a second time. The branch therefore tracks
/// a null-skipping view of the source, whose initial delivery still answers
/// with the full current value. A fresh view is built per switch so that the
/// in-flight source emission cannot reach the newly subscribed view.
pub(crate) fn value<T>(
    source: &ValueStream<T>,
    supplier: Rc<dyn Fn() -> ValueStream<T>>,
) -> ValueStream<T>
where
    T: Clone + 'static,
{
    let primary = source.clone();
    flat_map::value(
        source,
        Rc::new(move |payload: &Option<T>| {
            Some(match payload {
                Some(_) => skip_nulls(&primary),
                None => supplier(),
            })
        }),
    )
}

/// A value-kind view of `source` that swallows null-like emissions but still
/// reports the source's current value, null-like or not.
fn skip_nulls<T>(source: &ValueStream<T>) -> ValueStream<T>
where
    T: Clone + 'static,
{
    let snapshot = {
        let source = source.clone();
        move || source.current_value()
    };
    ValueStream::from_node(StreamNode::with_snapshot(
        {
            let source = source.clone();
            move |emitter: Emitter<Option<T>>| {
                source.subscribe(move |payload| {
                    if payload.is_some() {
                        emitter.emit(payload);
                    }
                })
            }
        },
        snapshot,
    ))
}
