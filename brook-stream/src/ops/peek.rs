// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Side-effect stages.
//!
//! The side effect runs before the payload is forwarded, and is not allowed
//! to cause this same stage to emit again while it is running: that would
//! deliver emissions to downstream observers out of order. The stage guards
//! against it and panics instead.
//!
//! For value-kind stages the side effect also observes the current value
//! replayed on first activation; snapshot queries and later subscribers
//! bypass it, since they answer through the snapshot alone.

use std::cell::Cell;
use std::rc::Rc;

use brook_core::{Emitter, ObservableStream, StreamError, StreamNode, Subscription};

use crate::change::ChangeStream;
use crate::event::EventStream;
use crate::value::ValueStream;

pub(crate) fn value<T>(source: &ValueStream<T>, side_effect: Rc<dyn Fn(&Option<T>)>) -> ValueStream<T>
where
    T: Clone + 'static,
{
    let snapshot = {
        let source = source.clone();
        move || source.current_value()
    };
    ValueStream::from_node(StreamNode::with_snapshot(
        observe(source.clone(), side_effect),
        snapshot,
    ))
}

pub(crate) fn change<T>(
    source: &ChangeStream<T>,
    side_effect: Rc<dyn Fn(&Option<T>)>,
) -> ChangeStream<T>
where
    T: Clone + 'static,
{
    ChangeStream::from_node(StreamNode::new(observe(source.clone(), side_effect)))
}

pub(crate) fn event<T>(source: &EventStream<T>, side_effect: Rc<dyn Fn(&T)>) -> EventStream<T>
where
    T: Clone + 'static,
{
    EventStream::from_node(StreamNode::new(observe(source.clone(), side_effect)))
}

struct InProgressGuard<'a>(&'a Cell<bool>);

impl Drop for InProgressGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

fn observe<Src>(
    source: Src,
    side_effect: Rc<dyn Fn(&Src::Payload)>,
) -> impl Fn(Emitter<Src::Payload>) -> Subscription
where
    Src: ObservableStream,
{
    // one flag per stage: reactivation reuses it
    let in_progress = Rc::new(Cell::new(false));

    move |emitter| {
        let side_effect = Rc::clone(&side_effect);
        let in_progress = Rc::clone(&in_progress);
        source.subscribe(move |payload| {
            if in_progress.get() {
                panic!("{}", StreamError::Reentrancy);
            }
            in_progress.set(true);
            // reset even when the side effect panics
            let guard = InProgressGuard(&in_progress);
            side_effect(payload);
            drop(guard);

            emitter.emit(payload);
        })
    }
}
