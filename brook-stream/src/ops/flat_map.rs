// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Substream switching.
//!
//! Each upstream payload selects an inner stream via the mapper; the stage
//! tracks exactly one inner stream at a time, unsubscribing from the
//! previous one before subscribing to its replacement. A mapper may also
//! select no stream at all, leaving the stage quiet until the next upstream
//! payload.

use std::cell::RefCell;
use std::rc::Rc;

use brook_core::{Emitter, ObservableStream, OptionalValue, StreamNode, Subscription};

use crate::change::ChangeStream;
use crate::event::EventStream;
use crate::value::ValueStream;

pub(crate) fn value<S, U>(
    source: &ValueStream<S>,
    mapper: Rc<dyn Fn(&Option<S>) -> Option<ValueStream<U>>>,
) -> ValueStream<U>
where
    S: Clone + 'static,
    U: Clone + 'static,
{
    let snapshot = {
        let source = source.clone();
        let mapper = Rc::clone(&mapper);
        move || {
            source
                .current_value()
                .flat_map(|payload| match mapper(&payload) {
                    Some(stream) => stream.current_value(),
                    None => OptionalValue::empty(),
                })
        }
    };
    ValueStream::from_node(StreamNode::with_snapshot(
        observe(source.clone(), mapper),
        snapshot,
    ))
}

pub(crate) fn change<Src, Inner, U>(
    source: &Src,
    mapper: Rc<dyn Fn(&Src::Payload) -> Option<Inner>>,
) -> ChangeStream<U>
where
    Src: ObservableStream,
    Inner: ObservableStream<Payload = Option<U>>,
    U: Clone + 'static,
{
    ChangeStream::from_node(StreamNode::new(observe(source.clone(), mapper)))
}

pub(crate) fn event<Src, U>(
    source: &Src,
    mapper: Rc<dyn Fn(&Src::Payload) -> Option<EventStream<U>>>,
) -> EventStream<U>
where
    Src: ObservableStream,
    U: Clone + 'static,
{
    EventStream::from_node(StreamNode::new(observe(source.clone(), mapper)))
}

fn observe<Src, Inner>(
    source: Src,
    mapper: Rc<dyn Fn(&Src::Payload) -> Option<Inner>>,
) -> impl Fn(Emitter<Inner::Payload>) -> Subscription
where
    Src: ObservableStream,
    Inner: ObservableStream,
{
    move |emitter| {
        let tracked: Rc<RefCell<Subscription>> = Rc::new(RefCell::new(Subscription::empty()));

        let upstream = source.subscribe({
            let mapper = Rc::clone(&mapper);
            let tracked = Rc::clone(&tracked);
            move |payload| {
                // the old inner stream must be gone before the new one is
                // observed, or its initial delivery could interleave
                tracked.replace(Subscription::empty()).unsubscribe();

                #[cfg(feature = "tracing")]
                tracing::trace!("upstream payload arrived, switching inner stream");

                let subscription = match mapper(payload) {
                    Some(stream) => {
                        let emitter = emitter.clone();
                        stream.subscribe(move |value| emitter.emit(value))
                    }
                    None => Subscription::empty(),
                };
                *tracked.borrow_mut() = subscription;
            }
        });

        Subscription::new(move || {
            upstream.unsubscribe();
            tracked.replace(Subscription::empty()).unsubscribe();
        })
    }
}
