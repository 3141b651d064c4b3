// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Conditional gating, built on substream switching.
//!
//! A gate is a flat-map over the *condition*: while the condition is `true`
//! the selected substream is the gated stream itself, otherwise it is
//! nothing. Gating a value stream keeps value-kind semantics, with two
//! consequences worth spelling out: the flip to `true` re-delivers the
//! source's current value, and while the gate is closed the current-value
//! query answers `Empty`.
//!
//! A null-like condition payload closes the gate, like `false`.

use std::rc::Rc;

use brook_core::ObservableStream;

use crate::change::ChangeStream;
use crate::event::EventStream;
use crate::ops::flat_map;
use crate::value::ValueStream;

pub(crate) fn value<T>(source: &ValueStream<T>, condition: &ValueStream<bool>) -> ValueStream<T>
where
    T: Clone + 'static,
{
    let gated = source.clone();
    flat_map::value(
        condition,
        Rc::new(move |active: &Option<bool>| {
            Some(if matches!(active, Some(true)) {
                gated.clone()
            } else {
                ValueStream::never()
            })
        }),
    )
}

pub(crate) fn change<Src, T>(source: &Src, condition: &ValueStream<bool>) -> ChangeStream<T>
where
    Src: ObservableStream<Payload = Option<T>>,
    T: Clone + 'static,
{
    let gated = source.clone();
    flat_map::change(
        condition,
        Rc::new(move |active: &Option<bool>| {
            if matches!(active, Some(true)) {
                Some(gated.clone())
            } else {
                None
            }
        }),
    )
}

pub(crate) fn event<T>(source: &EventStream<T>, condition: &ValueStream<bool>) -> EventStream<T>
where
    T: Clone + 'static,
{
    let gated = source.clone();
    flat_map::event(
        condition,
        Rc::new(move |active: &Option<bool>| {
            if matches!(active, Some(true)) {
                Some(gated.clone())
            } else {
                None
            }
        }),
    )
}
