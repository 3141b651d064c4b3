// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Payload collector with drain-style assertions.

use std::cell::RefCell;
use std::rc::Rc;

/// Collects payloads delivered to it.
///
/// The usual pattern is `stream.subscribe(sink.observer())` followed by
/// assertions on [`drain`](Sink::drain) or [`single`](Sink::single); both
/// empty the sink, so consecutive assertions each cover only what happened
/// since the last one.
pub struct Sink<P> {
    values: Rc<RefCell<Vec<P>>>,
}

impl<P: Clone + 'static> Sink<P> {
    pub fn new() -> Self {
        Self {
            values: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// An observer callback feeding this sink.
    pub fn observer(&self) -> impl Fn(&P) + 'static {
        let values = Rc::clone(&self.values);
        move |value: &P| values.borrow_mut().push(value.clone())
    }

    /// Removes and returns everything collected so far.
    pub fn drain(&self) -> Vec<P> {
        self.values.borrow_mut().drain(..).collect()
    }

    /// Removes and returns the single collected payload.
    ///
    /// # Panics
    ///
    /// Panics unless exactly one payload was collected.
    pub fn single(&self) -> P {
        let mut values = self.values.borrow_mut();
        assert!(
            values.len() == 1,
            "expected exactly one payload, sink holds {}",
            values.len()
        );
        values.remove(0)
    }

    /// Whether nothing has been collected since the last drain.
    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }
}

impl<P: Clone + 'static> Default for Sink<P> {
    fn default() -> Self {
        Self::new()
    }
}
