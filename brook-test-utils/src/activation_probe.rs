// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Activation counting for laziness assertions.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use brook_core::{Emitter, Subscription};

/// An input strategy that records how often it is started and stopped.
///
/// Hand [`subscriber`](ActivationProbe::subscriber) to a stream constructor
/// and assert on [`activations`](ActivationProbe::activations) and
/// [`cancellations`](ActivationProbe::cancellations). The emitter of the
/// most recent activation is kept, so tests can also push payloads through
/// the probed stream with [`emit`](ActivationProbe::emit).
pub struct ActivationProbe<P: 'static> {
    activations: Rc<Cell<usize>>,
    cancellations: Rc<Cell<usize>>,
    emitter: Rc<RefCell<Option<Emitter<P>>>>,
}

impl<P: 'static> ActivationProbe<P> {
    pub fn new() -> Self {
        Self {
            activations: Rc::new(Cell::new(0)),
            cancellations: Rc::new(Cell::new(0)),
            emitter: Rc::new(RefCell::new(None)),
        }
    }

    /// The input strategy to probe with.
    pub fn subscriber(&self) -> impl Fn(Emitter<P>) -> Subscription + 'static {
        let activations = Rc::clone(&self.activations);
        let cancellations = Rc::clone(&self.cancellations);
        let emitter = Rc::clone(&self.emitter);
        move |e: Emitter<P>| {
            activations.set(activations.get() + 1);
            *emitter.borrow_mut() = Some(e);

            let cancellations = Rc::clone(&cancellations);
            Subscription::new(move || cancellations.set(cancellations.get() + 1))
        }
    }

    /// How often the probed stream started observing its inputs.
    pub fn activations(&self) -> usize {
        self.activations.get()
    }

    /// How often the probed stream stopped observing its inputs.
    pub fn cancellations(&self) -> usize {
        self.cancellations.get()
    }

    /// Whether the probed stream is observing its inputs right now.
    pub fn is_active(&self) -> bool {
        self.activations() > self.cancellations()
    }

    /// Pushes a payload through the probed stream.
    ///
    /// # Panics
    ///
    /// Panics when the stream was never activated.
    pub fn emit(&self, value: &P) {
        let emitter = self.emitter.borrow();
        match &*emitter {
            Some(emitter) => emitter.emit(value),
            None => panic!("the probed stream has never been activated"),
        }
    }
}

impl<P: 'static> Default for ActivationProbe<P> {
    fn default() -> Self {
        Self::new()
    }
}
