// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! An observable value slot, the root most pipelines hang off.

use std::cell::RefCell;
use std::rc::Rc;

use brook_core::{Observer, ObserverRegistry, Subscription};

/// One observed transition of a [`Var`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change<T> {
    /// The value before the transition, possibly null-like.
    pub old: Option<T>,
    /// The value after the transition, possibly null-like.
    pub current: Option<T>,
}

/// A mutable, observable slot holding an optional value.
///
/// `Var` plays the role UI-toolkit properties play elsewhere: it remembers
/// its value, notifies listeners on actual changes, and serves as the root of
/// stream pipelines through [`ValueStream::of`](crate::ValueStream::of) and
/// friends. Setting the value it already holds notifies nobody.
///
/// Handles are cheap clones sharing one slot.
pub struct Var<T: Clone + 'static> {
    state: Rc<VarState<T>>,
}

struct VarState<T> {
    value: RefCell<Option<T>>,
    listeners: ObserverRegistry<Change<T>>,
}

impl<T: Clone + 'static> Var<T> {
    /// Creates a slot holding `value`. Pass `None` for an initially
    /// null-like slot.
    pub fn new(value: impl Into<Option<T>>) -> Self {
        Self {
            state: Rc::new(VarState {
                value: RefCell::new(value.into()),
                listeners: ObserverRegistry::new(),
            }),
        }
    }

    /// The current value.
    pub fn get(&self) -> Option<T> {
        self.state.value.borrow().clone()
    }

    /// Stores `value` and notifies listeners, unless it equals the stored
    /// value, in which case nothing happens.
    pub fn set(&self, value: impl Into<Option<T>>)
    where
        T: PartialEq,
    {
        let value = value.into();
        let old = {
            let mut slot = self.state.value.borrow_mut();
            if *slot == value {
                return;
            }
            std::mem::replace(&mut *slot, value.clone())
        };

        // borrow released above; listeners may freely read or set again
        let change = Change {
            old,
            current: value,
        };
        self.state.listeners.for_each(|listener| listener(&change));
    }

    /// Registers a change listener. Listeners see every transition made
    /// while registered, in registration order.
    pub fn observe(&self, listener: impl Fn(&Change<T>) + 'static) -> Subscription {
        let observer: Observer<Change<T>> = Rc::new(listener);
        self.state.listeners.add(Rc::clone(&observer));

        let state = Rc::clone(&self.state);
        Subscription::new(move || state.listeners.remove(&observer))
    }

    /// How many listeners are currently registered. Pipelines detach from
    /// the slot while unobserved, which this makes visible in tests.
    pub fn listener_count(&self) -> usize {
        self.state.listeners.len()
    }
}

impl<T: Clone + 'static> Clone for Var<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T: Clone + 'static> Default for Var<T> {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Anything that can report "I changed" without saying what changed.
///
/// Implemented by [`Var`] for every payload type, which lets
/// [`SignalStream::of_all`](crate::SignalStream::of_all) merge slots of
/// different types into one payload-free stream.
pub trait Observable {
    /// Registers a listener told about every change.
    fn observe_invalidations(&self, listener: Rc<dyn Fn()>) -> Subscription;
}

impl<T: Clone + 'static> Observable for Var<T> {
    fn observe_invalidations(&self, listener: Rc<dyn Fn()>) -> Subscription {
        self.observe(move |_| listener())
    }
}
