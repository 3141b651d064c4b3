// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Observer storage tuned for the common zero-or-one-observer case.
//!
//! Most stages in a pipeline have exactly one downstream observer, so the
//! registry avoids allocating a vector until a second one shows up. Traversal
//! works on a snapshot: observers added or removed by a callback running
//! inside the traversal take effect for the next emission, never the current
//! one, and removed observers may still see the emission that was already in
//! flight.

use std::cell::RefCell;
use std::rc::Rc;

use crate::observable::Observer;

/// Reentrancy-safe observer storage.
pub struct ObserverRegistry<P> {
    observers: RefCell<Observers<P>>,
}

enum Observers<P> {
    Empty,
    Single(Observer<P>),
    Many(Rc<Vec<Observer<P>>>),
}

enum Snapshot<P> {
    Single(Observer<P>),
    Many(Rc<Vec<Observer<P>>>),
}

impl<P> ObserverRegistry<P> {
    pub fn new() -> Self {
        Self {
            observers: RefCell::new(Observers::Empty),
        }
    }

    /// Appends an observer, keeping registration order.
    pub fn add(&self, observer: Observer<P>) {
        let mut slot = self.observers.borrow_mut();
        *slot = match std::mem::replace(&mut *slot, Observers::Empty) {
            Observers::Empty => Observers::Single(observer),
            Observers::Single(existing) => Observers::Many(Rc::new(vec![existing, observer])),
            Observers::Many(mut list) => {
                // make_mut leaves any in-flight traversal on the old vector
                Rc::make_mut(&mut list).push(observer);
                Observers::Many(list)
            }
        };
    }

    /// Removes one registration of `observer`, matched by `Rc` identity.
    /// Unknown observers are ignored.
    pub fn remove(&self, observer: &Observer<P>) {
        let mut slot = self.observers.borrow_mut();
        *slot = match std::mem::replace(&mut *slot, Observers::Empty) {
            Observers::Empty => Observers::Empty,
            Observers::Single(existing) => {
                if Rc::ptr_eq(&existing, observer) {
                    Observers::Empty
                } else {
                    Observers::Single(existing)
                }
            }
            Observers::Many(mut list) => {
                match list.iter().position(|o| Rc::ptr_eq(o, observer)) {
                    None => Observers::Many(list),
                    Some(index) if list.len() == 2 => {
                        Observers::Single(Rc::clone(&list[1 - index]))
                    }
                    Some(index) => {
                        Rc::make_mut(&mut list).remove(index);
                        Observers::Many(list)
                    }
                }
            }
        };
    }

    pub fn is_empty(&self) -> bool {
        matches!(*self.observers.borrow(), Observers::Empty)
    }

    pub fn len(&self) -> usize {
        match &*self.observers.borrow() {
            Observers::Empty => 0,
            Observers::Single(_) => 1,
            Observers::Many(list) => list.len(),
        }
    }

    /// Invokes `f` for every observer registered at the start of the call.
    ///
    /// The borrow on the registry is released before the first invocation, so
    /// callbacks are free to add or remove observers, including themselves.
    pub fn for_each(&self, mut f: impl FnMut(&Observer<P>)) {
        let snapshot = {
            let slot = self.observers.borrow();
            match &*slot {
                Observers::Empty => return,
                Observers::Single(observer) => Snapshot::Single(Rc::clone(observer)),
                Observers::Many(list) => Snapshot::Many(Rc::clone(list)),
            }
        };

        match snapshot {
            Snapshot::Single(observer) => f(&observer),
            Snapshot::Many(list) => {
                for observer in list.iter() {
                    f(observer);
                }
            }
        }
    }
}

impl<P> Default for ObserverRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}
