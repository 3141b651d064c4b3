// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Invocation counting for mappers, predicates and side effects.

use std::cell::Cell;
use std::rc::Rc;

/// Counts how often the closures it wraps are invoked.
#[derive(Clone)]
pub struct CallCounter {
    count: Rc<Cell<usize>>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self {
            count: Rc::new(Cell::new(0)),
        }
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Wraps a predicate, counting every call.
    pub fn predicate<T>(&self, predicate: impl Fn(&T) -> bool + 'static) -> impl Fn(&T) -> bool {
        let count = Rc::clone(&self.count);
        move |value: &T| {
            count.set(count.get() + 1);
            predicate(value)
        }
    }

    /// Wraps a mapper, counting every call.
    pub fn mapper<T, U>(&self, mapper: impl Fn(&T) -> U + 'static) -> impl Fn(&T) -> U {
        let count = Rc::clone(&self.count);
        move |value: &T| {
            count.set(count.get() + 1);
            mapper(value)
        }
    }

    /// A side effect that only counts.
    pub fn side_effect<T>(&self) -> impl Fn(&T) {
        let count = Rc::clone(&self.count);
        move |_: &T| count.set(count.get() + 1)
    }
}

impl Default for CallCounter {
    fn default() -> Self {
        Self::new()
    }
}
