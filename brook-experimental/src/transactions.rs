// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Thread-local transaction window coordination.
//!
//! A transaction is a window during which transactional stream stages hold
//! their emissions back. Stages register a flush callback the first time
//! they are handed a payload inside the window; when the outermost window
//! closes, the callbacks run in registration order and each stage releases
//! the last payload it saw.

use std::cell::RefCell;
use std::rc::Rc;

use brook_core::Subscription;

thread_local! {
    static STATE: RefCell<TransactionState> = RefCell::new(TransactionState {
        depth: 0,
        callbacks: Vec::new(),
    });
}

struct TransactionState {
    depth: usize,
    callbacks: Vec<Rc<dyn Fn()>>,
}

struct OpenWindow;

impl Drop for OpenWindow {
    fn drop(&mut self) {
        STATE.with(|state| {
            let mut state = state.borrow_mut();
            state.depth -= 1;
            // a window aborted by a panic must not leak its deferred
            // payloads into the next one
            if state.depth == 0 && std::thread::panicking() {
                state.callbacks.clear();
            }
        });
    }
}

/// The transaction window of the current thread.
pub struct Transactions;

impl Transactions {
    /// Whether a transaction window is open right now.
    pub fn in_progress() -> bool {
        STATE.with(|state| state.borrow().depth > 0)
    }

    /// Runs `f` inside a transaction window.
    ///
    /// Windows nest; deferred emissions are released when the outermost one
    /// closes. The release happens inside this call, after `f` returns.
    pub fn run(f: impl FnOnce()) {
        STATE.with(|state| state.borrow_mut().depth += 1);

        // the window must close even when f panics
        let window = OpenWindow;
        f();
        drop(window);

        let callbacks = STATE.with(|state| {
            let mut state = state.borrow_mut();
            if state.depth == 0 {
                std::mem::take(&mut state.callbacks)
            } else {
                Vec::new()
            }
        });
        // state borrow is released; flushing may open new windows or
        // register new callbacks
        for callback in callbacks {
            callback();
        }
    }

    /// Registers a flush callback for the current window. The returned
    /// subscription withdraws it, for stages that deactivate mid-window; it
    /// holds the callback weakly, so it turns inert once the window has
    /// flushed or discarded its queue.
    pub fn register(callback: Rc<dyn Fn()>) -> Subscription {
        let handle = Rc::downgrade(&callback);
        STATE.with(|state| state.borrow_mut().callbacks.push(callback));

        Subscription::new(move || {
            if let Some(callback) = handle.upgrade() {
                Self::unregister(&callback);
            }
        })
    }

    fn unregister(callback: &Rc<dyn Fn()>) {
        STATE.with(|state| {
            let mut state = state.borrow_mut();
            if let Some(index) = state
                .callbacks
                .iter()
                .position(|c| Rc::ptr_eq(c, callback))
            {
                state.callbacks.remove(index);
            }
        });
    }
}
