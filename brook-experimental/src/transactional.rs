// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Transaction-deferred stream stages.
//!
//! A transactional stage forwards payloads immediately outside a
//! transaction window. Inside one, it remembers the latest payload and a
//! flush callback with [`Transactions`]; when the window closes, only that
//! latest payload goes downstream. Current-value queries are not deferred;
//! they answer with the source's live value even mid-window.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use brook_core::{Emitter, ObservableStream, Subscription};
use brook_stream::{ChangeStream, EventStream, SignalStream, ValueStream};

use crate::transactions::Transactions;

/// Adds [`transactional`](TransactionalExt::transactional) to every stream
/// kind.
pub trait TransactionalExt {
    /// A stage that defers emissions made inside a transaction window,
    /// releasing only the latest one when the window closes.
    fn transactional(&self) -> Self;
}

impl<T: Clone + 'static> TransactionalExt for ValueStream<T> {
    fn transactional(&self) -> Self {
        let source = self.clone();
        ValueStream::from_parts(deferring(self.clone()), move || source.current_value())
    }
}

impl<T: Clone + 'static> TransactionalExt for ChangeStream<T> {
    fn transactional(&self) -> Self {
        ChangeStream::of_subscriber(deferring(self.clone()))
    }
}

impl<T: Clone + 'static> TransactionalExt for EventStream<T> {
    fn transactional(&self) -> Self {
        EventStream::of_subscriber(deferring(self.clone()))
    }
}

impl TransactionalExt for SignalStream {
    fn transactional(&self) -> Self {
        SignalStream::of_subscriber(deferring(self.clone()))
    }
}

/// The flush queued by a stage for the current window. The weak handle
/// tells whether the coordinator still holds it: a flushed or discarded
/// window drops the strong reference, and the stage registers afresh.
struct PendingFlush {
    queued: Weak<dyn Fn()>,
    withdrawal: Subscription,
}

fn deferring<S>(source: S) -> impl Fn(Emitter<S::Payload>) -> Subscription
where
    S: ObservableStream,
    S::Payload: Clone,
{
    move |emitter| {
        let stored: Rc<RefCell<Option<S::Payload>>> = Rc::new(RefCell::new(None));
        let pending: Rc<RefCell<Option<PendingFlush>>> = Rc::new(RefCell::new(None));

        let upstream = source.subscribe({
            let stored = Rc::clone(&stored);
            let pending = Rc::clone(&pending);
            let emitter = emitter.clone();
            move |payload| {
                if !Transactions::in_progress() {
                    emitter.emit(payload);
                    return;
                }

                *stored.borrow_mut() = Some(payload.clone());

                let still_queued = pending
                    .borrow()
                    .as_ref()
                    .is_some_and(|flush| flush.queued.upgrade().is_some());
                if still_queued {
                    return;
                }

                let flush: Rc<dyn Fn()> = {
                    let stored = Rc::clone(&stored);
                    let emitter = emitter.clone();
                    Rc::new(move || {
                        if let Some(payload) = stored.borrow_mut().take() {
                            emitter.emit(&payload);
                        }
                    })
                };
                let queued = Rc::downgrade(&flush);
                let withdrawal = Transactions::register(flush);
                *pending.borrow_mut() = Some(PendingFlush { queued, withdrawal });
            }
        });

        Subscription::new(move || {
            upstream.unsubscribe();
            // withdraw a pending flush so a closed observer cannot emit
            if let Some(flush) = pending.borrow_mut().take() {
                flush.withdrawal.unsubscribe();
            }
        })
    }
}
