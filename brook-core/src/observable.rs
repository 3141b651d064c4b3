// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The observer-facing surface shared by all stream kinds.

use std::rc::Rc;

use crate::emitter::Emitter;
use crate::subscription::Subscription;

/// An observer callback, identified for removal by reference identity of the
/// [`Rc`] allocation. Registering the same `Rc` twice yields two deliveries
/// per emission; removal drops one registration at a time.
pub type Observer<P> = Rc<dyn Fn(&P)>;

/// A stream of payloads of type [`Payload`](ObservableStream::Payload) that
/// can be observed.
///
/// Stream handles are cheap clones sharing one underlying stage, which is why
/// the trait requires [`Clone`]. Observer management is the primitive surface;
/// most callers use [`subscribe`](ObservableStream::subscribe), which pairs
/// registration with a [`Subscription`] that undoes it.
pub trait ObservableStream: Clone + 'static {
    /// The payload delivered to observers.
    type Payload: 'static;

    /// Registers an observer.
    ///
    /// Registration activates the stream if this is the first observer.
    /// Value-kind streams deliver their current value to the new observer
    /// before any live emission reaches it.
    fn add_observer(&self, observer: Observer<Self::Payload>);

    /// Removes a previously registered observer. Unknown observers are
    /// ignored. Removing the last observer deactivates the stream.
    fn remove_observer(&self, observer: &Observer<Self::Payload>);

    /// Registers `f` as an observer and returns the handle that removes it.
    fn subscribe(&self, f: impl Fn(&Self::Payload) + 'static) -> Subscription {
        let observer: Observer<Self::Payload> = Rc::new(f);
        self.add_observer(Rc::clone(&observer));

        let stream = self.clone();
        Subscription::new(move || stream.remove_observer(&observer))
    }
}

/// Strategy describing how a stream stage observes its inputs while active.
///
/// The stage hands the strategy an [`Emitter`] pointing back at itself when
/// the first observer arrives, and cancels the returned [`Subscription`] when
/// the last observer leaves. Implementations for closures exist, so a plain
/// `|emitter| ...` works wherever a `Subscriber` is expected.
pub trait Subscriber<P: 'static> {
    /// Starts observing the inputs, emitting into `emitter`.
    fn observe_inputs(&self, emitter: Emitter<P>) -> Subscription;
}

impl<P: 'static, F> Subscriber<P> for F
where
    F: Fn(Emitter<P>) -> Subscription,
{
    fn observe_inputs(&self, emitter: Emitter<P>) -> Subscription {
        self(emitter)
    }
}
