// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Payload-free notification streams.

use std::rc::Rc;

use brook_core::{ObservableStream, Observer, StreamNode, Subscriber, Subscription};

use crate::change::ChangeStream;
use crate::ops;
use crate::source::{Observable, Var};
use crate::value::ValueStream;

/// A stream that reports *that* something happened, not what.
///
/// Signals are the cheapest kind: several sources of different payload types
/// can be merged into one signal stream, and a signal can be turned back
/// into data with [`replace`](SignalStream::replace), which samples a
/// supplier at notification time.
pub struct SignalStream {
    node: Rc<StreamNode<()>>,
}

impl SignalStream {
    /// Notifies on every change of `var`.
    pub fn of<T: Clone + 'static>(var: &Var<T>) -> Self {
        let observe = {
            let var = var.clone();
            move |emitter: crate::Emitter<()>| var.observe(move |_| emitter.emit(&()))
        };
        Self::from_node(StreamNode::new(observe))
    }

    /// Notifies on every change of any of `sources`.
    pub fn of_all(sources: Vec<Box<dyn Observable>>) -> Self {
        let sources = Rc::new(sources);
        Self::from_node(StreamNode::new(move |emitter: crate::Emitter<()>| {
            let mut subscriptions = Vec::with_capacity(sources.len());
            for source in sources.iter() {
                let emitter = emitter.clone();
                subscriptions.push(source.observe_invalidations(Rc::new(move || emitter.emit(&()))));
            }
            Subscription::new(move || {
                for subscription in subscriptions {
                    subscription.unsubscribe();
                }
            })
        }))
    }

    /// Adapts an external source of notifications into a signal stream.
    pub fn of_subscriber(subscriber: impl Subscriber<()> + 'static) -> Self {
        Self::from_node(StreamNode::new(move |emitter| {
            subscriber.observe_inputs(emitter)
        }))
    }

    pub(crate) fn from_node(node: Rc<StreamNode<()>>) -> Self {
        Self { node }
    }

    pub(crate) fn node(&self) -> &Rc<StreamNode<()>> {
        &self.node
    }

    /// Turns notifications back into data by sampling `supplier` each time
    /// one arrives.
    pub fn replace<T: Clone + 'static>(
        &self,
        supplier: impl Fn() -> Option<T> + 'static,
    ) -> ChangeStream<T> {
        ops::with_default::change_from_signal(self, Rc::new(supplier))
    }

    /// Promotes this stream to a [`ValueStream`] of the null-like value,
    /// useful only for its subscription timing: new subscribers are called
    /// immediately, then once per notification.
    pub fn with_default(&self) -> ValueStream<()> {
        ops::with_default::value_from_signal(self)
    }
}

impl Clone for SignalStream {
    fn clone(&self) -> Self {
        Self {
            node: Rc::clone(&self.node),
        }
    }
}

impl ObservableStream for SignalStream {
    type Payload = ();

    fn add_observer(&self, observer: Observer<Self::Payload>) {
        self.node.add_observer(observer);
    }

    fn remove_observer(&self, observer: &Observer<Self::Payload>) {
        self.node.remove_observer(observer);
    }
}
