// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cancellation handles for active observations.

/// A handle that undoes a registration when cancelled.
///
/// Cancellation happens either explicitly through
/// [`unsubscribe`](Subscription::unsubscribe) or implicitly when the handle is
/// dropped. Either way the underlying action runs at most once.
#[must_use = "dropping a subscription cancels it immediately"]
pub struct Subscription {
    action: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Creates a subscription that runs `action` on cancellation.
    pub fn new(action: impl FnOnce() + 'static) -> Self {
        Self {
            action: Some(Box::new(action)),
        }
    }

    /// A subscription with nothing to undo.
    pub fn empty() -> Self {
        Self { action: None }
    }

    /// Cancels the subscription, running its action if it has not run yet.
    pub fn unsubscribe(mut self) {
        self.cancel();
    }

    /// Combines two subscriptions into one that cancels both.
    pub fn and(self, other: Subscription) -> Subscription {
        Subscription::new(move || {
            self.unsubscribe();
            other.unsubscribe();
        })
    }

    fn cancel(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("pending", &self.action.is_some())
            .finish()
    }
}
