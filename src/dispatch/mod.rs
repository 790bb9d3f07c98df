// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Ordered multicast observer lists.
//!
//! An [`ObserverList`] owns an ordered sequence of callbacks and invokes
//! them synchronously, in registration order, for every notification.
//! Observers are passive sinks: they are invoked but never own the
//! dispatching component, and nothing here depends on observer internals.
//!
//! A panicking observer is isolated: the panic is caught, logged, and
//! dispatch continues with the next observer. One misbehaving observer can
//! never abort a notification round or corrupt the dispatcher's result.

use std::panic::{self, AssertUnwindSafe};

use crate::observability::messages::dispatch::{NotificationDispatched, ObserverPanicked};
use crate::observability::messages::StructuredLog;

/// Opaque handle identifying a registered observer within one list.
///
/// Returned by [`ObserverList::subscribe`]; the only way to remove an
/// observer is by presenting its handle back to the list it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Ordered list of observer callbacks for events of type `E`.
///
/// Insertion order is preserved and is the notification order. Handles are
/// unique per list and never reused. Registration is only safe between
/// dispatches; `&mut self` on [`notify`](Self::notify) makes mid-dispatch
/// mutation unrepresentable in single-threaded use.
pub struct ObserverList<E> {
    observers: Vec<(ObserverId, Box<dyn FnMut(&E)>)>,
    next_id: u64,
}

impl<E> ObserverList<E> {
    /// Create a new empty observer list
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Append an observer, returning its removal handle.
    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&E) + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove the observer registered under `id`.
    ///
    /// Returns `false` if the handle is unknown to this list (including
    /// handles that were already removed).
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Number of registered observers
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Check if no observers are registered
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Invoke every registered observer once, in registration order.
    ///
    /// Each callback runs under `catch_unwind`; a panic is logged and
    /// swallowed so the remaining observers still run and the caller's
    /// result is unaffected.
    pub fn notify(&mut self, event: &E) {
        let observer_count = self.observers.len();
        let mut panicked = 0;

        for (position, (id, callback)) in self.observers.iter_mut().enumerate() {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| callback(event)));
            if let Err(payload) = outcome {
                panicked += 1;
                ObserverPanicked {
                    observer_id: id.0,
                    position,
                    payload: panic_message(&payload),
                }
                .log();
            }
        }

        NotificationDispatched {
            observer_count,
            panicked,
        }
        .log();
    }
}

impl<E> Default for ObserverList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for ObserverList<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverList")
            .field("observer_count", &self.observers.len())
            .field(
                "observer_ids",
                &self.observers.iter().map(|(id, _)| id.0).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Best-effort extraction of a human-readable panic message.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "<non-string panic payload>"
    }
}
