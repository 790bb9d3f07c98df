// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for observer registration and dispatch events.
//!
//! This module contains message types for logging events related to:
//! * Observer subscription and removal
//! * Notification fan-out
//! * Observer panic isolation

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// An observer panicked during dispatch and was isolated.
///
/// The dispatching call swallows the panic and continues with the next
/// observer; this message is the only trace the failure leaves.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use stagewire::observability::messages::dispatch::ObserverPanicked;
///
/// let msg = ObserverPanicked {
///     observer_id: 3,
///     position: 1,
///     payload: "boom",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ObserverPanicked<'a> {
    pub observer_id: u64,
    pub position: usize,
    pub payload: &'a str,
}

impl Display for ObserverPanicked<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Observer {} (position {}) panicked during dispatch, continuing: {}",
            self.observer_id, self.position, self.payload
        )
    }
}

impl StructuredLog for ObserverPanicked<'_> {
    fn log(&self) {
        tracing::error!(
            observer_id = self.observer_id,
            position = self.position,
            payload = self.payload,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "observer_panicked",
            span_name = name,
            observer_id = self.observer_id,
        )
    }
}

/// Notification round completed.
///
/// # Log Level
/// `trace!` - High-volume diagnostic event
pub struct NotificationDispatched {
    pub observer_count: usize,
    pub panicked: usize,
}

impl Display for NotificationDispatched {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Notification dispatched to {} observers ({} panicked)",
            self.observer_count, self.panicked
        )
    }
}

impl StructuredLog for NotificationDispatched {
    fn log(&self) {
        tracing::trace!(
            observer_count = self.observer_count,
            panicked = self.panicked,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "notification_dispatched",
            span_name = name,
            observer_count = self.observer_count,
        )
    }
}
