// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for notifying-operation lifecycle events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// An arithmetic operation completed and its observers were notified.
///
/// # Log Level
/// `debug!` - Routine per-operation event
pub struct OperationPerformed<'a> {
    pub operation: &'a str,
    pub operand1: f64,
    pub operand2: f64,
    pub result: f64,
}

impl Display for OperationPerformed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Operation '{}' performed: {} and {} => result = {}",
            self.operation, self.operand1, self.operand2, self.result
        )
    }
}

impl StructuredLog for OperationPerformed<'_> {
    fn log(&self) {
        tracing::debug!(
            operation = self.operation,
            operand1 = self.operand1,
            operand2 = self.operand2,
            result = self.result,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "operation_performed",
            span_name = name,
            operation = self.operation,
        )
    }
}

/// An arithmetic operation was rejected and error observers were notified.
///
/// # Log Level
/// `warn!` - Domain error, recovered locally
///
/// # Example
/// ```
/// use stagewire::observability::messages::calculator::OperationRejected;
///
/// let msg = OperationRejected {
///     operation: "Divide",
///     message: "Cannot divide by zero",
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct OperationRejected<'a> {
    pub operation: &'a str,
    pub message: &'a str,
}

impl Display for OperationRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Operation '{}' rejected: {}",
            self.operation, self.message
        )
    }
}

impl StructuredLog for OperationRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            operation = self.operation,
            message = self.message,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "operation_rejected",
            span_name = name,
            operation = self.operation,
        )
    }
}
