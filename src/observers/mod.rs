// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Ready-made observers for the demo binary and tests.
//!
//! These are example collaborators, not part of the core contract: each one
//! is just a callback (or a callback plus a shared counter handle) that can
//! be registered on an [`EventCalculator`](crate::calculator::EventCalculator)
//! or a [`StagePipeline`](crate::pipeline::StagePipeline). Counters use
//! `Rc<Cell<_>>` so the caller keeps a read-back handle after the callback
//! moves into the observer list; the whole crate is single-threaded by
//! contract, so no synchronization is involved.

use std::cell::Cell;
use std::rc::Rc;

use crate::calculator::{CalculationError, CalculationEvent};
use crate::pipeline::StageEvent;

/// Logs calculator activity through `tracing`.
pub struct CalculationLogger;

impl CalculationLogger {
    /// Observer for the operation-performed event.
    pub fn operation_handler() -> impl FnMut(&CalculationEvent) + 'static {
        |event: &CalculationEvent| {
            tracing::info!(
                operation = %event.operation,
                operand1 = event.operand1,
                operand2 = event.operand2,
                result = event.result,
                "{} performed: {} and {} => result = {}",
                event.operation,
                event.operand1,
                event.operand2,
                event.result
            );
        }
    }

    /// Observer for the error-occurred event.
    pub fn error_handler() -> impl FnMut(&CalculationError) + 'static {
        |error: &CalculationError| {
            tracing::error!(
                operation = %error.operation,
                "{} failed: {}",
                error.operation,
                error.message
            );
        }
    }
}

/// Counts successful operations and exposes the total for read-back.
#[derive(Clone, Default)]
pub struct CalculationAuditor {
    count: Rc<Cell<u64>>,
}

impl CalculationAuditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observer that increments the audit counter.
    pub fn recorder(&self) -> impl FnMut(&CalculationEvent) + 'static {
        let count = self.count.clone();
        move |_: &CalculationEvent| count.set(count.get() + 1)
    }

    /// Total successful operations observed so far.
    pub fn operation_count(&self) -> u64 {
        self.count.get()
    }
}

/// Counts executed stages and exposes the total for read-back.
#[derive(Clone, Default)]
pub struct StageMonitor {
    count: Rc<Cell<u64>>,
}

impl StageMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observer that increments the stage counter.
    pub fn recorder(&self) -> impl FnMut(&StageEvent) + 'static {
        let count = self.count.clone();
        move |_: &StageEvent| count.set(count.get() + 1)
    }

    /// Total stages observed so far.
    pub fn stage_count(&self) -> u64 {
        self.count.get()
    }
}

/// Logs every stage transition through `tracing`.
pub struct StageLogger;

impl StageLogger {
    pub fn handler() -> impl FnMut(&StageEvent) + 'static {
        |event: &StageEvent| {
            tracing::info!(
                stage = %event.stage,
                "stage '{}': \"{}\" => \"{}\"",
                event.stage,
                event.input,
                event.output
            );
        }
    }
}
