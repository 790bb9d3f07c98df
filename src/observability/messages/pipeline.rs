// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline run and stage execution events.
//!
//! This module contains message types for logging events related to:
//! * Pipeline run lifecycle (start, completion)
//! * Stage execution lifecycle (start, completion, failure)
//! * Conversion of stage failures into placeholder output

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Pipeline run started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use stagewire::observability::messages::pipeline::PipelineRunStarted;
///
/// let msg = PipelineRunStarted {
///     stage_count: 3,
///     input_len: 11,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct PipelineRunStarted {
    pub stage_count: usize,
    pub input_len: usize,
}

impl Display for PipelineRunStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting pipeline run: {} stages, input_len={} bytes",
            self.stage_count, self.input_len
        )
    }
}

impl StructuredLog for PipelineRunStarted {
    fn log(&self) {
        tracing::info!(
            stage_count = self.stage_count,
            input_len = self.input_len,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline_run",
            span_name = name,
            stage_count = self.stage_count,
            input_len = self.input_len,
        )
    }
}

/// Pipeline run completed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct PipelineRunCompleted {
    pub stage_count: usize,
    pub output_len: usize,
    pub failed_stages: usize,
}

impl Display for PipelineRunCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline run completed: {} stages, output_len={} bytes, failed_stages={}",
            self.stage_count, self.output_len, self.failed_stages
        )
    }
}

impl StructuredLog for PipelineRunCompleted {
    fn log(&self) {
        tracing::info!(
            stage_count = self.stage_count,
            output_len = self.output_len,
            failed_stages = self.failed_stages,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline_run_completed",
            span_name = name,
            stage_count = self.stage_count,
            output_len = self.output_len,
        )
    }
}

/// Stage execution started.
///
/// # Log Level
/// `debug!` - Routine per-stage event
pub struct StageExecutionStarted<'a> {
    pub stage: &'a str,
    pub input_len: usize,
}

impl Display for StageExecutionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Stage '{}' execution started: input_len={} bytes",
            self.stage, self.input_len
        )
    }
}

impl StructuredLog for StageExecutionStarted<'_> {
    fn log(&self) {
        tracing::debug!(stage = self.stage, input_len = self.input_len, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "stage_execution",
            span_name = name,
            stage = self.stage,
            input_len = self.input_len,
        )
    }
}

/// Stage execution completed successfully.
///
/// # Log Level
/// `debug!` - Routine per-stage event
///
/// # Example
/// ```
/// use stagewire::observability::messages::pipeline::StageExecutionCompleted;
/// use std::time::Duration;
///
/// let msg = StageExecutionCompleted {
///     stage: "reverse_text",
///     input_len: 5,
///     output_len: 5,
///     duration: Duration::from_micros(10),
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct StageExecutionCompleted<'a> {
    pub stage: &'a str,
    pub input_len: usize,
    pub output_len: usize,
    pub duration: std::time::Duration,
}

impl Display for StageExecutionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Stage '{}' completed: input={} bytes, output={} bytes, duration={:?}",
            self.stage, self.input_len, self.output_len, self.duration
        )
    }
}

impl StructuredLog for StageExecutionCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            stage = self.stage,
            input_len = self.input_len,
            output_len = self.output_len,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "stage_execution_completed",
            span_name = name,
            stage = self.stage,
            output_len = self.output_len,
        )
    }
}

/// Stage execution failed; the failure was converted to placeholder output.
///
/// # Log Level
/// `warn!` - Degraded behavior, the run continues
pub struct StageExecutionFailed<'a> {
    pub stage: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for StageExecutionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Stage '{}' failed, substituting placeholder output: {}",
            self.stage, self.error
        )
    }
}

impl StructuredLog for StageExecutionFailed<'_> {
    fn log(&self) {
        tracing::warn!(stage = self.stage, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "stage_execution_failed",
            span_name = name,
            stage = self.stage,
        )
    }
}
