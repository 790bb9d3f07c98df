// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! This module contains all message types used throughout stagewire for
//! diagnostic and operational logging. Each message type implements the
//! `Display` trait to provide consistent, human-readable output while
//! enabling future internationalization.
//!
//! # Organization
//!
//! Messages are organized by subsystem to maintain Single Responsibility
//! Principle:
//!
//! * `calculator` - notifying-operation lifecycle events
//! * `dispatch` - observer registration and dispatch events
//! * `pipeline` - pipeline run and stage execution events
//!
//! # Usage Pattern
//!
//! ```rust
//! use stagewire::observability::messages::pipeline::PipelineRunStarted;
//!
//! let msg = PipelineRunStarted {
//!     stage_count: 3,
//!     input_len: 11,
//! };
//!
//! tracing::info!("{}", msg);
//! ```

use tracing::Span;

pub mod calculator;
pub mod dispatch;
pub mod pipeline;

/// Emit a message through `tracing` with its structured fields attached.
///
/// Implementations pick the log level appropriate to the event; `span`
/// returns a span carrying the same fields for wrapping the work the
/// message describes.
pub trait StructuredLog {
    fn log(&self);

    fn span(&self, name: &str) -> Span;
}
