// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and
//! operational logging throughout stagewire. Message types follow a
//! struct-based pattern with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Enable future internationalization without code changes
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::calculator` - notifying-operation lifecycle events
//! * `messages::dispatch` - observer registration and dispatch events
//! * `messages::pipeline` - pipeline run and stage execution events
//!
//! # Usage
//!
//! ```rust
//! use stagewire::observability::messages::pipeline::StageExecutionFailed;
//! use stagewire::errors::StageError;
//!
//! let error = StageError::invalid_input("Input cannot be null or empty");
//! let msg = StageExecutionFailed {
//!     stage: "validate_input",
//!     error: &error,
//! };
//!
//! tracing::warn!("{}", msg);
//! ```

pub mod messages;
