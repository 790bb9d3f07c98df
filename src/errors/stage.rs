// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Expected, recoverable failure raised by a stage.
///
/// Stage failures are data, not control flow: the pipeline converts them
/// into the `"[Error: <message>]"` placeholder and keeps running. Reserve
/// panics for programmer errors only.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StageError {
    /// The stage rejected its input
    #[error("{message}")]
    InvalidInput {
        /// Human-readable rejection reason
        message: String,
    },
    /// The stage accepted its input but could not produce an output
    #[error("{message}")]
    TransformFailed {
        /// Human-readable failure reason
        message: String,
    },
}

impl StageError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn transform_failed(message: impl Into<String>) -> Self {
        Self::TransformFailed {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_just_the_message() {
        let err = StageError::invalid_input("Input cannot be null or empty");
        assert_eq!(err.to_string(), "Input cannot be null or empty");

        let err = StageError::transform_failed("bad payload");
        assert_eq!(err.to_string(), "bad payload");
    }
}
