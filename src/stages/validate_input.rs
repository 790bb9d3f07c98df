// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::StageError;
use crate::traits::Stage;

/// Validate Input stage - rejects empty or whitespace-only input.
///
/// This is the one built-in stage that fails rather than transforming. The
/// pipeline converts the failure into the placeholder string like any other
/// stage failure; validation never aborts a run.
pub struct ValidateInputStage;

impl ValidateInputStage {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ValidateInputStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for ValidateInputStage {
    fn apply(&self, input: &str) -> Result<String, StageError> {
        if input.trim().is_empty() {
            return Err(StageError::invalid_input("Input cannot be null or empty"));
        }
        Ok(input.to_string())
    }

    fn name(&self) -> &'static str {
        "validate_input"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_non_blank_input_through() {
        let stage = ValidateInputStage::new();
        assert_eq!(stage.apply("Hello World").unwrap(), "Hello World");
    }

    #[test]
    fn rejects_empty_input() {
        let stage = ValidateInputStage::new();
        let err = stage.apply("").unwrap_err();
        assert_eq!(err.to_string(), "Input cannot be null or empty");
    }

    #[test]
    fn rejects_whitespace_only_input() {
        let stage = ValidateInputStage::new();
        assert!(stage.apply("   \t\n").is_err());
    }
}
