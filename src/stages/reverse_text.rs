// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::StageError;
use crate::traits::Stage;

/// Reverse Text stage - reverses the input string
pub struct ReverseTextStage;

impl ReverseTextStage {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReverseTextStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for ReverseTextStage {
    fn apply(&self, input: &str) -> Result<String, StageError> {
        Ok(input.chars().rev().collect())
    }

    fn name(&self) -> &'static str {
        "reverse_text"
    }
}
