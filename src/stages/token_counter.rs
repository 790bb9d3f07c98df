use serde::Serialize;

use crate::errors::StageError;
use crate::traits::Stage;

/// Token Counter stage - counts characters and words
pub struct TokenCounterStage;

impl TokenCounterStage {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TokenCounterStage {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct TokenCountResult {
    char_count: usize,
    word_count: usize,
    line_count: usize,
}

impl Stage for TokenCounterStage {
    fn apply(&self, input: &str) -> Result<String, StageError> {
        let result = TokenCountResult {
            char_count: input.chars().count(),
            word_count: input.split_whitespace().count(),
            line_count: input.lines().count().max(1), // At least 1 line even if empty
        };

        serde_json::to_string(&result)
            .map_err(|e| StageError::transform_failed(format!("Failed to serialize result: {}", e)))
    }

    fn name(&self) -> &'static str {
        "token_counter"
    }
}
