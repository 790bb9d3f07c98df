// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::StageError;
use crate::traits::Stage;

/// Strip Whitespace stage - removes all whitespace characters
pub struct StripWhitespaceStage;

impl StripWhitespaceStage {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StripWhitespaceStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for StripWhitespaceStage {
    fn apply(&self, input: &str) -> Result<String, StageError> {
        Ok(input.chars().filter(|c| !c.is_whitespace()).collect())
    }

    fn name(&self) -> &'static str {
        "strip_whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_spaces_tabs_and_newlines() {
        let stage = StripWhitespaceStage::new();
        assert_eq!(stage.apply("Hello World").unwrap(), "HelloWorld");
        assert_eq!(stage.apply(" a\tb\nc ").unwrap(), "abc");
    }

    #[test]
    fn empty_input_stays_empty() {
        let stage = StripWhitespaceStage::new();
        assert_eq!(stage.apply("").unwrap(), "");
    }
}
