use serde::{Deserialize, Serialize};

use crate::errors::StageError;
use crate::traits::Stage;

/// Configuration for the Change Text Case stage
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChangeTextCaseConfig {
    pub case_type: String, // "upper", "lower", "proper", "title"
}

/// Change Text Case stage - converts text to different cases
pub struct ChangeTextCaseStage {
    config: ChangeTextCaseConfig,
}

impl ChangeTextCaseStage {
    pub fn new(config: ChangeTextCaseConfig) -> Self {
        Self { config }
    }

    pub fn upper() -> Self {
        Self::new(ChangeTextCaseConfig {
            case_type: "upper".to_string(),
        })
    }

    pub fn lower() -> Self {
        Self::new(ChangeTextCaseConfig {
            case_type: "lower".to_string(),
        })
    }

    pub fn proper() -> Self {
        Self::new(ChangeTextCaseConfig {
            case_type: "proper".to_string(),
        })
    }

    pub fn title() -> Self {
        Self::new(ChangeTextCaseConfig {
            case_type: "title".to_string(),
        })
    }
}

impl Stage for ChangeTextCaseStage {
    fn apply(&self, input: &str) -> Result<String, StageError> {
        let result = match self.config.case_type.as_str() {
            "upper" => input.to_uppercase(),
            "lower" => input.to_lowercase(),
            "proper" => {
                // Proper case: first letter of each word capitalized
                input
                    .split_whitespace()
                    .map(|word| {
                        let mut chars = word.chars();
                        match chars.next() {
                            None => String::new(),
                            Some(first) => {
                                first.to_uppercase().collect::<String>()
                                    + &chars.as_str().to_lowercase()
                            }
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            }
            "title" => {
                // Title case: similar to proper but with some exceptions for articles, prepositions
                input
                    .split_whitespace()
                    .enumerate()
                    .map(|(i, word)| {
                        let lower_word = word.to_lowercase();
                        // Always capitalize first word, otherwise check if it's a small word
                        if i == 0
                            || !matches!(
                                lower_word.as_str(),
                                "a" | "an"
                                    | "the"
                                    | "and"
                                    | "or"
                                    | "but"
                                    | "in"
                                    | "on"
                                    | "at"
                                    | "to"
                                    | "for"
                                    | "of"
                                    | "with"
                                    | "by"
                            )
                        {
                            let mut chars = word.chars();
                            match chars.next() {
                                None => String::new(),
                                Some(first) => {
                                    first.to_uppercase().collect::<String>()
                                        + &chars.as_str().to_lowercase()
                                }
                            }
                        } else {
                            lower_word
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            }
            other => {
                return Err(StageError::transform_failed(format!(
                    "Unknown case type: {}",
                    other
                )));
            }
        };

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "change_text_case"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_and_lower() {
        assert_eq!(
            ChangeTextCaseStage::upper().apply("Hello World").unwrap(),
            "HELLO WORLD"
        );
        assert_eq!(
            ChangeTextCaseStage::lower().apply("Hello World").unwrap(),
            "hello world"
        );
    }

    #[test]
    fn proper_capitalizes_each_word() {
        assert_eq!(
            ChangeTextCaseStage::proper().apply("hello wORLD").unwrap(),
            "Hello World"
        );
    }

    #[test]
    fn title_keeps_small_words_lowercase() {
        assert_eq!(
            ChangeTextCaseStage::title()
                .apply("the quick brown fox and the hound")
                .unwrap(),
            "The Quick Brown Fox and the Hound"
        );
    }

    #[test]
    fn unknown_case_type_is_a_stage_error() {
        let stage = ChangeTextCaseStage::new(ChangeTextCaseConfig {
            case_type: "sarcastic".to_string(),
        });
        let err = stage.apply("hello").unwrap_err();
        assert!(err.to_string().contains("Unknown case type"));
    }
}
