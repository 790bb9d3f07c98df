use std::sync::Arc;

use crate::config::StageConfig;
use crate::errors::ConfigError;
use crate::traits::Stage;

use super::{
    Base64EncodeStage, ChangeTextCaseConfig, ChangeTextCaseStage, ReverseTextStage,
    StripWhitespaceStage, TimestampPrefixStage, TokenCounterStage, ValidateInputStage,
};

/// Factory for creating built-in stage instances
pub struct StageFactory;

impl StageFactory {
    /// Create a stage instance from configuration
    ///
    /// The `stage` field in the config determines which stage to create:
    /// - "validate_input" -> ValidateInputStage
    /// - "strip_whitespace" -> StripWhitespaceStage
    /// - "change_text_case" -> ChangeTextCaseStage (case_type option, default upper)
    /// - "change_text_case_upper" -> ChangeTextCaseStage (uppercase)
    /// - "change_text_case_lower" -> ChangeTextCaseStage (lowercase)
    /// - "change_text_case_proper" -> ChangeTextCaseStage (proper case)
    /// - "change_text_case_title" -> ChangeTextCaseStage (title case)
    /// - "timestamp_prefix" -> TimestampPrefixStage (format option)
    /// - "reverse_text" -> ReverseTextStage
    /// - "base64_encode" -> Base64EncodeStage
    /// - "token_counter" -> TokenCounterStage
    pub fn create_stage(config: &StageConfig) -> Result<Arc<dyn Stage>, ConfigError> {
        match config.stage.as_str() {
            "validate_input" => Ok(Arc::new(ValidateInputStage::new())),
            "strip_whitespace" => Ok(Arc::new(StripWhitespaceStage::new())),

            // Text case stages
            "change_text_case" => {
                let case_type = match config.options.get("case_type") {
                    None => "upper".to_string(),
                    Some(value) => value
                        .as_str()
                        .map(str::to_string)
                        .ok_or_else(|| ConfigError::InvalidOption {
                            stage: config.stage.clone(),
                            option: "case_type".to_string(),
                            reason: "expected a string".to_string(),
                        })?,
                };
                Ok(Arc::new(ChangeTextCaseStage::new(ChangeTextCaseConfig {
                    case_type,
                })))
            }
            "change_text_case_upper" => Ok(Arc::new(ChangeTextCaseStage::upper())),
            "change_text_case_lower" => Ok(Arc::new(ChangeTextCaseStage::lower())),
            "change_text_case_proper" => Ok(Arc::new(ChangeTextCaseStage::proper())),
            "change_text_case_title" => Ok(Arc::new(ChangeTextCaseStage::title())),

            // Configurable stages
            "timestamp_prefix" => {
                let stage = match config.options.get("format") {
                    None => TimestampPrefixStage::default(),
                    Some(value) => {
                        let format = value.as_str().ok_or_else(|| ConfigError::InvalidOption {
                            stage: config.stage.clone(),
                            option: "format".to_string(),
                            reason: "expected a string".to_string(),
                        })?;
                        if !TimestampPrefixStage::is_valid_format(format) {
                            return Err(ConfigError::InvalidOption {
                                stage: config.stage.clone(),
                                option: "format".to_string(),
                                reason: format!("invalid strftime format: '{}'", format),
                            });
                        }
                        TimestampPrefixStage::with_format(format.to_string())
                    }
                };
                Ok(Arc::new(stage))
            }

            // Text manipulation stages
            "reverse_text" => Ok(Arc::new(ReverseTextStage::new())),
            "base64_encode" => Ok(Arc::new(Base64EncodeStage::new())),

            // Analysis stages
            "token_counter" => Ok(Arc::new(TokenCounterStage::new())),

            other => Err(ConfigError::UnknownStage {
                stage: other.to_string(),
            }),
        }
    }

    /// List all available built-in stage implementations
    pub fn list_available_implementations() -> Vec<&'static str> {
        vec![
            "validate_input",
            "strip_whitespace",
            "change_text_case",
            "change_text_case_upper",
            "change_text_case_lower",
            "change_text_case_proper",
            "change_text_case_title",
            "timestamp_prefix",
            "reverse_text",
            "base64_encode",
            "token_counter",
        ]
    }

    /// Check if an implementation is available
    pub fn is_implementation_available(name: &str) -> bool {
        Self::list_available_implementations().contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn create_test_config(stage: &str) -> StageConfig {
        StageConfig {
            stage: stage.to_string(),
            options: HashMap::new(),
        }
    }

    #[test]
    fn test_create_change_text_case_stages() {
        let test_cases = vec![
            ("change_text_case_upper", "hello", "HELLO"),
            ("change_text_case_lower", "HELLO", "hello"),
            ("change_text_case_proper", "hello world", "Hello World"),
            ("change_text_case_title", "the quick brown fox", "The Quick Brown Fox"),
        ];

        for (stage_name, input, expected) in test_cases {
            let config = create_test_config(stage_name);
            let stage = StageFactory::create_stage(&config)
                .unwrap_or_else(|e| panic!("Failed to create stage {}: {}", stage_name, e));

            let result = stage.apply(input).unwrap();
            assert_eq!(result, expected, "Failed for implementation: {}", stage_name);
        }
    }

    #[test]
    fn test_change_text_case_reads_case_type_option() {
        let mut config = create_test_config("change_text_case");
        config.options.insert(
            "case_type".to_string(),
            serde_yaml::Value::String("lower".to_string()),
        );

        let stage = StageFactory::create_stage(&config).unwrap();
        assert_eq!(stage.apply("LOUD").unwrap(), "loud");
    }

    #[test]
    fn test_change_text_case_defaults_to_upper() {
        let config = create_test_config("change_text_case");
        let stage = StageFactory::create_stage(&config).unwrap();
        assert_eq!(stage.apply("quiet").unwrap(), "QUIET");
    }

    #[test]
    fn test_timestamp_prefix_rejects_non_string_format() {
        let mut config = create_test_config("timestamp_prefix");
        config
            .options
            .insert(
                "format".to_string(),
                serde_yaml::Value::Number(serde_yaml::Number::from(42)),
            );

        let result = StageFactory::create_stage(&config);
        assert!(matches!(result, Err(ConfigError::InvalidOption { .. })));
    }

    #[test]
    fn test_timestamp_prefix_rejects_unrenderable_format_string() {
        let mut config = create_test_config("timestamp_prefix");
        config.options.insert(
            "format".to_string(),
            serde_yaml::Value::String("%Q".to_string()),
        );

        let result = StageFactory::create_stage(&config);
        assert!(matches!(result, Err(ConfigError::InvalidOption { .. })));
        let error_msg = result.err().unwrap().to_string();
        assert!(error_msg.contains("invalid strftime format"));
    }

    #[test]
    fn test_create_stage_unknown_implementation() {
        let config = create_test_config("nonexistent_stage");
        let result = StageFactory::create_stage(&config);
        assert!(result.is_err());
        let error_msg = result.err().unwrap().to_string();
        assert!(error_msg.contains("unknown stage implementation"));
    }

    #[test]
    fn test_every_listed_implementation_is_constructible() {
        for name in StageFactory::list_available_implementations() {
            let config = create_test_config(name);
            assert!(
                StageFactory::create_stage(&config).is_ok(),
                "listed implementation '{}' failed to construct",
                name
            );
        }
    }

    #[test]
    fn test_is_implementation_available() {
        assert!(StageFactory::is_implementation_available("validate_input"));
        assert!(StageFactory::is_implementation_available("reverse_text"));
        assert!(!StageFactory::is_implementation_available("nonexistent_stage"));
    }
}
