use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::errors::StageError;
use crate::traits::Stage;

const DEFAULT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Configuration for the Timestamp Prefix stage
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimestampPrefixConfig {
    pub format: String,
}

impl Default for TimestampPrefixConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
        }
    }
}

/// Timestamp Prefix stage - prefixes the input with the current local time.
///
/// Output is time-dependent, so runs through this stage are not expected to
/// be repeatable.
pub struct TimestampPrefixStage {
    config: TimestampPrefixConfig,
}

impl TimestampPrefixStage {
    pub fn new(config: TimestampPrefixConfig) -> Self {
        Self { config }
    }

    pub fn with_format(format: String) -> Self {
        Self::new(TimestampPrefixConfig { format })
    }

    /// Check whether `format` contains only specifiers chrono can render.
    pub fn is_valid_format(format: &str) -> bool {
        !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
    }
}

impl Default for TimestampPrefixStage {
    fn default() -> Self {
        Self::new(TimestampPrefixConfig::default())
    }
}

impl Stage for TimestampPrefixStage {
    fn apply(&self, input: &str) -> Result<String, StageError> {
        // A bad specifier only surfaces when the DelayedFormat is rendered,
        // so render fallibly instead of letting format! panic.
        let mut output = String::new();
        write!(
            output,
            "{} - {}",
            Local::now().format(&self.config.format),
            input
        )
        .map_err(|_| {
            StageError::transform_failed(format!(
                "invalid timestamp format: '{}'",
                self.config.format
            ))
        })?;
        Ok(output)
    }

    fn name(&self) -> &'static str {
        "timestamp_prefix"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_input_with_separator() {
        let stage = TimestampPrefixStage::default();
        let output = stage.apply("payload").unwrap();
        assert!(output.ends_with(" - payload"));
        // Default format is 19 characters: "YYYY-MM-DD HH:MM:SS"
        assert_eq!(output.len(), 19 + " - payload".len());
    }

    #[test]
    fn invalid_format_is_a_stage_error_not_a_panic() {
        let stage = TimestampPrefixStage::with_format("%Q".to_string());
        let err = stage.apply("payload").unwrap_err();
        assert!(err.to_string().contains("invalid timestamp format: '%Q'"));
    }

    #[test]
    fn format_validity_check_matches_render_behavior() {
        assert!(TimestampPrefixStage::is_valid_format("%Y-%m-%d %H:%M:%S"));
        assert!(TimestampPrefixStage::is_valid_format("plain literal"));
        assert!(!TimestampPrefixStage::is_valid_format("%Q"));
    }

    #[test]
    fn custom_format_is_used() {
        let stage = TimestampPrefixStage::with_format("%Y".to_string());
        let output = stage.apply("x").unwrap();
        let (year, rest) = output.split_once(" - ").unwrap();
        assert_eq!(year.len(), 4);
        assert!(year.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(rest, "x");
    }
}
