// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::errors::ConfigError;
use crate::pipeline::StageChain;
use crate::stages::StageFactory;

/// Chain definition loaded from a YAML file.
///
/// A chain is an ordered list of stage entries; order in the file is
/// execution order.
///
/// # Fields
/// * `name` - Optional display name for the chain
/// * `stages` - Ordered stage entries that define the chain
///
/// # Example
/// ```yaml
/// name: demo chain
/// stages:
///   - stage: validate_input
///   - stage: change_text_case
///     options:
///       case_type: upper
///   - stage: timestamp_prefix
///     options:
///       format: "%Y-%m-%d %H:%M:%S"
/// ```
#[derive(Debug, Deserialize)]
pub struct ChainConfig {
    pub name: Option<String>,
    pub stages: Vec<StageConfig>,
}

impl ChainConfig {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

/// Configuration for a single stage in a chain.
///
/// # Fields
/// * `stage` - Built-in implementation name (see `StageFactory`)
/// * `options` - Stage-specific configuration options
#[derive(Debug, Deserialize)]
pub struct StageConfig {
    pub stage: String,
    #[serde(default)]
    pub options: HashMap<String, serde_yaml::Value>, // stage-specific options
}

/// Load a chain config from a YAML file
pub fn load_chain_config<P: AsRef<Path>>(path: P) -> Result<ChainConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: ChainConfig = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load and validate a chain config from a YAML file
///
/// This function loads the configuration and validates that the chain is
/// non-empty and every stage entry names a known implementation.
pub fn load_and_validate_chain_config<P: AsRef<Path>>(path: P) -> Result<ChainConfig, ConfigError> {
    let cfg = load_chain_config(path)?;

    if cfg.stages.is_empty() {
        return Err(ConfigError::EmptyChain {
            chain: cfg.display_name().to_string(),
        });
    }

    for stage_config in &cfg.stages {
        if !StageFactory::is_implementation_available(&stage_config.stage) {
            return Err(ConfigError::UnknownStage {
                stage: stage_config.stage.clone(),
            });
        }
    }

    Ok(cfg)
}

/// Build an executable stage chain from a chain config.
///
/// Stage order in the config is preserved. Option errors surface here even
/// when the config passed name validation.
pub fn build_chain(config: &ChainConfig) -> Result<StageChain, ConfigError> {
    let mut chain = StageChain::new();
    for stage_config in &config.stages {
        chain.push_arc(StageFactory::create_stage(stage_config)?);
    }
    Ok(chain)
}
