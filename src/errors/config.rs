// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors that can occur while loading or building a chain configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid YAML for a chain definition
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// A stage entry names an implementation the factory does not know
    #[error("unknown stage implementation: '{stage}'")]
    UnknownStage {
        /// The unrecognized stage name
        stage: String,
    },
    /// The chain defines no stages at all
    #[error("chain '{chain}' defines no stages")]
    EmptyChain {
        /// The chain name, or "<unnamed>"
        chain: String,
    },
    /// A stage option is present but has the wrong shape or value
    #[error("invalid option '{option}' for stage '{stage}': {reason}")]
    InvalidOption {
        /// The stage the option belongs to
        stage: String,
        /// The offending option key
        option: String,
        /// Why the value was rejected
        reason: String,
    },
}
