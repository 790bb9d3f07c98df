// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;

pub use loader::{
    build_chain, load_and_validate_chain_config, load_chain_config, ChainConfig, StageConfig,
};
