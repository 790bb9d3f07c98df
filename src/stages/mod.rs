// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod base64_encode;
mod change_text_case;
mod custom;
pub mod factory;
mod reverse_text;
mod strip_whitespace;
mod timestamp_prefix;
mod token_counter;
mod validate_input;

pub use base64_encode::Base64EncodeStage;
pub use change_text_case::{ChangeTextCaseConfig, ChangeTextCaseStage};
pub use custom::FnStage;
pub use factory::StageFactory;
pub use reverse_text::ReverseTextStage;
pub use strip_whitespace::StripWhitespaceStage;
pub use timestamp_prefix::{TimestampPrefixConfig, TimestampPrefixStage};
pub use token_counter::TokenCounterStage;
pub use validate_input::ValidateInputStage;
