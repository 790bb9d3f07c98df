// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::errors::StageError;
use crate::traits::Stage;

/// Base64 Encode stage - standard-alphabet base64 of the UTF-8 bytes
pub struct Base64EncodeStage;

impl Base64EncodeStage {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Base64EncodeStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for Base64EncodeStage {
    fn apply(&self, input: &str) -> Result<String, StageError> {
        Ok(STANDARD.encode(input.as_bytes()))
    }

    fn name(&self) -> &'static str {
        "base64_encode"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_with_standard_alphabet_and_padding() {
        let stage = Base64EncodeStage::new();
        assert_eq!(stage.apply("hello").unwrap(), "aGVsbG8=");
        assert_eq!(stage.apply("").unwrap(), "");
    }
}
