// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::StageError;
use crate::traits::Stage;

/// FnStage wraps a user-supplied `(name, transform)` pair as a stage.
///
/// The caller declares the name explicitly when the stage is created; it is
/// never inferred from the callable.
pub struct FnStage {
    name: String,
    transform: Box<dyn Fn(&str) -> Result<String, StageError>>,
}

impl FnStage {
    pub fn new<F>(name: impl Into<String>, transform: F) -> Self
    where
        F: Fn(&str) -> Result<String, StageError> + 'static,
    {
        Self {
            name: name.into(),
            transform: Box::new(transform),
        }
    }
}

impl Stage for FnStage {
    fn apply(&self, input: &str) -> Result<String, StageError> {
        (self.transform)(input)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
