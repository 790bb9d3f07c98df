use crate::errors::StageError;

/// A single named transformation step in a pipeline.
///
/// Stage names are declared explicitly by the implementation, never inferred
/// from the callable at runtime. The name is also the stage's identity for
/// chain removal, so two chain entries built from the same implementation
/// share an identity.
pub trait Stage {
    /// Transform the input, or reject it with a recoverable error.
    fn apply(&self, input: &str) -> Result<String, StageError>;

    fn name(&self) -> &str;
}
