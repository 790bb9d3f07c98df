// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::traits::Stage;

/// Ordered, mutable sequence of stages.
///
/// Stages are immutable once added; the chain itself can grow (`push`) and
/// shrink (`remove_first`) between pipeline runs. Removal is by stage name,
/// first occurrence only, mirroring delegate-list `-=` semantics.
#[derive(Clone, Default)]
pub struct StageChain(Vec<Arc<dyn Stage>>);

impl StageChain {
    /// Create a new empty chain
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a stage to the end of the chain (`+=` semantics).
    pub fn push(&mut self, stage: impl Stage + 'static) {
        self.0.push(Arc::new(stage));
    }

    /// Append an already-shared stage.
    pub fn push_arc(&mut self, stage: Arc<dyn Stage>) {
        self.0.push(stage);
    }

    /// Remove the first stage whose name matches (`-=` semantics).
    ///
    /// Later duplicates are left in place. Returns `false` when no stage
    /// with that name is in the chain.
    pub fn remove_first(&mut self, name: &str) -> bool {
        match self.0.iter().position(|stage| stage.name() == name) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of stages in the chain
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the chain has no stages
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the stages in execution order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Stage>> {
        self.0.iter()
    }

    /// Stage names in execution order
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|stage| stage.name()).collect()
    }
}

impl std::fmt::Debug for StageChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StageChain")
            .field("stage_count", &self.0.len())
            .field("stages", &self.names())
            .finish()
    }
}
