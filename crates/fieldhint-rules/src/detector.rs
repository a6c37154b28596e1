//! The detector seam shared by every strategy, and the per-call seen-set.

use std::collections::HashSet;

use fieldhint_core::{AnalysisResult, Suggestion};

/// Literals already claimed by a suggestion during one engine call.
///
/// Created empty at the start of a call and dropped at the end; never shared
/// between calls.
#[derive(Debug, Default)]
pub struct SeenSet {
    literals: HashSet<String>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, literal: &str) -> bool {
        self.literals.contains(literal)
    }

    /// Record `literal`. Returns `false` if it was already claimed.
    pub fn claim(&mut self, literal: &str) -> bool {
        if self.literals.contains(literal) {
            return false;
        }
        self.literals.insert(literal.to_string())
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

/// One independent detection strategy.
///
/// Implementations read the input, skip literals already in `seen`, claim the
/// literals they emit for, and return suggestions in first-encounter order.
pub trait Detector: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    fn detect(&self, input: &AnalysisResult, seen: &mut SeenSet) -> Vec<Suggestion>;
}
