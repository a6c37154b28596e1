//! Named entity → standardized field mapping.

use fieldhint_core::fields::{FieldRule, lookup};
use fieldhint_core::literal::canonical_tag;
use fieldhint_core::{AnalysisResult, Suggestion};
use tracing::debug;

use crate::detector::{Detector, SeenSet};

/// Emits one `STANDARD_FIELD` suggestion per distinct entity text whose tag
/// is in the entity table.
///
/// First occurrence of a text wins, whatever its tag. Entities with an
/// unmapped tag are skipped without claiming their text, so a later entity
/// or pattern can still claim it.
pub struct EntityMapper {
    rules: Vec<FieldRule>,
}

impl EntityMapper {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }
}

impl Detector for EntityMapper {
    fn name(&self) -> &'static str {
        "entity"
    }

    fn detect(&self, input: &AnalysisResult, seen: &mut SeenSet) -> Vec<Suggestion> {
        let mut out = Vec::new();

        for entity in &input.entities {
            if entity.text.trim().is_empty() || seen.contains(&entity.text) {
                continue;
            }
            let Some(field) = lookup(&self.rules, canonical_tag(&entity.entity_type)) else {
                debug!(tag = %entity.entity_type, "unmapped entity tag");
                continue;
            };
            seen.claim(&entity.text);
            out.push(Suggestion::standard_field(&entity.text, field));
        }

        out
    }
}
