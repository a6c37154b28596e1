//! The suggestion engine: a fixed pipeline of detectors over one input.
//!
//! Detectors run in registration order and share a single [`SeenSet`] per
//! call, so a literal claimed by an earlier detector is never suggested again
//! by a later one. Output is the concatenation of each detector's output, in
//! detector order. The engine is immutable once built and can be shared
//! across threads; every call builds its own seen-set.

use fieldhint_core::{AnalysisResult, RuleConfig, Suggestion};
use tracing::{debug, info};

use crate::RulesError;
use crate::date::DatePatternExtractor;
use crate::detector::{Detector, SeenSet};
use crate::entity::EntityMapper;
use crate::keyword::KeywordScanner;
use crate::money::MonetaryPatternExtractor;

pub struct SuggestionEngine {
    detectors: Vec<Box<dyn Detector>>,
}

impl SuggestionEngine {
    /// Build the standard pipeline: entities, dates, money, keywords.
    pub fn new(config: &RuleConfig) -> Result<Self, RulesError> {
        config.validate()?;
        Ok(Self::from_detectors(vec![
            Box::new(EntityMapper::new(config.entity_fields.clone())),
            Box::new(DatePatternExtractor::new()?),
            Box::new(MonetaryPatternExtractor::new()?),
            Box::new(KeywordScanner::new(&config.keyword_fields)?),
        ]))
    }

    /// Standard pipeline over the built-in vocabularies.
    pub fn with_defaults() -> Result<Self, RulesError> {
        Self::new(&RuleConfig::default())
    }

    /// Custom pipeline. Detectors run in the given order.
    pub fn from_detectors(detectors: Vec<Box<dyn Detector>>) -> Self {
        Self { detectors }
    }

    /// Detector names in run order.
    pub fn detector_names(&self) -> Vec<&'static str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }

    /// Derive the ordered, deduplicated suggestions for one input.
    ///
    /// Total: empty or missing text and entities just produce fewer
    /// suggestions.
    pub fn suggest(&self, input: &AnalysisResult) -> Vec<Suggestion> {
        let mut seen = SeenSet::new();
        let mut out = Vec::new();

        for detector in &self.detectors {
            let found = detector.detect(input, &mut seen);
            debug!(detector = detector.name(), count = found.len(), "detector finished");
            out.extend(found);
        }

        info!(
            entities = input.entities.len(),
            text_bytes = input.raw_text.len(),
            suggestions = out.len(),
            "suggestion run complete"
        );
        out
    }

    /// Run [`suggest`](Self::suggest) independently for each input.
    pub fn suggest_batch(&self, inputs: &[AnalysisResult]) -> Vec<Vec<Suggestion>> {
        inputs.iter().map(|input| self.suggest(input)).collect()
    }
}
