//! Date-shaped substrings in raw text.

use fieldhint_core::{AnalysisResult, Suggestion};
use regex::Regex;

use crate::RulesError;
use crate::detector::{Detector, SeenSet};

/// `YYYY-MM-DD` first so a four-digit year is never split into a day.
/// Shape only: `31/02/2025` and `99-99-99` both match.
const DATE_PATTERN: &str = r"\b(?:\d{4}[-/]\d{1,2}[-/]\d{1,2}|\d{1,2}[-/]\d{1,2}[-/](?:\d{4}|\d{2}))\b";

/// Emits a `DATE_REFERENCE` suggestion per distinct date-shaped literal,
/// left to right.
pub struct DatePatternExtractor {
    pattern: Regex,
}

impl DatePatternExtractor {
    pub fn new() -> Result<Self, RulesError> {
        Ok(Self {
            pattern: Regex::new(DATE_PATTERN)?,
        })
    }
}

impl Detector for DatePatternExtractor {
    fn name(&self) -> &'static str {
        "date"
    }

    fn detect(&self, input: &AnalysisResult, seen: &mut SeenSet) -> Vec<Suggestion> {
        self.pattern
            .find_iter(&input.raw_text)
            .filter(|m| seen.claim(m.as_str()))
            .map(|m| Suggestion::date_reference(m.as_str()))
            .collect()
    }
}
