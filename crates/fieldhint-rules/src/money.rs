//! Currency-shaped substrings in raw text.

use fieldhint_core::{AnalysisResult, Suggestion};
use regex::Regex;

use crate::RulesError;
use crate::detector::{Detector, SeenSet};

/// Two shapes, case-insensitive:
///
/// - symbol prefix: `R$`, `$`, `€` or `£`, optional whitespace, then an amount
///   (`R$ 1.500,00`, `€1500`, `$ 12`);
/// - word suffix: an amount, whitespace, then `reais`, `dólares`, `euros` or
///   `libras` (`1,500.00 dólares`, `300 reais`).
///
/// An amount is an integer part grouped in threes or ungrouped, plus an
/// optional two-digit fraction. Either separator convention is accepted
/// (`1.500,00` and `1,500.00`), so a foreign-formatted amount is captured
/// whole rather than cut at its first separator.
const MONEY_PATTERN: &str = concat!(
    r"(?i)",
    r"(?:R\$|\$|€|£)\s*(?:\d{1,3}(?:[.,]\d{3})+|\d+)(?:[.,]\d{2})?\b",
    r"|",
    r"\b(?:\d{1,3}(?:[.,]\d{3})+|\d+)(?:[.,]\d{2})?\s+(?:reais|d[óo]lares|euros|libras)\b",
);

/// Emits a `MONETARY_VALUE` suggestion per distinct currency literal, left to
/// right.
pub struct MonetaryPatternExtractor {
    pattern: Regex,
}

impl MonetaryPatternExtractor {
    pub fn new() -> Result<Self, RulesError> {
        Ok(Self {
            pattern: Regex::new(MONEY_PATTERN)?,
        })
    }
}

impl Detector for MonetaryPatternExtractor {
    fn name(&self) -> &'static str {
        "money"
    }

    fn detect(&self, input: &AnalysisResult, seen: &mut SeenSet) -> Vec<Suggestion> {
        self.pattern
            .find_iter(&input.raw_text)
            .filter(|m| seen.claim(m.as_str()))
            .map(|m| Suggestion::monetary_value(m.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amounts(text: &str) -> Vec<String> {
        let extractor = MonetaryPatternExtractor::new().unwrap();
        let mut seen = SeenSet::new();
        extractor
            .detect(&AnalysisResult::new(vec![], text), &mut seen)
            .into_iter()
            .map(|s| s.value)
            .collect()
    }

    #[test]
    fn real_symbol_grouped_with_cents() {
        assert_eq!(amounts("no valor de R$ 1.500,00."), ["R$ 1.500,00"]);
    }

    #[test]
    fn symbol_without_space_or_cents() {
        assert_eq!(amounts("custa €250 hoje"), ["€250"]);
        assert_eq!(amounts("custa £ 1.000 hoje"), ["£ 1.000"]);
        assert_eq!(amounts("custa $ 12 hoje"), ["$ 12"]);
    }

    #[test]
    fn ungrouped_integer_part() {
        assert_eq!(amounts("R$ 1500,00"), ["R$ 1500,00"]);
    }

    #[test]
    fn symbol_case_insensitive() {
        assert_eq!(amounts("r$ 10,00"), ["r$ 10,00"]);
    }

    #[test]
    fn currency_word_suffix() {
        assert_eq!(amounts("pagar 1,500.00 dólares"), ["1,500.00 dólares"]);
        assert_eq!(amounts("pagar 300 reais"), ["300 reais"]);
        assert_eq!(amounts("pagar 20 euros e 5 libras"), ["20 euros", "5 libras"]);
    }

    #[test]
    fn currency_word_case_insensitive() {
        assert_eq!(amounts("100 REAIS"), ["100 REAIS"]);
        assert_eq!(amounts("100 Dólares"), ["100 Dólares"]);
    }

    #[test]
    fn word_suffix_keeps_whole_amount() {
        assert_eq!(amounts("total 1.500,00 reais"), ["1.500,00 reais"]);
    }

    #[test]
    fn currency_word_must_be_whole_word() {
        assert!(amounts("10 reaisx").is_empty());
    }

    #[test]
    fn bare_numbers_ignored() {
        assert!(amounts("processo 1.500 com 3 etapas").is_empty());
        assert!(amounts("").is_empty());
    }

    #[test]
    fn repeated_value_suggested_once_in_order() {
        assert_eq!(
            amounts("R$ 10,00 depois 20 euros depois R$ 10,00"),
            ["R$ 10,00", "20 euros"]
        );
    }

    #[test]
    fn claimed_value_skipped() {
        let extractor = MonetaryPatternExtractor::new().unwrap();
        let mut seen = SeenSet::new();
        seen.claim("300 reais");
        let out = extractor.detect(&AnalysisResult::new(vec![], "300 reais"), &mut seen);
        assert!(out.is_empty());
    }
}
