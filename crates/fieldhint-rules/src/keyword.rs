//! Status and priority keywords in raw text.

use fieldhint_core::fields::FieldRule;
use fieldhint_core::literal::canonical_keyword;
use fieldhint_core::{AnalysisResult, Suggestion};
use regex::Regex;

use crate::RulesError;
use crate::detector::{Detector, SeenSet};

/// A compiled keyword with the field it populates.
struct KeywordPattern {
    keyword: String,
    field: String,
    regex: Regex,
}

/// Emits one `KEYWORD` suggestion per table keyword present in the text, in
/// table order.
///
/// Matching is case-insensitive and whole-word: the keyword must be bounded
/// by non-word characters or the ends of the text, so `aprovado` does not
/// fire inside `desaprovados`. The canonical lowercase keyword is what gets
/// claimed and echoed back, never the matched casing.
pub struct KeywordScanner {
    patterns: Vec<KeywordPattern>,
}

impl KeywordScanner {
    pub fn new(rules: &[FieldRule]) -> Result<Self, RulesError> {
        let patterns = rules
            .iter()
            .map(|rule| -> Result<KeywordPattern, RulesError> {
                let keyword = canonical_keyword(&rule.key);
                let regex = Regex::new(&format!(
                    r"(?i)(?:^|\W){}(?:\W|$)",
                    regex::escape(&keyword)
                ))?;
                Ok(KeywordPattern {
                    keyword,
                    field: rule.field.clone(),
                    regex,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }
}

impl Detector for KeywordScanner {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn detect(&self, input: &AnalysisResult, seen: &mut SeenSet) -> Vec<Suggestion> {
        if input.raw_text.is_empty() {
            return Vec::new();
        }

        let mut out = Vec::new();
        for kp in &self.patterns {
            if seen.contains(&kp.keyword) || !kp.regex.is_match(&input.raw_text) {
                continue;
            }
            seen.claim(&kp.keyword);
            out.push(Suggestion::keyword(&kp.keyword, &kp.field));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldhint_core::fields::default_keyword_rules;

    fn scan(text: &str) -> Vec<(String, String)> {
        let scanner = KeywordScanner::new(&default_keyword_rules()).unwrap();
        let mut seen = SeenSet::new();
        scanner
            .detect(&AnalysisResult::new(vec![], text), &mut seen)
            .into_iter()
            .map(|s| (s.value, s.field))
            .collect()
    }

    fn keywords(text: &str) -> Vec<String> {
        scan(text).into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn status_and_priority_fields() {
        let found = scan("O pedido está pendente e é urgente.");
        assert_eq!(
            found,
            vec![
                ("pendente".to_string(), "Process Status".to_string()),
                ("urgente".to_string(), "Priority".to_string()),
            ]
        );
    }

    #[test]
    fn emitted_in_table_order_not_text_order() {
        assert_eq!(
            keywords("urgente: cancelado, depois aprovado"),
            ["aprovado", "cancelado", "urgente"]
        );
    }

    #[test]
    fn case_insensitive_canonical_literal() {
        assert_eq!(keywords("É URGENTE"), ["urgente"]);
        assert_eq!(keywords("Urgente e urgente e URGENTE"), ["urgente"]);
    }

    #[test]
    fn accented_keyword() {
        assert_eq!(keywords("Processo CONCLUÍDO."), ["concluído"]);
    }

    #[test]
    fn no_partial_word_matches() {
        assert!(keywords("desaprovado").is_empty());
        assert!(keywords("aprovados").is_empty());
        assert!(keywords("pendentes urgentemente").is_empty());
    }

    #[test]
    fn bounded_by_punctuation_and_edges() {
        assert_eq!(keywords("aprovado"), ["aprovado"]);
        assert_eq!(keywords("(revisado)"), ["revisado"]);
        assert_eq!(keywords("status:iniciado;"), ["iniciado"]);
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(keywords("").is_empty());
    }

    #[test]
    fn claimed_keyword_skipped() {
        let scanner = KeywordScanner::new(&default_keyword_rules()).unwrap();
        let mut seen = SeenSet::new();
        seen.claim("urgente");
        let out = scanner.detect(&AnalysisResult::new(vec![], "urgente e pendente"), &mut seen);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].value, "pendente");
    }

    #[test]
    fn regex_metacharacters_escaped() {
        let rules = vec![FieldRule::new("c++", "Key Term")];
        let scanner = KeywordScanner::new(&rules).unwrap();
        let mut seen = SeenSet::new();
        let out = scanner.detect(&AnalysisResult::new(vec![], "usa C++ no módulo"), &mut seen);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].value, "c++");
        assert!(
            scanner
                .detect(&AnalysisResult::new(vec![], "usa cxx"), &mut SeenSet::new())
                .is_empty()
        );
    }

    #[test]
    fn table_keys_canonicalised_on_build() {
        let rules = vec![FieldRule::new(" URGENTE ", "Priority")];
        let scanner = KeywordScanner::new(&rules).unwrap();
        let mut seen = SeenSet::new();
        let out = scanner.detect(&AnalysisResult::new(vec![], "urgente"), &mut seen);
        assert_eq!(out[0].value, "urgente");
        assert!(seen.contains("urgente"));
    }
}
