//! Suggestions produced by the engine.

use serde::{Deserialize, Serialize};

use crate::fields::{MONETARY_VALUE_FIELD, REFERENCE_DATE_FIELD};

/// Which detection strategy produced a suggestion.
///
/// Declaration order is pipeline order, so `Ord` sorts the way the engine emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuggestionKind {
    StandardField,
    DateReference,
    MonetaryValue,
    Keyword,
}

impl SuggestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StandardField => "STANDARD_FIELD",
            Self::DateReference => "DATE_REFERENCE",
            Self::MonetaryValue => "MONETARY_VALUE",
            Self::Keyword => "KEYWORD",
        }
    }
}

impl std::fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recommended mapping from a detected literal to a standardized field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    /// The literal that triggered the suggestion, as recorded in the seen-set.
    pub value: String,
    /// Standardized field the literal should populate.
    pub field: String,
    pub description: String,
    pub recommended_action: String,
}

impl Suggestion {
    /// A named entity whose tag maps onto a standardized field.
    pub fn standard_field(value: &str, field: &str) -> Self {
        Self {
            kind: SuggestionKind::StandardField,
            value: value.to_string(),
            field: field.to_string(),
            description: format!("The term '{value}' was identified as '{field}'."),
            recommended_action: format!(
                "Consider adding the value '{value}' to the standardized field '{field}'."
            ),
        }
    }

    pub fn date_reference(value: &str) -> Self {
        Self {
            kind: SuggestionKind::DateReference,
            value: value.to_string(),
            field: REFERENCE_DATE_FIELD.to_string(),
            description: format!(
                "The date '{value}' was found in the text and may be a reference or deadline date."
            ),
            recommended_action: format!(
                "Consider recording '{value}' in the standardized field '{REFERENCE_DATE_FIELD}'."
            ),
        }
    }

    pub fn monetary_value(value: &str) -> Self {
        Self {
            kind: SuggestionKind::MonetaryValue,
            value: value.to_string(),
            field: MONETARY_VALUE_FIELD.to_string(),
            description: format!("The monetary value '{value}' was found in the text."),
            recommended_action: format!(
                "Consider recording '{value}' in the standardized field '{MONETARY_VALUE_FIELD}'."
            ),
        }
    }

    /// A status or priority keyword. `value` is the canonical keyword form.
    pub fn keyword(value: &str, field: &str) -> Self {
        Self {
            kind: SuggestionKind::Keyword,
            value: value.to_string(),
            field: field.to_string(),
            description: format!("The keyword '{value}' indicates a value for '{field}'."),
            recommended_action: format!(
                "Consider setting the standardized field '{field}' to '{value}'."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_screaming_snake() {
        let json = serde_json::to_string(&SuggestionKind::MonetaryValue).unwrap();
        assert_eq!(json, "\"MONETARY_VALUE\"");
        let parsed: SuggestionKind = serde_json::from_str("\"STANDARD_FIELD\"").unwrap();
        assert_eq!(parsed, SuggestionKind::StandardField);
    }

    #[test]
    fn kind_order_matches_pipeline() {
        assert!(SuggestionKind::StandardField < SuggestionKind::DateReference);
        assert!(SuggestionKind::DateReference < SuggestionKind::MonetaryValue);
        assert!(SuggestionKind::MonetaryValue < SuggestionKind::Keyword);
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(SuggestionKind::Keyword.to_string(), "KEYWORD");
    }

    #[test]
    fn standard_field_names_literal_and_field() {
        let s = Suggestion::standard_field("Carlos Pereira", "Responsible Party");
        assert_eq!(s.kind, SuggestionKind::StandardField);
        assert!(s.description.contains("'Carlos Pereira'"));
        assert!(s.description.contains("'Responsible Party'"));
        assert!(s.recommended_action.contains("'Carlos Pereira'"));
        assert!(s.recommended_action.contains("'Responsible Party'"));
    }

    #[test]
    fn pattern_suggestions_target_fixed_fields() {
        let d = Suggestion::date_reference("25/12/2025");
        assert_eq!(d.field, REFERENCE_DATE_FIELD);
        assert!(d.description.contains("deadline"));

        let m = Suggestion::monetary_value("R$ 1.500,00");
        assert_eq!(m.field, MONETARY_VALUE_FIELD);
        assert!(m.recommended_action.contains("'R$ 1.500,00'"));
    }

    #[test]
    fn suggestion_json_shape() {
        let s = Suggestion::keyword("urgente", "Priority");
        let v: serde_json::Value = serde_json::to_value(&s).unwrap();
        assert_eq!(v["kind"], "KEYWORD");
        assert_eq!(v["value"], "urgente");
        assert_eq!(v["field"], "Priority");
        assert!(v["recommended_action"].as_str().unwrap().contains("Priority"));
    }
}
