//! Upstream text-analysis types consumed by the suggestion engine.
//!
//! The NLP collaborator emits entities and the original text under Portuguese
//! wire names (`entidades_nomeadas`, `texto_original`, ...). Both those and the
//! English field names are accepted, and anything missing or `null` degrades
//! to an empty default instead of failing the whole payload.

use serde::{Deserialize, Deserializer, Serialize};

/// A text span tagged with a coarse semantic category by the upstream recognizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntity {
    #[serde(default, alias = "texto", deserialize_with = "null_as_default")]
    pub text: String,
    /// Open tag vocabulary (`PER`, `ORG`, `LOC`, `MISC`, or anything else).
    #[serde(default, alias = "tipo_entidade", deserialize_with = "null_as_default")]
    pub entity_type: String,
}

impl NamedEntity {
    pub fn new(text: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            entity_type: entity_type.into(),
        }
    }
}

/// The engine's sole input. Read-only for the duration of a call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(
        default,
        alias = "entidades_nomeadas",
        deserialize_with = "null_as_default"
    )]
    pub entities: Vec<NamedEntity>,
    #[serde(default, alias = "texto_original", deserialize_with = "null_as_default")]
    pub raw_text: String,
}

impl AnalysisResult {
    pub fn new(entities: Vec<NamedEntity>, raw_text: impl Into<String>) -> Self {
        Self {
            entities,
            raw_text: raw_text.into(),
        }
    }

    /// True when there is neither an entity nor any text to scan.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.raw_text.trim().is_empty()
    }
}

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
