//! Rule configuration: the vocabularies an engine is built from.
//!
//! Loaded once at process start (built-in defaults or a JSON rule file) and
//! never mutated afterwards.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;
use crate::fields::{FieldRule, default_entity_rules, default_keyword_rules};
use crate::literal::{canonical_keyword, canonical_tag};

/// Ordered vocabularies for the entity mapper and the keyword scanner.
///
/// Either table may be omitted from a rule file, in which case the built-in
/// table is used.
///
/// ```json
/// {
///   "entity_fields":  [{"key": "PER", "field": "Responsible Party"}],
///   "keyword_fields": [{"key": "aprovado", "field": "Process Status"}]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(default = "default_entity_rules")]
    pub entity_fields: Vec<FieldRule>,
    #[serde(default = "default_keyword_rules")]
    pub keyword_fields: Vec<FieldRule>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            entity_fields: default_entity_rules(),
            keyword_fields: default_keyword_rules(),
        }
    }
}

impl RuleConfig {
    /// Parse, normalise and validate a JSON rule document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: Self = serde_json::from_str(json)?;
        raw.normalized()
    }

    /// Read a JSON rule file from disk.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        info!(
            path = %path.display(),
            entity_rules = config.entity_fields.len(),
            keyword_rules = config.keyword_fields.len(),
            "loaded rule file"
        );
        Ok(config)
    }

    /// Canonicalise keys (trimmed tags, lowercase keywords) and validate.
    pub fn normalized(self) -> Result<Self, ConfigError> {
        let entity_fields = self
            .entity_fields
            .into_iter()
            .map(|r| FieldRule::new(canonical_tag(&r.key), r.field.trim()))
            .collect();
        let keyword_fields = self
            .keyword_fields
            .into_iter()
            .map(|r| FieldRule::new(canonical_keyword(&r.key), r.field.trim()))
            .collect();
        let config = Self {
            entity_fields,
            keyword_fields,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject empty keys or fields and duplicate keys within a table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_table("entity", &self.entity_fields)?;
        validate_table("keyword", &self.keyword_fields)?;
        Ok(())
    }
}

fn validate_table(table: &'static str, rules: &[FieldRule]) -> Result<(), ConfigError> {
    let mut keys = HashSet::new();
    for (index, rule) in rules.iter().enumerate() {
        if rule.key.trim().is_empty() {
            return Err(ConfigError::EmptyEntry {
                table,
                index,
                part: "key",
            });
        }
        if rule.field.trim().is_empty() {
            return Err(ConfigError::EmptyEntry {
                table,
                index,
                part: "field",
            });
        }
        if !keys.insert(rule.key.as_str()) {
            return Err(ConfigError::DuplicateKey {
                table,
                key: rule.key.clone(),
            });
        }
    }
    Ok(())
}
