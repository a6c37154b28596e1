//! Standardized-field vocabulary.
//!
//! Both vocabularies are ordered `{key, field}` lists. Iteration order is part
//! of the contract: the keyword scanner emits in table order, and on duplicate
//! keys the first entry wins.

use serde::{Deserialize, Serialize};

pub const RESPONSIBLE_PARTY_FIELD: &str = "Responsible Party";
pub const ORGANIZATION_FIELD: &str = "Organization Involved";
pub const LOCATION_FIELD: &str = "Execution Location";
pub const KEY_TERM_FIELD: &str = "Key Term";
pub const REFERENCE_DATE_FIELD: &str = "Reference Date";
pub const MONETARY_VALUE_FIELD: &str = "Monetary Value";
pub const STATUS_FIELD: &str = "Process Status";
pub const PRIORITY_FIELD: &str = "Priority";

/// Entity tag → standardized field, in declared order.
pub const ENTITY_FIELDS: &[(&str, &str)] = &[
    ("PER", RESPONSIBLE_PARTY_FIELD),
    ("ORG", ORGANIZATION_FIELD),
    ("LOC", LOCATION_FIELD),
    ("MISC", KEY_TERM_FIELD),
];

/// Lowercase keyword → standardized field, in declared (scan) order.
///
/// Surface forms are Portuguese: approved, reviewed, pending, completed,
/// started, cancelled, urgent.
pub const KEYWORD_FIELDS: &[(&str, &str)] = &[
    ("aprovado", STATUS_FIELD),
    ("revisado", STATUS_FIELD),
    ("pendente", STATUS_FIELD),
    ("concluído", STATUS_FIELD),
    ("iniciado", STATUS_FIELD),
    ("cancelado", STATUS_FIELD),
    ("urgente", PRIORITY_FIELD),
];

/// One row of a vocabulary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    pub key: String,
    pub field: String,
}

impl FieldRule {
    pub fn new(key: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            field: field.into(),
        }
    }
}

pub fn default_entity_rules() -> Vec<FieldRule> {
    to_rules(ENTITY_FIELDS)
}

pub fn default_keyword_rules() -> Vec<FieldRule> {
    to_rules(KEYWORD_FIELDS)
}

/// First field mapped to `key`, if any.
pub fn lookup<'a>(rules: &'a [FieldRule], key: &str) -> Option<&'a str> {
    rules
        .iter()
        .find(|r| r.key == key)
        .map(|r| r.field.as_str())
}

fn to_rules(table: &[(&str, &str)]) -> Vec<FieldRule> {
    table.iter().map(|&(k, f)| FieldRule::new(k, f)).collect()
}
