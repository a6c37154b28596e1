//! Literal normalisation for seen-set keys.
//!
//! Keywords are case-insensitive, so they are folded to one canonical form
//! before they reach the seen-set or a suggestion. Entity tags are compared
//! exactly but tolerate stray whitespace from hand-written rule files.
//! Entity texts, dates and monetary values are never normalised: the matched
//! literal is the key.

/// Canonical keyword form: trimmed and lowercased (Unicode-aware).
///
/// "URGENTE", " Urgente " and "urgente" all become "urgente".
pub fn canonical_keyword(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Canonical entity tag form: trimmed, case preserved.
pub fn canonical_tag(s: &str) -> &str {
    s.trim()
}
