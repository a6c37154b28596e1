//! Plain-text rendering for suggestions, capacity reports and rule tables.
//!
//! Suggestions are grouped into one section per kind, in pipeline order.
//! Empty sections are omitted.

use std::fmt::Write;

use fieldhint_core::{CapacityReport, RuleConfig, Suggestion, SuggestionKind};

const SECTIONS: &[(SuggestionKind, &str)] = &[
    (SuggestionKind::StandardField, "Standard Fields"),
    (SuggestionKind::DateReference, "Reference Dates"),
    (SuggestionKind::MonetaryValue, "Monetary Values"),
    (SuggestionKind::Keyword, "Keywords"),
];

// ── Suggestions ──

/// Render one input's suggestions as a card grouped by kind.
pub fn render_suggestions(title: &str, suggestions: &[Suggestion]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {title} ===");
    if suggestions.is_empty() {
        let _ = writeln!(out, "(no suggestions)");
        let _ = writeln!(out);
        return out;
    }
    let _ = writeln!(out, "{} suggestion(s)", suggestions.len());
    let _ = writeln!(out);

    for &(kind, header) in SECTIONS {
        let group: Vec<&Suggestion> = suggestions.iter().filter(|s| s.kind == kind).collect();
        if group.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{header}");
        for s in group {
            let _ = writeln!(out, "  {:<26} -> {}", s.value, s.field);
            let _ = writeln!(out, "      {}", s.recommended_action);
        }
        let _ = writeln!(out);
    }
    out
}

// ── Capacity ──

pub fn render_capacity(title: &str, report: &CapacityReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {title} ===");
    let _ = writeln!(out);

    let m = &report.metrics;
    let _ = writeln!(out, "Metrics");
    let _ = writeln!(out, "  {:<26} {:.2}", "total_cycle_minutes", m.total_cycle_minutes);
    let _ = writeln!(out, "  {:<26} {:.2}", "max_throughput_per_hour", m.max_throughput_per_hour);
    if let Some(hours) = m.hours_for_target {
        let _ = writeln!(out, "  {:<26} {:.2}", "hours_for_target", hours);
    }
    let _ = writeln!(out);

    write_list(&mut out, "Bottlenecks", &report.bottlenecks);
    write_list(&mut out, "Recommendations", &report.recommendations);
    out
}

// ── Rules ──

pub fn render_rules(config: &RuleConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Entity tags");
    for rule in &config.entity_fields {
        let _ = writeln!(out, "  {:<26} {}", rule.key, rule.field);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Keywords (scan order)");
    for rule in &config.keyword_fields {
        let _ = writeln!(out, "  {:<26} {}", rule.key, rule.field);
    }
    out
}

// ── Helpers ──

fn write_list(out: &mut String, header: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "{header}");
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
    let _ = writeln!(out);
}
