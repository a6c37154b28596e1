//! Capacity analysis for production processes.
//!
//! Finds the bottleneck step, derives cycle time and throughput, checks the
//! target quantity against the deadline, and adds advice by process type.

use std::cmp::Ordering;

use fieldhint_core::{CapacityMetrics, CapacityReport, ProcessPlan};
use tracing::debug;

const MANUFACTURING_TYPES: &[&str] = &["manufacturing", "manufatura"];
const SERVICE_TYPES: &[&str] = &["service", "serviço", "servico"];

/// Analyse a plan. Never fails: a plan with no steps yields zero metrics and
/// no bottleneck.
pub fn analyze_capacity(plan: &ProcessPlan) -> CapacityReport {
    let mut report = CapacityReport::default();

    // First step wins on ties.
    let bottleneck = plan.steps.iter().min_by(|a, b| {
        a.capacity_per_hour
            .partial_cmp(&b.capacity_per_hour)
            .unwrap_or(Ordering::Equal)
    });

    if let Some(step) = bottleneck {
        report.bottlenecks.push(format!(
            "Step '{}' is a bottleneck with a capacity of {} units/hour.",
            step.name, step.capacity_per_hour
        ));
        report.recommendations.push(format!(
            "Consider increasing the capacity of step '{}' to improve production flow.",
            step.name
        ));
    }

    let throughput = bottleneck.map(|s| s.capacity_per_hour).unwrap_or(0.0);
    report.metrics = CapacityMetrics {
        total_cycle_minutes: plan.steps.iter().map(|s| s.duration_minutes).sum(),
        max_throughput_per_hour: throughput,
        hours_for_target: None,
    };

    if let Some(target) = plan.target_quantity
        && throughput > 0.0
    {
        let hours = target as f64 / throughput;
        report.metrics.hours_for_target = Some(hours);
        report.recommendations.push(format!(
            "Producing {target} units takes at least {hours:.2} hours."
        ));
        // A zero deadline means no deadline was given.
        if plan.deadline_days > 0 && hours > f64::from(plan.deadline_days) * 24.0 {
            report.recommendations.push(format!(
                "The deadline of {} days may be too tight for the target quantity. \
                 Consider adjusting the target or the capacity.",
                plan.deadline_days
            ));
        }
    }

    let process_type = plan.process_type.trim().to_lowercase();
    if MANUFACTURING_TYPES.contains(&process_type.as_str()) {
        report
            .recommendations
            .push("Evaluate lean manufacturing techniques to reduce waste.".to_string());
    } else if SERVICE_TYPES.contains(&process_type.as_str()) {
        report.recommendations.push(
            "Consider standardising procedures to improve service efficiency.".to_string(),
        );
    }

    debug!(
        plan = %plan.name,
        steps = plan.steps.len(),
        bottlenecks = report.bottlenecks.len(),
        recommendations = report.recommendations.len(),
        "capacity analysis complete"
    );
    report
}
