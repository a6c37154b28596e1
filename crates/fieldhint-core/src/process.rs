//! Production-process plan types for capacity analysis.

use serde::{Deserialize, Serialize};

/// One stage of a production process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub name: String,
    pub duration_minutes: f64,
    pub capacity_per_hour: f64,
}

/// A process to analyse: ordered steps plus the production target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessPlan {
    #[serde(default)]
    pub name: String,
    /// Free-form category, e.g. "manufacturing" or "service".
    #[serde(default)]
    pub process_type: String,
    #[serde(default)]
    pub target_quantity: Option<u64>,
    #[serde(default)]
    pub deadline_days: u32,
    #[serde(default)]
    pub steps: Vec<ProcessStep>,
}

/// Expected performance figures for a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapacityMetrics {
    /// Sum of all step durations.
    pub total_cycle_minutes: f64,
    /// Throughput of the slowest step (0 with no steps).
    pub max_throughput_per_hour: f64,
    /// Hours needed to reach the target at max throughput, when computable.
    pub hours_for_target: Option<f64>,
}

/// Outcome of a capacity analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapacityReport {
    pub bottlenecks: Vec<String>,
    pub recommendations: Vec<String>,
    pub metrics: CapacityMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_minimal_json() {
        let plan: ProcessPlan = serde_json::from_str(r#"{"name": "Faturas"}"#).unwrap();
        assert_eq!(plan.name, "Faturas");
        assert!(plan.steps.is_empty());
        assert!(plan.target_quantity.is_none());
        assert_eq!(plan.deadline_days, 0);
    }

    #[test]
    fn plan_full_json() {
        let json = r#"{
            "name": "Assembly",
            "process_type": "manufacturing",
            "target_quantity": 500,
            "deadline_days": 3,
            "steps": [
                {"name": "cut", "duration_minutes": 5, "capacity_per_hour": 40},
                {"name": "weld", "duration_minutes": 12.5, "capacity_per_hour": 10}
            ]
        }"#;
        let plan: ProcessPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.target_quantity, Some(500));
        assert_eq!(plan.steps.len(), 2);
        assert_eq!(plan.steps[1].duration_minutes, 12.5);
    }
}
