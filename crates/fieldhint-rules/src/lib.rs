//! Rule layer: suggestion detectors, the suggestion engine, and capacity analysis.

pub mod capacity;
pub mod date;
pub mod detector;
pub mod engine;
pub mod entity;
mod error;
pub mod keyword;
pub mod money;

pub use capacity::analyze_capacity;
pub use detector::{Detector, SeenSet};
pub use engine::SuggestionEngine;
pub use error::RulesError;
