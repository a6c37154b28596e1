pub mod analysis;
pub mod config;
mod error;
pub mod fields;
pub mod literal;
pub mod process;
pub mod suggestion;

pub use analysis::{AnalysisResult, NamedEntity};
pub use config::RuleConfig;
pub use error::ConfigError;
pub use fields::FieldRule;
pub use process::{CapacityMetrics, CapacityReport, ProcessPlan, ProcessStep};
pub use suggestion::{Suggestion, SuggestionKind};
