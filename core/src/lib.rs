pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;

pub use config::Settings;
pub use error::InputError;
pub use input::{parse_number, validate_rate, validate_target_rate, validate_weekly_waste};
pub use model::category::{CategoryProfile, WasteCategory, DEFAULT_PROFILES};
pub use model::history::{HistoryEntry, ReductionStats};
pub use repository::{HistoryRepository, InMemoryHistoryRepository};
pub use service::dto::{CategoryImpact, Equivalencies, HistorySummary, ImpactReport, ImpactTotals};
pub use service::history_service::HistoryService;
pub use service::impact_service::ImpactCalculator;
