use chrono::{DateTime, Local};

use crate::model::category::WasteCategory;

/// One completed calculation: the figures as entered and the weekly totals.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub seq: usize,
    pub recorded_at: DateTime<Local>,
    pub categories: Vec<WasteCategory>,
    pub total_reduction: f64,
    pub total_co2: f64,
}

/// Max/min/average weekly reduction across all recorded runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReductionStats {
    pub max: f64,
    pub min: f64,
    pub avg: f64,
}
