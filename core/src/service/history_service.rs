use anyhow::Result;
use chrono::Local;
use tracing::info;

use crate::model::category::WasteCategory;
use crate::model::history::{HistoryEntry, ReductionStats};
use crate::repository::HistoryRepository;
use crate::service::dto::{HistorySummary, ImpactReport};

pub struct HistoryService<R: HistoryRepository> {
    repo: R,
}

impl<R: HistoryRepository> HistoryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Appends a run to the log and returns the stored entry.
    pub fn record(&mut self, categories: &[WasteCategory], report: &ImpactReport) -> Result<HistoryEntry> {
        let entry = HistoryEntry {
            seq: self.repo.count()? + 1,
            recorded_at: Local::now(),
            categories: categories.to_vec(),
            total_reduction: report.weekly.reduction,
            total_co2: report.weekly.co2_saved,
        };
        self.repo.append(entry.clone())?;

        info!(
            seq = entry.seq,
            reduction = entry.total_reduction,
            "calculation recorded"
        );
        Ok(entry)
    }

    pub fn count(&self) -> Result<usize> {
        self.repo.count()
    }

    pub fn summary(&self) -> Result<HistorySummary> {
        let entries = self.repo.list()?;
        let reductions: Vec<f64> = entries.iter().map(|e| e.total_reduction).collect();
        let stats = reduction_stats(&reductions);
        Ok(HistorySummary { entries, stats })
    }
}

/// `None` for fewer than two values; a single run has nothing to compare against.
pub fn reduction_stats(values: &[f64]) -> Option<ReductionStats> {
    if values.len() < 2 {
        return None;
    }

    let max = values.iter().copied().fold(f64::MIN, f64::max);
    let min = values.iter().copied().fold(f64::MAX, f64::min);
    let avg = values.iter().sum::<f64>() / values.len() as f64;

    Some(ReductionStats { max, min, avg })
}
