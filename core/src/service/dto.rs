use crate::model::history::{HistoryEntry, ReductionStats};

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryImpact {
    pub name: &'static str,
    pub current_landfill: f64, // kg/week
    pub future_landfill: f64,  // kg/week
    pub reduction: f64,        // kg/week
    pub co2_saved: f64,        // kg/week
    pub water_saved: f64,      // liters/week
    pub energy_saved: f64,     // kWh/week
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImpactTotals {
    pub reduction: f64,
    pub co2_saved: f64,
    pub water_saved: f64,
    pub energy_saved: f64,
}

impl ImpactTotals {
    pub fn add(&mut self, row: &CategoryImpact) {
        self.reduction += row.reduction;
        self.co2_saved += row.co2_saved;
        self.water_saved += row.water_saved;
        self.energy_saved += row.energy_saved;
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            reduction: self.reduction * factor,
            co2_saved: self.co2_saved * factor,
            water_saved: self.water_saved * factor,
            energy_saved: self.energy_saved * factor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equivalencies {
    pub trees: u64,
    pub households: u64,
    pub homes: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImpactReport {
    pub rows: Vec<CategoryImpact>,
    pub weekly: ImpactTotals,
    pub annual: ImpactTotals,
    pub equivalencies: Equivalencies,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistorySummary {
    pub entries: Vec<HistoryEntry>,
    /// Only present once two or more runs have been recorded.
    pub stats: Option<ReductionStats>,
}

impl HistorySummary {
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose category breakdown is shown: the first and the last.
    pub fn shows_breakdown(&self, index: usize) -> bool {
        index == 0 || index + 1 == self.entries.len()
    }
}
