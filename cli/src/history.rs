use std::io::Write;

use anyhow::Result;
use greencity_core::{HistoryEntry, HistorySummary};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

use crate::report::fmt2;

// Helper struct for Table Row
#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Entry")]
    entry: String,
    #[tabled(rename = "Recorded")]
    recorded: String,
    #[tabled(rename = "Reduction (kg/week)")]
    reduction: String,
    #[tabled(rename = "CO2 Saved (kg/week)")]
    co2: String,
    #[tabled(rename = "Categories")]
    categories: String,
}

pub fn show_history<W: Write>(out: &mut W, summary: &HistorySummary) -> Result<()> {
    if summary.is_empty() {
        writeln!(out, "\nNo calculation history available.")?;
        return Ok(());
    }

    let rows: Vec<HistoryRow> = summary
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| HistoryRow {
            entry: format!("#{}", entry.seq),
            recorded: entry.recorded_at.format("%Y-%m-%d %H:%M").to_string(),
            reduction: fmt2(entry.total_reduction),
            co2: fmt2(entry.total_co2),
            // Breakdown only for the first and latest runs
            categories: if summary.shows_breakdown(i) {
                category_breakdown(entry)
            } else {
                "-".to_string()
            },
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    writeln!(out, "\n===== CALCULATION HISTORY =====")?;
    writeln!(out, "{}", table)?;
    writeln!(out, "\nTotal entries: {}", summary.count())?;

    if let Some(stats) = summary.stats {
        writeln!(out, "\n STATISTICS:")?;
        writeln!(out, "  Max Reduction: {} kg/week", fmt2(stats.max))?;
        writeln!(out, "  Min Reduction: {} kg/week", fmt2(stats.min))?;
        writeln!(out, "  Avg Reduction: {} kg/week", fmt2(stats.avg))?;
    }

    Ok(())
}

fn category_breakdown(entry: &HistoryEntry) -> String {
    entry
        .categories
        .iter()
        .map(|c| format!("{} ({}kg)", c.name(), fmt2(c.weekly_waste())))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use greencity_core::{ReductionStats, WasteCategory, DEFAULT_PROFILES};

    fn entry(seq: usize, reduction: f64) -> HistoryEntry {
        HistoryEntry {
            seq,
            recorded_at: Local::now(),
            categories: vec![WasteCategory::new(DEFAULT_PROFILES[2], 4.0, 0.0, 25.0).unwrap()],
            total_reduction: reduction,
            total_co2: reduction * 0.5,
        }
    }

    fn render(summary: &HistorySummary) -> String {
        let mut out = Vec::new();
        show_history(&mut out, summary).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_history_message() {
        let summary = HistorySummary {
            entries: Vec::new(),
            stats: None,
        };
        assert_eq!(render(&summary), "\nNo calculation history available.\n");
    }

    #[test]
    fn test_single_entry_without_statistics() {
        let summary = HistorySummary {
            entries: vec![entry(1, 1.0)],
            stats: None,
        };
        let printed = render(&summary);
        assert!(printed.contains("#1"));
        assert!(printed.contains("Paper (4.00kg)"));
        assert!(printed.contains("Total entries: 1"));
        assert!(!printed.contains("STATISTICS"));
    }

    #[test]
    fn test_statistics_block() {
        let summary = HistorySummary {
            entries: vec![entry(1, 10.0), entry(2, 20.0)],
            stats: Some(ReductionStats {
                max: 20.0,
                min: 10.0,
                avg: 15.0,
            }),
        };
        let printed = render(&summary);
        assert!(printed.contains("Total entries: 2"));
        assert!(printed.contains("Max Reduction: 20.00 kg/week"));
        assert!(printed.contains("Min Reduction: 10.00 kg/week"));
        assert!(printed.contains("Avg Reduction: 15.00 kg/week"));
    }
}
