use std::io::Write;

use anyhow::Result;
use greencity_core::{CategoryImpact, ImpactReport};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct ImpactRow {
    #[tabled(rename = "CATEGORY")]
    category: String,
    #[tabled(rename = "CURRENT\n(kg/week)")]
    current: String,
    #[tabled(rename = "FUTURE\n(kg/week)")]
    future: String,
    #[tabled(rename = "REDUCTION\n(kg/week)")]
    reduction: String,
    #[tabled(rename = "CO2 SAVED\n(kg/week)")]
    co2: String,
    #[tabled(rename = "WATER SAVED\n(liters/week)")]
    water: String,
    #[tabled(rename = "ENERGY SAVED\n(kWh/week)")]
    energy: String,
}

impl From<&CategoryImpact> for ImpactRow {
    fn from(row: &CategoryImpact) -> Self {
        Self {
            category: row.name.to_string(),
            current: fmt2(row.current_landfill),
            future: fmt2(row.future_landfill),
            reduction: fmt2(row.reduction),
            co2: fmt2(row.co2_saved),
            water: fmt2(row.water_saved),
            energy: fmt2(row.energy_saved),
        }
    }
}

pub fn fmt2(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn render_report<W: Write>(out: &mut W, report: &ImpactReport) -> Result<()> {
    let mut rows: Vec<ImpactRow> = report.rows.iter().map(ImpactRow::from).collect();
    // Landfill columns have no meaningful sum
    rows.push(ImpactRow {
        category: "TOTALS".to_string(),
        current: String::new(),
        future: String::new(),
        reduction: fmt2(report.weekly.reduction),
        co2: fmt2(report.weekly.co2_saved),
        water: fmt2(report.weekly.water_saved),
        energy: fmt2(report.weekly.energy_saved),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    writeln!(out, "\n======= ENVIRONMENTAL IMPACT REPORT =======")?;
    writeln!(out, "{}", table)?;

    let annual = &report.annual;
    writeln!(out, "\n ANNUAL PROJECTIONS:")?;
    writeln!(out, "  - Landfill reduction: {} kg/year", fmt2(annual.reduction))?;
    writeln!(out, "  - CO2 emissions saved: {} kg/year", fmt2(annual.co2_saved))?;
    writeln!(out, "  - Water saved: {} liters/year", fmt2(annual.water_saved))?;
    writeln!(out, "  - Energy saved: {} kWh/year", fmt2(annual.energy_saved))?;

    let eq = &report.equivalencies;
    writeln!(out, "\n ENVIRONMENTAL EQUIVALENCIES:")?;
    writeln!(out, "  - CO2 savings equivalent to planting {} trees annually", eq.trees)?;
    writeln!(out, "  - Water savings could supply {} households for a year", eq.households)?;
    writeln!(out, "  - Energy savings could power {} homes for a year", eq.homes)?;

    Ok(())
}
