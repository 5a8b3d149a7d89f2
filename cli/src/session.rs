use std::io::{BufRead, Write};

use anyhow::Result;
use greencity_core::{
    parse_number, validate_rate, validate_target_rate, validate_weekly_waste, HistoryEntry,
    HistoryRepository, HistoryService, ImpactCalculator, WasteCategory, DEFAULT_PROFILES,
};
use tracing::{debug, info};

use crate::history::show_history;
use crate::prompt::{prompt_until, read_line};
use crate::report::render_report;
use crate::tips::render_tips;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuChoice {
    Calculate,
    History,
    Tips,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Calculate),
            "2" => Some(MenuChoice::History),
            "3" => Some(MenuChoice::Tips),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// One interactive run of the calculator. Owns its history for its whole lifetime.
pub struct Session<R: BufRead, W: Write, H: HistoryRepository> {
    input: R,
    out: W,
    calculator: ImpactCalculator,
    history: HistoryService<H>,
}

impl<R: BufRead, W: Write, H: HistoryRepository> Session<R, W, H> {
    pub fn new(input: R, out: W, calculator: ImpactCalculator, history: HistoryService<H>) -> Self {
        Self {
            input,
            out,
            calculator,
            history,
        }
    }

    #[cfg(test)]
    pub fn history(&self) -> &HistoryService<H> {
        &self.history
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    pub fn run(&mut self) -> Result<()> {
        self.header()?;

        loop {
            self.menu()?;
            let Some(line) = read_line(&mut self.input)? else {
                debug!("input closed at menu");
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Calculate) => {
                    if self.calculate()?.is_none() {
                        writeln!(self.out, "\nInput closed; calculation discarded.")?;
                        break;
                    }
                }
                Some(MenuChoice::History) => {
                    let summary = self.history.summary()?;
                    show_history(&mut self.out, &summary)?;
                }
                Some(MenuChoice::Tips) => render_tips(&mut self.out)?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.out, "\nThank you for using GreenCity. Goodbye!")?;
                    break;
                }
                None => {
                    writeln!(self.out, "Invalid choice. Please enter a number between 1 and 4.")?;
                }
            }
        }

        info!(entries = self.history.count()?, "session finished");
        Ok(())
    }

    /// Collects figures, prints the report and records it.
    /// `None` when the input closed before every figure was entered.
    pub fn calculate(&mut self) -> Result<Option<HistoryEntry>> {
        let Some(categories) = self.collect_categories()? else {
            return Ok(None);
        };

        let report = self.calculator.calculate(&categories);
        render_report(&mut self.out, &report)?;

        let entry = self.history.record(&categories, &report)?;
        writeln!(self.out, "\nCalculation saved to history!")?;
        Ok(Some(entry))
    }

    fn collect_categories(&mut self) -> Result<Option<Vec<WasteCategory>>> {
        writeln!(self.out, "\n===== WASTE DATA INPUT =====")?;

        let mut categories = Vec::with_capacity(DEFAULT_PROFILES.len());
        for profile in DEFAULT_PROFILES {
            writeln!(self.out, "\nCategory: {}", profile.name)?;

            let Some(weekly) = prompt_until(&mut self.input, &mut self.out, "Enter weekly waste (kg): ", |s| {
                parse_number(s).and_then(validate_weekly_waste)
            })?
            else {
                return Ok(None);
            };

            let Some(current) = prompt_until(&mut self.input, &mut self.out, "Enter current recycling rate (%): ", |s| {
                parse_number(s).and_then(validate_rate)
            })?
            else {
                return Ok(None);
            };

            let Some(target) = prompt_until(&mut self.input, &mut self.out, "Enter target recycling rate (%): ", |s| {
                parse_number(s).and_then(|v| validate_target_rate(v, current))
            })?
            else {
                return Ok(None);
            };

            categories.push(WasteCategory::new(profile, weekly, current, target)?);
        }

        Ok(Some(categories))
    }

    fn header(&mut self) -> Result<()> {
        writeln!(self.out, "============================================================")?;
        writeln!(self.out, "   GREEN CITY: ADVANCED SMART WASTE MANAGEMENT SYSTEM")?;
        writeln!(self.out, "============================================================\n")?;
        writeln!(self.out, "This program helps cities and individuals track waste reduction")?;
        writeln!(self.out, "and environmental impact through improved waste management.")?;
        Ok(())
    }

    fn menu(&mut self) -> Result<()> {
        writeln!(self.out, "\n============ MAIN MENU ============")?;
        writeln!(self.out, "1. Calculate Waste Reduction Impact")?;
        writeln!(self.out, "2. View Calculation History")?;
        writeln!(self.out, "3. Environmental Tips")?;
        writeln!(self.out, "4. Exit Program")?;
        writeln!(self.out, "===================================")?;
        write!(self.out, "Enter your choice: ")?;
        self.out.flush()?;
        Ok(())
    }
}
