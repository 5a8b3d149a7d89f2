use tracing::debug;

use crate::config::Settings;
use crate::model::category::WasteCategory;
use crate::service::dto::{CategoryImpact, Equivalencies, ImpactReport, ImpactTotals};

pub struct ImpactCalculator {
    settings: Settings,
}

impl Default for ImpactCalculator {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl ImpactCalculator {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn calculate(&self, categories: &[WasteCategory]) -> ImpactReport {
        let rows: Vec<CategoryImpact> = categories.iter().map(category_impact).collect();

        let mut weekly = ImpactTotals::default();
        for row in &rows {
            weekly.add(row);
        }

        let annual = weekly.scaled(self.settings.weeks_per_year);
        let equivalencies = self.equivalencies(&annual);

        debug!(
            categories = rows.len(),
            reduction = weekly.reduction,
            co2 = weekly.co2_saved,
            "impact calculated"
        );

        ImpactReport {
            rows,
            weekly,
            annual,
            equivalencies,
        }
    }

    fn equivalencies(&self, annual: &ImpactTotals) -> Equivalencies {
        Equivalencies {
            trees: ceil_ratio(annual.co2_saved, self.settings.co2_kg_per_tree),
            households: ceil_ratio(annual.water_saved, self.settings.water_liters_per_household),
            homes: ceil_ratio(annual.energy_saved, self.settings.energy_kwh_per_home),
        }
    }
}

// Pure per-category formula

pub fn category_impact(category: &WasteCategory) -> CategoryImpact {
    let weekly = category.weekly_waste();
    let current_landfill = weekly * (1.0 - category.current_rate() / 100.0);
    let future_landfill = weekly * (1.0 - category.target_rate() / 100.0);
    let reduction = current_landfill - future_landfill;
    let profile = category.profile();

    CategoryImpact {
        name: profile.name,
        current_landfill,
        future_landfill,
        reduction,
        co2_saved: reduction * profile.co2_factor,
        water_saved: reduction * profile.water_factor,
        energy_saved: reduction * profile.energy_factor,
    }
}

fn ceil_ratio(value: f64, per_unit: f64) -> u64 {
    if per_unit <= 0.0 || value <= 0.0 {
        return 0;
    }
    (value / per_unit).ceil() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::category::{CategoryProfile, DEFAULT_PROFILES};

    const EPS: f64 = 1e-9;

    fn unit_profile() -> CategoryProfile {
        CategoryProfile::new("Test", 1.0, 1.0, 1.0)
    }

    #[test]
    fn test_reduction_for_100kg_20_to_50_percent() {
        let cat = WasteCategory::new(unit_profile(), 100.0, 20.0, 50.0).unwrap();
        let row = category_impact(&cat);
        assert!((row.current_landfill - 80.0).abs() < EPS);
        assert!((row.future_landfill - 50.0).abs() < EPS);
        assert!((row.reduction - 30.0).abs() < EPS);
    }

    #[test]
    fn test_savings_use_profile_factors() {
        // Metal: co2 2.0, water 40, energy 10
        let cat = WasteCategory::new(DEFAULT_PROFILES[3], 10.0, 0.0, 50.0).unwrap();
        let row = category_impact(&cat);
        assert!((row.reduction - 5.0).abs() < EPS);
        assert!((row.co2_saved - 10.0).abs() < EPS);
        assert!((row.water_saved - 200.0).abs() < EPS);
        assert!((row.energy_saved - 50.0).abs() < EPS);
    }

    #[test]
    fn test_equal_rates_give_zero_reduction() {
        let cat = WasteCategory::new(DEFAULT_PROFILES[0], 25.0, 40.0, 40.0).unwrap();
        assert_eq!(category_impact(&cat).reduction, 0.0);
    }

    #[test]
    fn test_totals_and_annual_projection() {
        let cats = vec![
            WasteCategory::new(unit_profile(), 100.0, 20.0, 50.0).unwrap(), // 30
            WasteCategory::new(unit_profile(), 10.0, 0.0, 100.0).unwrap(),  // 10
        ];
        let report = ImpactCalculator::default().calculate(&cats);

        assert_eq!(report.rows.len(), 2);
        assert!((report.weekly.reduction - 40.0).abs() < EPS);
        assert!((report.weekly.co2_saved - 40.0).abs() < EPS);
        assert!((report.annual.reduction - 40.0 * 52.0).abs() < EPS);
        assert!((report.annual.water_saved - 40.0 * 52.0).abs() < EPS);
    }

    #[test]
    fn test_equivalencies_round_up() {
        // 0.1 kg reduction * 1.0 co2 factor * 52 weeks = 5.2 kg/year -> 2 trees
        let cat = WasteCategory::new(unit_profile(), 1.0, 0.0, 10.0).unwrap();
        let report = ImpactCalculator::default().calculate(&[cat]);

        assert_eq!(report.equivalencies.trees, 2);
        assert_eq!(report.equivalencies.households, 1);
        assert_eq!(report.equivalencies.homes, 1);
    }

    #[test]
    fn test_no_savings_means_no_equivalencies() {
        let cat = WasteCategory::new(unit_profile(), 0.0, 0.0, 100.0).unwrap();
        let report = ImpactCalculator::default().calculate(&[cat]);
        assert_eq!(
            report.equivalencies,
            Equivalencies {
                trees: 0,
                households: 0,
                homes: 0
            }
        );
    }

    #[test]
    fn test_custom_settings() {
        let settings = Settings {
            weeks_per_year: 1.0,
            co2_kg_per_tree: 7.0,
            ..Settings::default()
        };
        let cat = WasteCategory::new(unit_profile(), 100.0, 20.0, 50.0).unwrap();
        let calculator = ImpactCalculator::new(settings);
        assert_eq!(calculator.settings().co2_kg_per_tree, 7.0);
        assert_eq!(calculator.settings().water_liters_per_household, 150_000.0);

        let report = calculator.calculate(&[cat]);
        assert!((report.annual.reduction - 30.0).abs() < EPS);
        assert_eq!(report.equivalencies.trees, 5);
    }
}
