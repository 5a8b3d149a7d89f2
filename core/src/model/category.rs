use crate::error::InputError;
use crate::input::{validate_rate, validate_target_rate, validate_weekly_waste};

/// A category name and its per-kg conversion factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryProfile {
    pub name: &'static str,
    /// kg of CO2 avoided per kg kept out of landfill
    pub co2_factor: f64,
    /// liters of water saved per kg
    pub water_factor: f64,
    /// kWh saved per kg
    pub energy_factor: f64,
}

impl CategoryProfile {
    pub const fn new(name: &'static str, co2_factor: f64, water_factor: f64, energy_factor: f64) -> Self {
        Self {
            name,
            co2_factor,
            water_factor,
            energy_factor,
        }
    }
}

pub const DEFAULT_PROFILES: [CategoryProfile; 6] = [
    CategoryProfile::new("Organic Waste", 0.25, 10.0, 0.5),
    CategoryProfile::new("Plastic", 1.5, 50.0, 5.0),
    CategoryProfile::new("Paper", 0.5, 100.0, 3.0),
    CategoryProfile::new("Metal", 2.0, 40.0, 10.0),
    CategoryProfile::new("Glass", 0.3, 20.0, 1.0),
    CategoryProfile::new("Other Waste", 0.8, 20.0, 2.0),
];

/// Weekly figures for one category, validated on construction.
///
/// Fields are private so a `WasteCategory` can only exist with a non-negative
/// weekly weight, rates within 0-100, and a target no lower than the current rate.
#[derive(Debug, Clone, PartialEq)]
pub struct WasteCategory {
    profile: CategoryProfile,
    weekly_waste: f64,
    current_rate: f64,
    target_rate: f64,
}

impl WasteCategory {
    pub fn new(
        profile: CategoryProfile,
        weekly_waste: f64,
        current_rate: f64,
        target_rate: f64,
    ) -> Result<Self, InputError> {
        let weekly_waste = validate_weekly_waste(weekly_waste)?;
        let current_rate = validate_rate(current_rate)?;
        let target_rate = validate_target_rate(target_rate, current_rate)?;

        Ok(Self {
            profile,
            weekly_waste,
            current_rate,
            target_rate,
        })
    }

    pub fn profile(&self) -> &CategoryProfile {
        &self.profile
    }

    pub fn name(&self) -> &'static str {
        self.profile.name
    }

    pub fn weekly_waste(&self) -> f64 {
        self.weekly_waste
    }

    pub fn current_rate(&self) -> f64 {
        self.current_rate
    }

    pub fn target_rate(&self) -> f64 {
        self.target_rate
    }
}
