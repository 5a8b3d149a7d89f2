/// Conversion constants for annual projections and equivalencies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub weeks_per_year: f64,
    /// CO2 absorbed by one tree in a year (kg).
    pub co2_kg_per_tree: f64,
    /// Yearly water use of one household (liters).
    pub water_liters_per_household: f64,
    /// Yearly energy use of one home (kWh).
    pub energy_kwh_per_home: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            weeks_per_year: 52.0,
            co2_kg_per_tree: 5.0,
            water_liters_per_household: 150_000.0,
            energy_kwh_per_home: 4_000.0,
        }
    }
}
