//! Linear conversions from energy to cost and emissions.
//!
//! Every cost and emissions figure in the model is computed through these
//! helpers from an already-sampled consumption value; none are drawn
//! independently.

/// Tariff applied to every kWh (R$/kWh).
pub const COST_PER_KWH: f64 = 0.5;

/// Emission factor (kg CO2/kWh).
pub const EMISSIONS_KG_PER_KWH: f64 = 0.2;

/// Cost in R$ of `kwh` kilowatt-hours.
pub fn cost_brl(kwh: u32) -> f64 {
    f64::from(kwh) * COST_PER_KWH
}

/// Emissions in kg CO2 of `kwh` kilowatt-hours.
pub fn emissions_kg_co2(kwh: u32) -> f64 {
    f64::from(kwh) * EMISSIONS_KG_PER_KWH
}
