use std::ops::Range;

use rand::Rng;
use serde::Serialize;

use super::labels::SECTORS;
use super::rates::{cost_brl, emissions_kg_co2};

/// Current consumption sampling range (kWh, half-open).
pub const CONSUMPTION_KWH: Range<u32> = 100..2000;

/// Performance score sampling range (percent, half-open).
pub const PERFORMANCE_PCT: Range<u32> = 60..100;

/// Ambient temperature sampling range (°C, half-open).
pub const TEMPERATURE_C: Range<f64> = 18.0..30.0;

/// Live readings for one operational sector of the warehouse.
///
/// Cost and emissions are stored alongside consumption for presentation, but
/// they are always computed from `consumption_kwh` when the record is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorRecord {
    /// Sector label, one of [`SECTORS`].
    pub sector: String,
    /// Current consumption (kWh).
    pub consumption_kwh: u32,
    /// Operational performance score (%).
    pub performance_pct: u32,
    /// Ambient temperature (°C).
    pub temperature_c: f64,
    /// Energy cost (R$), `consumption_kwh * 0.5`.
    pub cost_brl: f64,
    /// Emissions (kg CO2), `consumption_kwh * 0.2`.
    pub emissions_kg_co2: f64,
}

impl SectorRecord {
    /// Builds a record from its sampled quantities, deriving cost and emissions.
    ///
    /// # Arguments
    ///
    /// * `sector` - Sector label
    /// * `consumption_kwh` - Current consumption in kWh
    /// * `performance_pct` - Performance score in percent
    /// * `temperature_c` - Temperature in degrees Celsius
    pub fn new(
        sector: impl Into<String>,
        consumption_kwh: u32,
        performance_pct: u32,
        temperature_c: f64,
    ) -> Self {
        Self {
            sector: sector.into(),
            consumption_kwh,
            performance_pct,
            temperature_c,
            cost_brl: cost_brl(consumption_kwh),
            emissions_kg_co2: emissions_kg_co2(consumption_kwh),
        }
    }
}

/// Samples one fresh reading per sector.
///
/// Columns are drawn one at a time (every consumption, then every
/// performance score, then every temperature), and the records are returned
/// in [`SECTORS`] order.
///
/// # Examples
///
/// ```
/// use enerwise::metrics::generate_sector_metrics;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let sectors = generate_sector_metrics(&mut rng);
/// assert_eq!(sectors.len(), 4);
/// assert_eq!(sectors[0].sector, "Docas");
/// ```
pub fn generate_sector_metrics<R: Rng + ?Sized>(rng: &mut R) -> Vec<SectorRecord> {
    let consumption: Vec<u32> = SECTORS
        .iter()
        .map(|_| rng.random_range(CONSUMPTION_KWH))
        .collect();
    let performance: Vec<u32> = SECTORS
        .iter()
        .map(|_| rng.random_range(PERFORMANCE_PCT))
        .collect();
    let temperature: Vec<f64> = SECTORS
        .iter()
        .map(|_| rng.random_range(TEMPERATURE_C))
        .collect();

    SECTORS
        .iter()
        .enumerate()
        .map(|(i, name)| SectorRecord::new(*name, consumption[i], performance[i], temperature[i]))
        .collect()
}
