use std::ops::Range;

use rand::Rng;
use serde::Serialize;

use super::labels::FACILITIES;
use super::rates::{cost_brl, emissions_kg_co2};

/// Average consumption sampling range (kWh, half-open).
pub const AVG_CONSUMPTION_KWH: Range<u32> = 4000..6000;

/// Target reduction sampling range (kWh, half-open). Strictly positive, so
/// every target sits below its average.
pub const TARGET_REDUCTION_KWH: Range<u32> = 100..500;

/// Benchmark row for one facility: average consumption against its target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityRecord {
    /// Facility label, one of [`FACILITIES`].
    pub facility: String,
    /// Average consumption (kWh).
    pub avg_consumption_kwh: u32,
    /// Consumption target (kWh), always below `avg_consumption_kwh`.
    pub target_kwh: u32,
    /// Average cost (R$), `avg_consumption_kwh * 0.5`.
    pub avg_cost_brl: f64,
    /// Emissions (kg CO2), `avg_consumption_kwh * 0.2`.
    pub emissions_kg_co2: f64,
}

impl FacilityRecord {
    /// Builds a record from the sampled average and reduction.
    ///
    /// The caller guarantees `reduction_kwh < avg_consumption_kwh`; both
    /// sampling ranges make that hold for generated records.
    pub fn new(facility: impl Into<String>, avg_consumption_kwh: u32, reduction_kwh: u32) -> Self {
        Self {
            facility: facility.into(),
            avg_consumption_kwh,
            target_kwh: avg_consumption_kwh - reduction_kwh,
            avg_cost_brl: cost_brl(avg_consumption_kwh),
            emissions_kg_co2: emissions_kg_co2(avg_consumption_kwh),
        }
    }

    /// Reduction required to reach the target (kWh).
    pub fn reduction_kwh(&self) -> u32 {
        self.avg_consumption_kwh - self.target_kwh
    }

    /// Reduction required to reach the target, as a percentage of the average.
    pub fn target_gap_pct(&self) -> f64 {
        100.0 * f64::from(self.reduction_kwh()) / f64::from(self.avg_consumption_kwh)
    }
}

/// Samples one benchmark row per facility, in [`FACILITIES`] order.
///
/// All averages are drawn first, then all reductions.
pub fn generate_facility_benchmarks<R: Rng + ?Sized>(rng: &mut R) -> Vec<FacilityRecord> {
    let averages: Vec<u32> = FACILITIES
        .iter()
        .map(|_| rng.random_range(AVG_CONSUMPTION_KWH))
        .collect();
    let reductions: Vec<u32> = FACILITIES
        .iter()
        .map(|_| rng.random_range(TARGET_REDUCTION_KWH))
        .collect();

    FACILITIES
        .iter()
        .zip(averages.into_iter().zip(reductions))
        .map(|(name, (avg, reduction))| FacilityRecord::new(*name, avg, reduction))
        .collect()
}
