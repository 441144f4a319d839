use std::ops::Range;

use rand::Rng;
use serde::Serialize;

use super::labels::MONTHS;
use super::sector::SectorRecord;

/// Number of projected months.
pub const HORIZON: usize = MONTHS.len();

/// Monthly consumption increment range (kWh, half-open).
pub const CONSUMPTION_STEP_KWH: Range<u32> = 200..500;

/// Monthly cost increment range (R$, half-open).
pub const COST_STEP_BRL: Range<u32> = 100..200;

/// Monthly emissions increment range (kg CO2, half-open).
pub const EMISSIONS_STEP_KG: Range<u32> = 50..100;

/// Projected running totals for one month of the horizon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionPoint {
    /// Month label, one of [`MONTHS`].
    pub month: String,
    /// Projected consumption (kWh).
    pub consumption_kwh: u64,
    /// Projected cost (R$).
    pub cost_brl: f64,
    /// Projected emissions (kg CO2).
    pub emissions_kg_co2: f64,
}

/// Positive per-month increments for the three projected series.
///
/// Each series is drawn independently; increment `i` is added to the running
/// total of month `i` and every month after it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionIncrements {
    /// Consumption increments (kWh).
    pub consumption_kwh: [u32; HORIZON],
    /// Cost increments (R$).
    pub cost_brl: [u32; HORIZON],
    /// Emissions increments (kg CO2).
    pub emissions_kg_co2: [u32; HORIZON],
}

impl ProjectionIncrements {
    /// Draws a full horizon of increments: consumption first, then cost, then
    /// emissions.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let consumption_kwh = std::array::from_fn(|_| rng.random_range(CONSUMPTION_STEP_KWH));
        let cost_brl = std::array::from_fn(|_| rng.random_range(COST_STEP_BRL));
        let emissions_kg_co2 = std::array::from_fn(|_| rng.random_range(EMISSIONS_STEP_KG));
        Self {
            consumption_kwh,
            cost_brl,
            emissions_kg_co2,
        }
    }
}

/// Baselines the projection is anchored to: the totals of the current sector
/// readings.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Baseline {
    /// Total current consumption (kWh).
    pub consumption_kwh: u64,
    /// Total current cost (R$).
    pub cost_brl: f64,
    /// Total current emissions (kg CO2).
    pub emissions_kg_co2: f64,
}

impl Baseline {
    /// Sums consumption, cost, and emissions across `sectors`.
    ///
    /// An empty slice yields an all-zero baseline.
    pub fn from_sectors(sectors: &[SectorRecord]) -> Self {
        sectors.iter().fold(Self::default(), |acc, s| Self {
            consumption_kwh: acc.consumption_kwh + u64::from(s.consumption_kwh),
            cost_brl: acc.cost_brl + s.cost_brl,
            emissions_kg_co2: acc.emissions_kg_co2 + s.emissions_kg_co2,
        })
    }
}

/// Builds the cumulative projection from explicit increments.
///
/// Point `i` holds `baseline + sum(increments[0..=i])` for each series.
/// Because every increment is positive, the three series strictly increase
/// month over month.
///
/// # Arguments
///
/// * `sectors` - Current sector readings supplying the baselines
/// * `increments` - Per-month increments for each series
///
/// # Returns
///
/// One point per month, in [`MONTHS`] order.
pub fn project_from_increments(
    sectors: &[SectorRecord],
    increments: &ProjectionIncrements,
) -> Vec<ProjectionPoint> {
    let base = Baseline::from_sectors(sectors);

    let mut consumption = 0_u64;
    let mut cost = 0_u64;
    let mut emissions = 0_u64;

    MONTHS
        .iter()
        .enumerate()
        .map(|(i, month)| {
            consumption += u64::from(increments.consumption_kwh[i]);
            cost += u64::from(increments.cost_brl[i]);
            emissions += u64::from(increments.emissions_kg_co2[i]);
            ProjectionPoint {
                month: (*month).to_string(),
                consumption_kwh: base.consumption_kwh + consumption,
                cost_brl: base.cost_brl + cost as f64,
                emissions_kg_co2: base.emissions_kg_co2 + emissions as f64,
            }
        })
        .collect()
}

/// Projects the current sector totals across the twelve-month horizon.
///
/// Draws fresh increments from `rng` and delegates to
/// [`project_from_increments`]. An empty `sectors` slice is valid: the
/// series then start from zero.
///
/// # Examples
///
/// ```
/// use enerwise::metrics::{generate_projections, generate_sector_metrics};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let sectors = generate_sector_metrics(&mut rng);
/// let points = generate_projections(&mut rng, &sectors);
/// assert_eq!(points.len(), 12);
/// assert_eq!(points[0].month, "Nov");
/// ```
pub fn generate_projections<R: Rng + ?Sized>(
    rng: &mut R,
    sectors: &[SectorRecord],
) -> Vec<ProjectionPoint> {
    let increments = ProjectionIncrements::sample(rng);
    project_from_increments(sectors, &increments)
}
