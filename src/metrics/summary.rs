//! Headline KPI totals shown above the sector table.

use std::fmt;

use serde::Serialize;

use super::sector::SectorRecord;

/// Display delta shown next to total consumption (%).
pub const CONSUMPTION_DELTA_PCT: f64 = -5.0;
/// Display delta shown next to total cost (%).
pub const COST_DELTA_PCT: f64 = 3.0;
/// Display delta shown next to total emissions (%).
pub const EMISSIONS_DELTA_PCT: f64 = 2.0;

/// Current totals across all sectors, with their headline deltas.
///
/// The deltas are fixed presentation values, not derived from history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Total current consumption (kWh).
    pub total_consumption_kwh: u64,
    /// Total current cost (R$).
    pub total_cost_brl: f64,
    /// Total current emissions (kg CO2).
    pub total_emissions_kg_co2: f64,
    /// Consumption delta (%).
    pub consumption_delta_pct: f64,
    /// Cost delta (%).
    pub cost_delta_pct: f64,
    /// Emissions delta (%).
    pub emissions_delta_pct: f64,
}

impl DashboardSummary {
    /// Computes the totals of `sectors`.
    pub fn from_sectors(sectors: &[SectorRecord]) -> Self {
        Self {
            total_consumption_kwh: sectors.iter().map(|s| u64::from(s.consumption_kwh)).sum(),
            total_cost_brl: sectors.iter().map(|s| s.cost_brl).sum(),
            total_emissions_kg_co2: sectors.iter().map(|s| s.emissions_kg_co2).sum(),
            consumption_delta_pct: CONSUMPTION_DELTA_PCT,
            cost_delta_pct: COST_DELTA_PCT,
            emissions_delta_pct: EMISSIONS_DELTA_PCT,
        }
    }
}

impl fmt::Display for DashboardSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Current Totals ---")?;
        writeln!(
            f,
            "Consumption:  {:>10} kWh    ({:+.0}%)",
            self.total_consumption_kwh, self.consumption_delta_pct
        )?;
        writeln!(
            f,
            "Cost:         {:>10.2} R$     ({:+.0}%)",
            self.total_cost_brl, self.cost_delta_pct
        )?;
        write!(
            f,
            "Emissions:    {:>10.0} kg CO2 ({:+.0}%)",
            self.total_emissions_kg_co2, self.emissions_delta_pct
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_sum_sector_fields() {
        let sectors = vec![
            SectorRecord::new("Docas", 1000, 80, 20.0),
            SectorRecord::new("Iluminação", 500, 65, 19.5),
        ];
        let summary = DashboardSummary::from_sectors(&sectors);
        assert_eq!(summary.total_consumption_kwh, 1500);
        assert_eq!(summary.total_cost_brl, 750.0);
        assert!((summary.total_emissions_kg_co2 - 300.0).abs() < 1e-9);
        assert_eq!(summary.consumption_delta_pct, -5.0);
    }

    #[test]
    fn empty_sectors_give_zero_totals() {
        let summary = DashboardSummary::from_sectors(&[]);
        assert_eq!(summary.total_consumption_kwh, 0);
        assert_eq!(summary.total_cost_brl, 0.0);
    }

    #[test]
    fn display_shows_signed_deltas() {
        let summary = DashboardSummary::from_sectors(&[SectorRecord::new("Docas", 100, 60, 18.0)]);
        let text = summary.to_string();
        assert!(text.contains("(-5%)"));
        assert!(text.contains("(+3%)"));
        assert!(text.contains("(+2%)"));
    }
}
