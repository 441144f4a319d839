//! Plain-text rendering of a dashboard snapshot for stdout.

use std::fmt;

use crate::snapshot::DashboardSnapshot;

impl fmt::Display for DashboardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary)?;

        writeln!(f, "\n--- Sector Monitoring ---")?;
        writeln!(
            f,
            "{:<14} {:>10} {:>8} {:>8} {:>10} {:>12}",
            "Sector", "kWh", "Perf %", "°C", "Cost R$", "kg CO2"
        )?;
        for s in &self.sectors {
            writeln!(
                f,
                "{:<14} {:>10} {:>8} {:>8.1} {:>10.2} {:>12.1}",
                s.sector,
                s.consumption_kwh,
                s.performance_pct,
                s.temperature_c,
                s.cost_brl,
                s.emissions_kg_co2
            )?;
        }

        writeln!(f, "\n--- Projections ---")?;
        writeln!(
            f,
            "{:<6} {:>10} {:>10} {:>12}",
            "Month", "kWh", "Cost R$", "kg CO2"
        )?;
        for p in &self.projections {
            writeln!(
                f,
                "{:<6} {:>10} {:>10.2} {:>12.1}",
                p.month, p.consumption_kwh, p.cost_brl, p.emissions_kg_co2
            )?;
        }

        writeln!(f, "\n--- Facility Benchmarks ---")?;
        writeln!(
            f,
            "{:<12} {:>10} {:>10} {:>7} {:>10} {:>12}",
            "Facility", "Avg kWh", "Target", "Gap %", "Cost R$", "kg CO2"
        )?;
        for (i, b) in self.benchmarks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:<12} {:>10} {:>10} {:>7.1} {:>10.2} {:>12.1}",
                b.facility,
                b.avg_consumption_kwh,
                b.target_kwh,
                b.target_gap_pct(),
                b.avg_cost_brl,
                b.emissions_kg_co2
            )?;
        }
        Ok(())
    }
}
