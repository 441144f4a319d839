//! CSV export for dashboard tables.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::metrics::{FacilityRecord, ProjectionPoint, SectorRecord};
use crate::snapshot::DashboardSnapshot;

/// Column header for the sector table.
pub const SECTOR_HEADER: &str =
    "sector,consumption_kwh,performance_pct,temperature_c,cost_brl,emissions_kg_co2";

/// Column header for the projection table.
pub const PROJECTION_HEADER: &str = "month,consumption_kwh,cost_brl,emissions_kg_co2";

/// Column header for the benchmark table.
pub const BENCHMARK_HEADER: &str =
    "facility,avg_consumption_kwh,target_kwh,avg_cost_brl,emissions_kg_co2";

/// File names written by [`export_snapshot`].
pub const SECTOR_FILE: &str = "sectors.csv";
pub const PROJECTION_FILE: &str = "projections.csv";
pub const BENCHMARK_FILE: &str = "benchmarks.csv";

/// Writes the three tables of `snapshot` as CSV files under `dir`.
///
/// Creates `dir` if it does not exist. Existing files are overwritten.
///
/// # Errors
///
/// Returns an `io::Error` if the directory or any file cannot be written.
pub fn export_snapshot(snapshot: &DashboardSnapshot, dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    write_sectors(&snapshot.sectors, io::BufWriter::new(File::create(dir.join(SECTOR_FILE))?))?;
    write_projections(
        &snapshot.projections,
        io::BufWriter::new(File::create(dir.join(PROJECTION_FILE))?),
    )?;
    write_benchmarks(
        &snapshot.benchmarks,
        io::BufWriter::new(File::create(dir.join(BENCHMARK_FILE))?),
    )?;
    info!(dir = %dir.display(), "exported dashboard tables");
    Ok(())
}

/// Writes sector readings as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_sectors(sectors: &[SectorRecord], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(SECTOR_HEADER.split(','))?;
    for s in sectors {
        wtr.write_record(&[
            s.sector.clone(),
            s.consumption_kwh.to_string(),
            s.performance_pct.to_string(),
            format!("{:.2}", s.temperature_c),
            format!("{:.2}", s.cost_brl),
            format!("{:.2}", s.emissions_kg_co2),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes projection points as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_projections(points: &[ProjectionPoint], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(PROJECTION_HEADER.split(','))?;
    for p in points {
        wtr.write_record(&[
            p.month.clone(),
            p.consumption_kwh.to_string(),
            format!("{:.2}", p.cost_brl),
            format!("{:.2}", p.emissions_kg_co2),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes facility benchmarks as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_benchmarks(rows: &[FacilityRecord], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(BENCHMARK_HEADER.split(','))?;
    for b in rows {
        wtr.write_record(&[
            b.facility.clone(),
            b.avg_consumption_kwh.to_string(),
            b.target_kwh.to_string(),
            format!("{:.2}", b.avg_cost_brl),
            format!("{:.2}", b.emissions_kg_co2),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
