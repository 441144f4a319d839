//! Synthetic metrics model: sector readings, facility benchmarks, and
//! monthly projections.

/// Fixed, ordered label sets for sectors, facilities, and months.
pub mod labels;
/// Cost and emissions conversion factors.
pub mod rates;
/// Facility benchmark generator.
pub mod facility;
/// Cumulative monthly projection generator.
pub mod projection;
/// Per-sector metrics generator.
pub mod sector;
pub mod summary;

// Re-export the main types for convenience
pub use facility::{FacilityRecord, generate_facility_benchmarks};
pub use projection::{Baseline, ProjectionIncrements, ProjectionPoint, generate_projections};
pub use sector::{SectorRecord, generate_sector_metrics};
pub use summary::DashboardSummary;
