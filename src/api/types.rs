//! API response and query types.

use serde::{Deserialize, Serialize};

use crate::metrics::{Baseline, ProjectionPoint};

/// Optional seed override accepted by every endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SeedQuery {
    /// Seed for this request only.
    pub seed: Option<u64>,
}

/// Projection payload: the totals it is anchored to plus the monthly points.
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    /// Totals of the sector readings drawn for this request.
    pub baseline: Baseline,
    /// One point per month.
    pub points: Vec<ProjectionPoint>,
}
