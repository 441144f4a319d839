//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use rand::rngs::StdRng;
use tracing::debug;

use super::AppState;
use super::types::{ProjectionResponse, SeedQuery};
use crate::metrics::{
    Baseline, FacilityRecord, SectorRecord, generate_facility_benchmarks, generate_projections,
    generate_sector_metrics,
};
use crate::snapshot::{DashboardSnapshot, rng_from_seed};

/// Request seed wins over the server seed; neither means fresh entropy.
fn request_rng(state: &AppState, query: &SeedQuery) -> StdRng {
    rng_from_seed(query.seed.or(state.seed))
}

/// `GET /sectors` → 200 + `Vec<SectorRecord>` JSON
pub async fn get_sectors(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SeedQuery>,
) -> Json<Vec<SectorRecord>> {
    debug!(seed = ?query.seed, "GET /sectors");
    let mut rng = request_rng(&state, &query);
    Json(generate_sector_metrics(&mut rng))
}

/// `GET /benchmarks` → 200 + `Vec<FacilityRecord>` JSON
pub async fn get_benchmarks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SeedQuery>,
) -> Json<Vec<FacilityRecord>> {
    debug!(seed = ?query.seed, "GET /benchmarks");
    let mut rng = request_rng(&state, &query);
    Json(generate_facility_benchmarks(&mut rng))
}

/// Draws sector readings, then projects them.
///
/// `GET /projections` → 200 + `ProjectionResponse` JSON
pub async fn get_projections(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SeedQuery>,
) -> Json<ProjectionResponse> {
    debug!(seed = ?query.seed, "GET /projections");
    let mut rng = request_rng(&state, &query);
    let sectors = generate_sector_metrics(&mut rng);
    let points = generate_projections(&mut rng, &sectors);
    Json(ProjectionResponse {
        baseline: Baseline::from_sectors(&sectors),
        points,
    })
}

/// `GET /dashboard` → 200 + `DashboardSnapshot` JSON
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SeedQuery>,
) -> Json<DashboardSnapshot> {
    debug!(seed = ?query.seed, "GET /dashboard");
    let mut rng = request_rng(&state, &query);
    Json(DashboardSnapshot::generate(&mut rng))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    use super::*;
    use crate::api::router;

    async fn get_json(state: Arc<AppState>, uri: &str) -> (StatusCode, serde_json::Value) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = router(state).oneshot(req).await.unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn sectors_returns_four_rows() {
        let (status, json) = get_json(Arc::new(AppState::default()), "/sectors").await;
        assert_eq!(status, StatusCode::OK);
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0]["sector"], "Docas");
        assert!(rows[0].get("cost_brl").is_some());
    }

    #[tokio::test]
    async fn benchmarks_returns_three_rows() {
        let (status, json) = get_json(Arc::new(AppState::default()), "/benchmarks").await;
        assert_eq!(status, StatusCode::OK);
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        for row in rows {
            assert!(row["target_kwh"].as_u64() < row["avg_consumption_kwh"].as_u64());
        }
    }

    #[tokio::test]
    async fn projections_include_baseline() {
        let state = Arc::new(AppState { seed: Some(42) });
        let (status, json) = get_json(state, "/projections").await;
        assert_eq!(status, StatusCode::OK);
        let points = json["points"].as_array().unwrap();
        assert_eq!(points.len(), 12);
        assert_eq!(points[0]["month"], "Nov");
        assert_eq!(points[11]["month"], "Out");
        let base = json["baseline"]["consumption_kwh"].as_u64().unwrap();
        let first = points[0]["consumption_kwh"].as_u64().unwrap();
        assert!((200..500).contains(&(first - base)));
    }

    #[tokio::test]
    async fn seed_query_reproduces_dashboard() {
        let state = Arc::new(AppState::default());
        let (_, a) = get_json(state.clone(), "/dashboard?seed=9").await;
        let (_, b) = get_json(state, "/dashboard?seed=9").await;
        assert_eq!(a, b);
        assert!(a.get("summary").is_some());
    }

    #[tokio::test]
    async fn invalid_seed_returns_400() {
        let (status, _) = get_json(Arc::new(AppState::default()), "/sectors?seed=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let (status, _) = get_json(Arc::new(AppState::default()), "/state").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
