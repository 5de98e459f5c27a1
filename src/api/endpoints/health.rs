//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::Disease;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub screening_available: Vec<Disease>,
    pub facilities: usize,
    pub cities: usize,
}

/// `GET /api/health` — liveness plus a summary of loaded data.
pub async fn check(State(ctx): State<ApiContext>) -> Result<Json<HealthResponse>, ApiError> {
    Ok(Json(HealthResponse {
        status: "ok",
        version: crate::config::APP_VERSION,
        screening_available: ctx.models.available(),
        facilities: ctx.catalog.facility_count(),
        cities: ctx.catalog.city_count(),
    }))
}
