//! Disease metadata endpoint — what the screening form needs to render.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::Disease;

#[derive(Serialize)]
pub struct DiseasesResponse {
    pub diseases: Vec<DiseaseView>,
}

#[derive(Serialize)]
pub struct DiseaseView {
    pub key: &'static str,
    pub name: &'static str,
    pub feature_count: usize,
    pub features: &'static [&'static str],
    pub default_city: &'static str,
    pub screening_available: bool,
}

/// `GET /api/diseases` — per-disease form metadata.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<DiseasesResponse>, ApiError> {
    let diseases = Disease::ALL
        .into_iter()
        .map(|disease| DiseaseView {
            key: disease.as_str(),
            name: disease.display_name(),
            feature_count: disease.feature_len(),
            features: disease.feature_names(),
            default_city: disease.default_city(),
            screening_available: ctx.models.get(disease).is_some(),
        })
        .collect();

    Ok(Json(DiseasesResponse { diseases }))
}
