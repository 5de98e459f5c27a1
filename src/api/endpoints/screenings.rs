//! Screening endpoint.
//!
//! `POST /api/screenings/:disease` — run the disease's classifier over
//! the submitted feature vector; on a positive flag, embed the resolved
//! remedy bundle. A missing classifier is an upstream capability fault
//! (503), not something the core substitutes for.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::endpoints::remedies::{remedy_view, RemedyResponse};
use crate::api::error::ApiError;
use crate::api::types::{parse_disease, ApiContext};
use crate::screening;

#[derive(Deserialize)]
pub struct ScreeningRequest {
    pub features: Vec<f64>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
}

#[derive(Serialize)]
pub struct ScreeningResponse {
    pub report_id: Uuid,
    pub disease: &'static str,
    pub risk_flagged: bool,
    pub summary: String,
    pub generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remedy: Option<RemedyResponse>,
}

/// `POST /api/screenings/:disease` — classifier verdict plus remedies.
pub async fn create(
    State(ctx): State<ApiContext>,
    Path(disease): Path<String>,
    Json(request): Json<ScreeningRequest>,
) -> Result<Json<ScreeningResponse>, ApiError> {
    let disease = parse_disease(&disease)?;

    let model = ctx
        .models
        .get(disease)
        .ok_or(ApiError::ModelUnavailable(disease))?;

    // Caller-side validation: exactly the advertised number of values.
    if request.features.len() != disease.feature_len() {
        return Err(ApiError::BadRequest(format!(
            "{} expects {} feature values, got {}",
            disease.display_name(),
            disease.feature_len(),
            request.features.len()
        )));
    }

    let outcome = screening::screen(
        &ctx.catalog,
        model.as_ref(),
        disease,
        &request.features,
        request.age.as_deref(),
        request.severity.as_deref(),
    )?;

    let summary = outcome.summary();
    let remedy = outcome
        .remedy
        .as_ref()
        .map(|resolution| remedy_view(disease, resolution));

    Ok(Json(ScreeningResponse {
        report_id: Uuid::new_v4(),
        disease: disease.as_str(),
        risk_flagged: outcome.label.is_positive(),
        summary,
        generated_at: chrono::Utc::now().to_rfc3339(),
        remedy,
    }))
}
