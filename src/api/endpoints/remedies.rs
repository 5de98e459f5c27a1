//! Remedy resolution endpoint.
//!
//! `GET /api/remedies/:disease?age=&severity=` — run the degrading
//! lookup and return the bundle with full disclosure of any defaulting
//! or tier substitution. "Nothing found" is a 200 with `found: false`,
//! never an error page.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::{parse_disease, ApiContext};
use crate::models::{Disease, RemedyBundle};
use crate::remedy::{self, Advisory, RemedyOutcome, Tier};

const DISCLAIMER: &str = "Guidance is illustrative and based on general principles. \
     Severity is self-reported. Consult qualified professionals for medical advice.";

#[derive(Deserialize)]
pub struct RemedyQuery {
    pub age: Option<String>,
    pub severity: Option<String>,
}

#[derive(Serialize)]
pub struct RemedyResponse {
    pub disease: &'static str,
    pub found: bool,
    pub requested: Tier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<Tier>,
    pub advisories: Vec<AdvisoryView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle: Option<RemedyBundle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub disclaimer: &'static str,
}

#[derive(Serialize)]
pub struct AdvisoryView {
    pub code: &'static str,
    pub message: String,
}

impl From<&Advisory> for AdvisoryView {
    fn from(advisory: &Advisory) -> Self {
        Self {
            code: advisory.code(),
            message: advisory.message(),
        }
    }
}

/// Shared with the screening endpoint, which embeds the same view.
pub fn remedy_view(disease: Disease, outcome: &RemedyOutcome<'_>) -> RemedyResponse {
    let advisories = outcome.advisories().iter().map(AdvisoryView::from).collect();
    match outcome {
        RemedyOutcome::Found {
            bundle,
            requested,
            matched,
            ..
        } => RemedyResponse {
            disease: disease.as_str(),
            found: true,
            requested: *requested,
            matched: Some(*matched),
            advisories,
            bundle: Some((*bundle).clone()),
            message: None,
            disclaimer: DISCLAIMER,
        },
        RemedyOutcome::NotFound { requested, .. } => RemedyResponse {
            disease: disease.as_str(),
            found: false,
            requested: *requested,
            matched: None,
            advisories,
            bundle: None,
            message: Some(format!(
                "No specific holistic remedy information is currently available for {} / {}.",
                disease.display_name(),
                requested.label()
            )),
            disclaimer: DISCLAIMER,
        },
    }
}

/// `GET /api/remedies/:disease` — resolve a remedy bundle.
pub async fn lookup(
    State(ctx): State<ApiContext>,
    Path(disease): Path<String>,
    Query(query): Query<RemedyQuery>,
) -> Result<Json<RemedyResponse>, ApiError> {
    let disease = parse_disease(&disease)?;
    let outcome = remedy::resolve(
        &ctx.catalog,
        disease,
        query.age.as_deref(),
        query.severity.as_deref(),
    );
    Ok(Json(remedy_view(disease, &outcome)))
}
