//! City listing endpoint — the facility search's origin choices.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::Coordinate;

#[derive(Serialize)]
pub struct CitiesResponse {
    pub cities: Vec<CityView>,
}

#[derive(Serialize)]
pub struct CityView {
    pub name: String,
    pub location: Coordinate,
}

/// `GET /api/cities` — supported cities in sorted order.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<CitiesResponse>, ApiError> {
    let cities = ctx
        .catalog
        .cities()
        .iter()
        .map(|(name, location)| CityView {
            name: name.clone(),
            location: *location,
        })
        .collect();

    Ok(Json(CitiesResponse { cities }))
}
