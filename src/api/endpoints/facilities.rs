//! Facility search endpoint.
//!
//! `GET /api/facilities/:disease?city=` or `?near=lat,lon`, optional
//! `radius_miles` and `min_rating`. Malformed coordinates and unknown
//! cities degrade to an empty result with a note, never a 5xx.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::{parse_disease, ApiContext};
use crate::config;
use crate::proximity::{self, SearchOptions};

#[derive(Deserialize)]
pub struct FacilityQuery {
    pub city: Option<String>,
    /// Raw "lat,lon" override; takes precedence over `city`.
    pub near: Option<String>,
    pub radius_miles: Option<f64>,
    pub min_rating: Option<f64>,
}

#[derive(Serialize)]
pub struct FacilitiesResponse {
    pub query: QueryEcho,
    pub results: Vec<FacilityView>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Serialize)]
pub struct QueryEcho {
    pub disease: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub radius_miles: f64,
}

#[derive(Serialize)]
pub struct FacilityView {
    pub name: String,
    pub address: String,
    pub contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Rounded to one decimal for display; filtering used the raw value.
    pub distance_miles: f64,
}

/// `GET /api/facilities/:disease` — distance-sorted nearby facilities.
pub async fn search(
    State(ctx): State<ApiContext>,
    Path(disease): Path<String>,
    Query(query): Query<FacilityQuery>,
) -> Result<Json<FacilitiesResponse>, ApiError> {
    let disease = parse_disease(&disease)?;

    let options = SearchOptions {
        max_distance_miles: query
            .radius_miles
            .unwrap_or(config::DEFAULT_SEARCH_RADIUS_MILES),
        min_rating: query.min_rating.unwrap_or(config::DEFAULT_MIN_RATING),
    };

    // Resolve the search origin: explicit coordinate wins, then the
    // selected city, then the disease's default city. An unknown city
    // produces an empty origin and therefore an empty result.
    let mut note = None;
    let mut city_echo = None;
    let origin = if let Some(raw) = &query.near {
        raw.clone()
    } else {
        let city = query
            .city
            .clone()
            .unwrap_or_else(|| disease.default_city().to_string());
        city_echo = Some(city.clone());
        match ctx.catalog.city(&city) {
            Some(coord) => format!("{},{}", coord.lat, coord.lon),
            None => {
                note = Some(format!("Unknown city: {city}."));
                String::new()
            }
        }
    };

    let matches = proximity::search(&origin, ctx.catalog.roster(disease), options);
    let results: Vec<FacilityView> = matches
        .iter()
        .map(|m| FacilityView {
            name: m.record.name.clone(),
            address: m.record.address.clone(),
            contact: m.record.contact.clone(),
            link: m.record.link.clone(),
            rating: m.record.rating,
            distance_miles: proximity::display_distance(m.distance_miles),
        })
        .collect();

    if results.is_empty() && note.is_none() {
        note = Some(format!(
            "No doctors or hospitals found within {} miles of the selected location.",
            options.max_distance_miles
        ));
    }

    Ok(Json(FacilitiesResponse {
        query: QueryEcho {
            disease: disease.as_str(),
            city: city_echo,
            radius_miles: options.max_distance_miles,
        },
        count: results.len(),
        results,
        note,
    }))
}
