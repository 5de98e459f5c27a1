//! Facility proximity search — geodesic distance over a static roster.
//!
//! Pure in-memory geometry: parse the user coordinate, measure the
//! distance to every candidate on the WGS-84 ellipsoid, keep what falls
//! inside the radius, sort ascending. Malformed input degrades to an
//! empty result; a malformed candidate is skipped, never fatal.

use std::sync::OnceLock;

use geographiclib_rs::{Geodesic, InverseGeodesic};

use crate::config;
use crate::models::{Coordinate, FacilityRecord};

pub const METERS_PER_MILE: f64 = 1609.344;

fn wgs84() -> &'static Geodesic {
    static WGS84: OnceLock<Geodesic> = OnceLock::new();
    WGS84.get_or_init(Geodesic::wgs84)
}

#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    pub max_distance_miles: f64,
    /// Accepted by the search contract but not applied as a filter;
    /// kept so callers can pass it through unchanged.
    pub min_rating: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_distance_miles: config::DEFAULT_SEARCH_RADIUS_MILES,
            min_rating: config::DEFAULT_MIN_RATING,
        }
    }
}

/// One qualifying candidate with its unrounded distance. Display layers
/// round to one decimal; the radius comparison never does.
#[derive(Debug, Clone)]
pub struct FacilityMatch<'a> {
    pub record: &'a FacilityRecord,
    pub distance_miles: f64,
}

/// Geodesic distance in miles between two points, `f64::INFINITY` when
/// either point is malformed or the computation misbehaves. An infinite
/// distance simply falls outside every radius.
pub fn distance_miles(from: Coordinate, to: Coordinate) -> f64 {
    if !from.is_valid() || !to.is_valid() {
        return f64::INFINITY;
    }
    let meters: f64 = wgs84().inverse(from.lat, from.lon, to.lat, to.lon);
    if meters.is_finite() {
        meters / METERS_PER_MILE
    } else {
        f64::INFINITY
    }
}

/// Filter `candidates` to those within `options.max_distance_miles` of
/// the user coordinate, sorted ascending by distance (stable: ties keep
/// roster order). A coordinate that fails to parse yields an empty
/// result rather than an error.
pub fn search<'a>(
    user_coordinate: &str,
    candidates: &'a [FacilityRecord],
    options: SearchOptions,
) -> Vec<FacilityMatch<'a>> {
    let Some(origin) = Coordinate::parse_str(user_coordinate) else {
        tracing::warn!(raw = user_coordinate, "invalid search coordinate");
        return Vec::new();
    };

    let mut matches: Vec<FacilityMatch<'a>> = candidates
        .iter()
        .filter_map(|record| {
            if !record.location.is_valid() {
                tracing::warn!(
                    facility = %record.name,
                    "skipping candidate with malformed location"
                );
                return None;
            }
            let distance = distance_miles(origin, record.location);
            (distance <= options.max_distance_miles).then_some(FacilityMatch {
                record,
                distance_miles: distance,
            })
        })
        .collect();

    matches.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
    matches
}

/// Round for display: one decimal place, per the result formatting rule.
pub fn display_distance(miles: f64) -> f64 {
    (miles * 10.0).round() / 10.0
}
