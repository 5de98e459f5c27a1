//! Facility model — doctors and hospitals in the static reference roster.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Both components finite and inside the valid degree ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Parse a `"lat,lon"` string: exactly one comma, two float tokens,
    /// both in range. Returns `None` on any malformation.
    pub fn parse_str(raw: &str) -> Option<Coordinate> {
        let mut parts = raw.trim().split(',');
        let lat = parts.next()?.trim().parse::<f64>().ok()?;
        let lon = parts.next()?.trim().parse::<f64>().ok()?;
        if parts.next().is_some() {
            return None;
        }
        let coord = Coordinate::new(lat, lon);
        coord.is_valid().then_some(coord)
    }
}

/// One doctor or hospital entry. Loaded once as static reference data.
/// Several records may share a coordinate (departments of one hospital,
/// practitioners at one address); expected, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityRecord {
    pub name: String,
    pub location: Coordinate,
    pub address: String,
    pub contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl FacilityRecord {
    /// Stable identity for deduplication: name plus exact coordinate bits.
    pub fn identity(&self) -> (String, u64, u64) {
        (
            self.name.clone(),
            self.location.lat.to_bits(),
            self.location.lon.to_bits(),
        )
    }
}
