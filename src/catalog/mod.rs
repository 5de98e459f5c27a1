//! Static reference catalog — remedy knowledge base, facility rosters,
//! city coordinates.
//!
//! All three tables ship as embedded JSON assets, deserialized and
//! validated once at startup into an immutable `Catalog` that is shared
//! by reference across request handlers. Nothing here mutates after
//! load; the resolver and the proximity search are the only consumers.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Deserialize;
use thiserror::Error;

use crate::models::{AgeGroup, Coordinate, Disease, FacilityRecord, RemedyBundle, Severity};

const REMEDIES_JSON: &str = include_str!("../data/remedies.json");
const FACILITIES_JSON: &str = include_str!("../data/facilities.json");
const CITIES_JSON: &str = include_str!("../data/cities.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("JSON parse error in {asset}: {source}")]
    Parse {
        asset: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Roster for {disease} references unknown hospital key: {key}")]
    UnknownHospital { disease: String, key: String },

    #[error("Invalid coordinate for city {city}: {raw}")]
    InvalidCity { city: String, raw: String },
}

/// Per-disease remedy table: severity tier → age group → bundle.
/// Sparse by design: not every pair has an entry.
pub type RemedyTable = HashMap<Severity, HashMap<AgeGroup, RemedyBundle>>;

#[derive(Debug)]
pub struct Catalog {
    remedies: HashMap<Disease, RemedyTable>,
    rosters: HashMap<Disease, Vec<FacilityRecord>>,
    cities: BTreeMap<String, Coordinate>,
}

// ─── Raw asset shapes ────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FacilityFile {
    hospitals: HashMap<String, FacilityRecord>,
    rosters: HashMap<Disease, RosterSource>,
}

#[derive(Deserialize)]
struct RosterSource {
    #[serde(default)]
    hospitals: Vec<HospitalRef>,
    #[serde(default)]
    practitioners: Vec<FacilityRecord>,
}

/// Reference into the shared hospital table, optionally labeled with the
/// department relevant to the roster's disease.
#[derive(Deserialize)]
struct HospitalRef {
    key: String,
    #[serde(default)]
    unit: Option<String>,
}

// ─── Loading ─────────────────────────────────────────────────────────────────

impl Catalog {
    /// Load and validate the embedded assets. Any failure here is a data
    /// defect shipped with the binary, so callers treat it as fatal.
    pub fn load_embedded() -> Result<Catalog, CatalogError> {
        Self::from_sources(REMEDIES_JSON, FACILITIES_JSON, CITIES_JSON)
    }

    /// Build a catalog from raw JSON sources. Exposed so tests can load
    /// small fixture tables through the same validation path.
    pub fn from_sources(
        remedies_json: &str,
        facilities_json: &str,
        cities_json: &str,
    ) -> Result<Catalog, CatalogError> {
        let remedies: HashMap<Disease, RemedyTable> = serde_json::from_str(remedies_json)
            .map_err(|source| CatalogError::Parse {
                asset: "remedies.json",
                source,
            })?;

        let facility_file: FacilityFile = serde_json::from_str(facilities_json)
            .map_err(|source| CatalogError::Parse {
                asset: "facilities.json",
                source,
            })?;

        let raw_cities: BTreeMap<String, String> = serde_json::from_str(cities_json)
            .map_err(|source| CatalogError::Parse {
                asset: "cities.json",
                source,
            })?;

        let mut rosters = HashMap::new();
        for (disease, source) in facility_file.rosters {
            let roster = build_roster(disease, &source, &facility_file.hospitals)?;
            rosters.insert(disease, roster);
        }

        let mut cities = BTreeMap::new();
        for (city, raw) in raw_cities {
            let coord = Coordinate::parse_str(&raw).ok_or_else(|| CatalogError::InvalidCity {
                city: city.clone(),
                raw: raw.clone(),
            })?;
            cities.insert(city, coord);
        }

        Ok(Catalog {
            remedies,
            rosters,
            cities,
        })
    }

    // ─── Accessors ──────────────────────────────────────────────────────────

    pub fn remedy_table(&self, disease: Disease) -> Option<&RemedyTable> {
        self.remedies.get(&disease)
    }

    pub fn bundle(
        &self,
        disease: Disease,
        severity: Severity,
        age_group: AgeGroup,
    ) -> Option<&RemedyBundle> {
        self.remedies
            .get(&disease)?
            .get(&severity)?
            .get(&age_group)
    }

    /// Candidate list for the disease's facility search. Empty slice for
    /// a disease without a roster (none ship that way).
    pub fn roster(&self, disease: Disease) -> &[FacilityRecord] {
        self.rosters
            .get(&disease)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn city(&self, name: &str) -> Option<Coordinate> {
        self.cities.get(name.trim()).copied()
    }

    /// City table in sorted name order (BTreeMap iteration order).
    pub fn cities(&self) -> &BTreeMap<String, Coordinate> {
        &self.cities
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn facility_count(&self) -> usize {
        self.rosters.values().map(Vec::len).sum()
    }
}

/// Resolve hospital references, append individual practitioners, then
/// deduplicate by stable identity (name + coordinate). The source data
/// redefines several hospitals with near-identical fields; the first
/// occurrence wins and later duplicates are dropped with a log line.
fn build_roster(
    disease: Disease,
    source: &RosterSource,
    hospitals: &HashMap<String, FacilityRecord>,
) -> Result<Vec<FacilityRecord>, CatalogError> {
    let mut roster = Vec::with_capacity(source.hospitals.len() + source.practitioners.len());

    for href in &source.hospitals {
        let base = hospitals
            .get(&href.key)
            .ok_or_else(|| CatalogError::UnknownHospital {
                disease: disease.as_str().to_string(),
                key: href.key.clone(),
            })?;
        let mut record = base.clone();
        if let Some(unit) = &href.unit {
            record.name = format!("{} ({unit})", record.name);
        }
        roster.push(record);
    }

    roster.extend(source.practitioners.iter().cloned());

    let mut seen = HashSet::new();
    roster.retain(|record| {
        let fresh = seen.insert(record.identity());
        if !fresh {
            tracing::debug!(
                disease = disease.as_str(),
                facility = %record.name,
                "dropping duplicate roster entry"
            );
        }
        fresh
    });

    Ok(roster)
}
