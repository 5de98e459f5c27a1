//! Typed domain model: diseases, clinical tiers, remedy bundles,
//! facility records.

pub mod enums;
pub mod facility;
pub mod remedy;

pub use enums::{AgeGroup, Category, Disease, Severity};
pub use facility::{Coordinate, FacilityRecord};
pub use remedy::{CategoryContent, CategorySection, RemedyBundle, RemedyItem};
