//! Shared types for the API layer.

use std::str::FromStr;
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::catalog::Catalog;
use crate::models::Disease;
use crate::prediction::ModelRegistry;

/// Shared context for all API routes: the immutable catalog plus the
/// classifier registry, both loaded once at startup.
#[derive(Clone)]
pub struct ApiContext {
    pub catalog: Arc<Catalog>,
    pub models: Arc<ModelRegistry>,
}

impl ApiContext {
    pub fn new(catalog: Arc<Catalog>, models: Arc<ModelRegistry>) -> Self {
        Self { catalog, models }
    }
}

/// Parse a `:disease` path segment, mapping unknown values to 404.
pub fn parse_disease(raw: &str) -> Result<Disease, ApiError> {
    Disease::from_str(raw).map_err(|_| ApiError::NotFound(format!("Unknown disease: {raw}")))
}
