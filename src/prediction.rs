//! Risk classifier seam — pre-trained binary models consumed as an
//! opaque capability.
//!
//! The models themselves are coefficient files produced offline, one
//! per disease, living under `config::models_dir()`. The service treats
//! them the way it would any external predictor: hand over exactly the
//! expected feature vector, get back a binary label. Nothing here
//! trains, tunes, or second-guesses a model.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::models::Disease;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLabel {
    Negative,
    Positive,
}

impl RiskLabel {
    pub fn is_positive(&self) -> bool {
        matches!(self, RiskLabel::Positive)
    }
}

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Expected {expected} feature values, got {got}")]
    FeatureCount { expected: usize, got: usize },

    #[error("Cannot read model file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse model file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Model file {path} has no weights")]
    Empty { path: String },
}

/// A pre-trained binary classifier. Implementations are opaque: the
/// only contract is the feature-vector length and the 0/1 verdict.
pub trait RiskModel: Send + Sync {
    fn feature_len(&self) -> usize;
    fn predict(&self, features: &[f64]) -> Result<RiskLabel, ModelError>;
}

// ─── Linear adapter ──────────────────────────────────────────────────────────

/// Logistic classifier loaded from a JSON coefficient file:
/// `{"weights": [...], "bias": ..., "threshold": 0.5}`.
pub struct LinearModel {
    weights: Vec<f64>,
    bias: f64,
    threshold: f64,
}

#[derive(Deserialize)]
struct LinearModelFile {
    weights: Vec<f64>,
    #[serde(default)]
    bias: f64,
    #[serde(default = "default_threshold")]
    threshold: f64,
}

fn default_threshold() -> f64 {
    0.5
}

impl LinearModel {
    pub fn new(weights: Vec<f64>, bias: f64, threshold: f64) -> Self {
        Self {
            weights,
            bias,
            threshold,
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: display.clone(),
            source,
        })?;
        let file: LinearModelFile =
            serde_json::from_str(&raw).map_err(|source| ModelError::Parse {
                path: display.clone(),
                source,
            })?;
        if file.weights.is_empty() {
            return Err(ModelError::Empty { path: display });
        }
        Ok(Self::new(file.weights, file.bias, file.threshold))
    }
}

impl RiskModel for LinearModel {
    fn feature_len(&self) -> usize {
        self.weights.len()
    }

    fn predict(&self, features: &[f64]) -> Result<RiskLabel, ModelError> {
        if features.len() != self.weights.len() {
            return Err(ModelError::FeatureCount {
                expected: self.weights.len(),
                got: features.len(),
            });
        }
        let score: f64 = self
            .weights
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.bias;
        let probability = 1.0 / (1.0 + (-score).exp());
        Ok(if probability >= self.threshold {
            RiskLabel::Positive
        } else {
            RiskLabel::Negative
        })
    }
}

// ─── Registry ────────────────────────────────────────────────────────────────

/// Per-disease model lookup, filled once at startup. A disease whose
/// file is absent simply has no entry; screening for it reports the
/// capability as unavailable instead of guessing.
#[derive(Default)]
pub struct ModelRegistry {
    models: HashMap<Disease, Arc<dyn RiskModel>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `<dir>/<disease>.json` for every disease, skipping files
    /// that are missing and warning on files that fail to parse.
    pub fn load_dir(dir: &Path) -> Self {
        let mut registry = Self::new();
        for disease in Disease::ALL {
            let path = dir.join(format!("{}.json", disease.as_str()));
            if !path.exists() {
                tracing::warn!(
                    disease = disease.as_str(),
                    path = %path.display(),
                    "no classifier file; screening disabled for this disease"
                );
                continue;
            }
            match LinearModel::from_file(&path) {
                Ok(model) => {
                    if model.feature_len() != disease.feature_len() {
                        tracing::warn!(
                            disease = disease.as_str(),
                            expected = disease.feature_len(),
                            got = model.feature_len(),
                            "classifier file has wrong feature count; skipping"
                        );
                        continue;
                    }
                    registry.insert(disease, Arc::new(model));
                }
                Err(err) => {
                    tracing::warn!(disease = disease.as_str(), %err, "cannot load classifier");
                }
            }
        }
        registry
    }

    pub fn insert(&mut self, disease: Disease, model: Arc<dyn RiskModel>) {
        self.models.insert(disease, model);
    }

    pub fn get(&self, disease: Disease) -> Option<&Arc<dyn RiskModel>> {
        self.models.get(&disease)
    }

    pub fn available(&self) -> Vec<Disease> {
        Disease::ALL
            .into_iter()
            .filter(|d| self.models.contains_key(d))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn positive_weight_on_high_value_flags_risk() {
        let model = LinearModel::new(vec![1.0], -5.0, 0.5);
        assert_eq!(model.predict(&[10.0]).unwrap(), RiskLabel::Positive);
        assert_eq!(model.predict(&[1.0]).unwrap(), RiskLabel::Negative);
    }

    #[test]
    fn wrong_feature_count_is_rejected() {
        let model = LinearModel::new(vec![0.1; 8], 0.0, 0.5);
        let err = model.predict(&[1.0, 2.0]).unwrap_err();
        match err {
            ModelError::FeatureCount { expected, got } => {
                assert_eq!(expected, 8);
                assert_eq!(got, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn prediction_is_deterministic() {
        let model = LinearModel::new(vec![0.3, -0.2, 0.5], 0.1, 0.5);
        let features = [1.2, 3.4, 0.2];
        assert_eq!(
            model.predict(&features).unwrap(),
            model.predict(&features).unwrap()
        );
    }

    #[test]
    fn from_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diabetes.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"weights": [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8], "bias": -2.0}}"#
        )
        .unwrap();

        let model = LinearModel::from_file(&path).unwrap();
        assert_eq!(model.feature_len(), 8);
        assert!(model.predict(&[1.0; 8]).is_ok());
    }

    #[test]
    fn empty_weights_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, r#"{"weights": []}"#).unwrap();
        assert!(matches!(
            LinearModel::from_file(&path),
            Err(ModelError::Empty { .. })
        ));
    }

    #[test]
    fn registry_skips_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("diabetes.json"),
            format!(
                r#"{{"weights": {:?}, "bias": 0.0}}"#,
                vec![0.1; Disease::Diabetes.feature_len()]
            ),
        )
        .unwrap();

        let registry = ModelRegistry::load_dir(dir.path());
        assert_eq!(registry.available(), vec![Disease::Diabetes]);
        assert!(registry.get(Disease::HeartDisease).is_none());
    }

    #[test]
    fn registry_rejects_wrong_feature_count() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("parkinsons.json"),
            r#"{"weights": [0.1, 0.2], "bias": 0.0}"#,
        )
        .unwrap();

        let registry = ModelRegistry::load_dir(dir.path());
        assert!(registry.get(Disease::Parkinsons).is_none());
    }
}
