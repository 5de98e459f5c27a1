//! Screening flow — classifier verdict plus remedy resolution.
//!
//! The caller validates the feature-vector length before the model is
//! invoked; a model failure past that point is an upstream capability
//! fault and propagates instead of being papered over. A positive
//! verdict pulls in the remedy resolver; a negative one ends the flow.

use crate::catalog::Catalog;
use crate::models::Disease;
use crate::prediction::{ModelError, RiskLabel, RiskModel};
use crate::remedy::{self, RemedyOutcome};

#[derive(Debug)]
pub struct ScreeningOutcome<'a> {
    pub disease: Disease,
    pub label: RiskLabel,
    /// Present only when risk was flagged.
    pub remedy: Option<RemedyOutcome<'a>>,
}

impl ScreeningOutcome<'_> {
    /// One-line verdict in the register the companion uses on screen.
    pub fn summary(&self) -> String {
        let name = self.disease.display_name();
        match self.label {
            RiskLabel::Positive => format!(
                "The entered measurements are consistent with an elevated risk of {name}. \
                 Consult a qualified professional."
            ),
            RiskLabel::Negative => {
                format!("The entered measurements do not indicate an elevated risk of {name}.")
            }
        }
    }
}

/// Run one screening: validate the feature count, ask the model for a
/// verdict, and on a positive flag resolve the remedy bundle for the
/// reported age and severity.
pub fn screen<'a>(
    catalog: &'a Catalog,
    model: &dyn RiskModel,
    disease: Disease,
    features: &[f64],
    age_input: Option<&str>,
    severity_input: Option<&str>,
) -> Result<ScreeningOutcome<'a>, ModelError> {
    if features.len() != model.feature_len() {
        return Err(ModelError::FeatureCount {
            expected: model.feature_len(),
            got: features.len(),
        });
    }

    let label = model.predict(features)?;
    let remedy = label
        .is_positive()
        .then(|| remedy::resolve(catalog, disease, age_input, severity_input));

    Ok(ScreeningOutcome {
        disease,
        label,
        remedy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::LinearModel;

    fn catalog() -> Catalog {
        Catalog::load_embedded().unwrap()
    }

    /// Model with a single dominant weight so tests can steer the verdict.
    fn steerable_model() -> LinearModel {
        let mut weights = vec![0.0; Disease::Diabetes.feature_len()];
        weights[0] = 1.0;
        LinearModel::new(weights, 0.0, 0.5)
    }

    #[test]
    fn negative_verdict_carries_no_remedy() {
        let catalog = catalog();
        let model = steerable_model();
        let features = vec![-10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let outcome = screen(
            &catalog,
            &model,
            Disease::Diabetes,
            &features,
            Some("35"),
            Some("Mild"),
        )
        .unwrap();
        assert_eq!(outcome.label, RiskLabel::Negative);
        assert!(outcome.remedy.is_none());
        assert!(outcome.summary().contains("do not indicate"));
    }

    #[test]
    fn positive_verdict_resolves_remedy() {
        let catalog = catalog();
        let model = steerable_model();
        let features = vec![10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let outcome = screen(
            &catalog,
            &model,
            Disease::Diabetes,
            &features,
            Some("35"),
            Some("Mild"),
        )
        .unwrap();
        assert_eq!(outcome.label, RiskLabel::Positive);
        match outcome.remedy {
            Some(RemedyOutcome::Found { bundle, .. }) => assert!(bundle.is_substantial()),
            other => panic!("expected a resolved remedy, got {other:?}"),
        }
        assert!(outcome.summary().contains("elevated risk"));
    }

    #[test]
    fn wrong_feature_count_fails_before_prediction() {
        let catalog = catalog();
        let model = steerable_model();
        let err = screen(
            &catalog,
            &model,
            Disease::Diabetes,
            &[1.0, 2.0],
            None,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::FeatureCount { expected: 8, got: 2 }));
    }
}
