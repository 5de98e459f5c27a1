//! Remedy resolution — degrading lookup over the sparse knowledge base.
//!
//! Severity is self-reported and table coverage is uneven: many
//! moderate/severe entries are note-only summaries while the mild/adult
//! entries are fully itemized. The resolver probes an ordered list of
//! (severity, age group) pairs, prefers itemized content over terse
//! notes across tiers, and reports every defaulting or substitution
//! back to the caller as an advisory rather than an error.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::{AgeGroup, Disease, RemedyBundle, Severity};

/// A (severity, age group) pair, one cell of the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tier {
    pub severity: Severity,
    pub age_group: AgeGroup,
}

impl Tier {
    pub fn new(severity: Severity, age_group: AgeGroup) -> Self {
        Self {
            severity,
            age_group,
        }
    }

    pub fn label(&self) -> String {
        format!(
            "{} / {}",
            self.severity.display_name(),
            self.age_group.display_name()
        )
    }
}

/// Informational conditions surfaced to the caller. Never errors: each
/// one describes a recovery the resolver already performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// Age input was missing or did not parse as a positive integer.
    AgeDefaulted { raw: Option<String> },
    /// Severity input was not one of the three clinical tiers.
    SeverityDefaulted { raw: Option<String> },
    /// Guidance shown is for a different tier than requested.
    SubstituteTier { requested: Tier, matched: Tier },
}

impl Advisory {
    pub fn code(&self) -> &'static str {
        match self {
            Advisory::AgeDefaulted { .. } => "age_defaulted",
            Advisory::SeverityDefaulted { .. } => "severity_defaulted",
            Advisory::SubstituteTier { .. } => "substitute_tier",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Advisory::AgeDefaulted { .. } => {
                "Age input missing or invalid; using the Adult age group for guidance.".to_string()
            }
            Advisory::SeverityDefaulted { .. } => {
                "Unrecognized severity; defaulting to Moderate.".to_string()
            }
            Advisory::SubstituteTier { requested, matched } => format!(
                "Showing guidance for {} as specific guidance for {} is not available.",
                matched.label(),
                requested.label()
            ),
        }
    }
}

/// Result of a resolution. `NotFound` is an expected outcome: it means
/// no guidance exists for the disease at any fallback tier, and callers
/// render it as an informational notice.
#[derive(Debug)]
pub enum RemedyOutcome<'a> {
    Found {
        bundle: &'a RemedyBundle,
        requested: Tier,
        matched: Tier,
        advisories: Vec<Advisory>,
    },
    NotFound {
        requested: Tier,
        advisories: Vec<Advisory>,
    },
}

impl RemedyOutcome<'_> {
    pub fn advisories(&self) -> &[Advisory] {
        match self {
            RemedyOutcome::Found { advisories, .. } => advisories,
            RemedyOutcome::NotFound { advisories, .. } => advisories,
        }
    }
}

/// Resolve the best-available remedy bundle for a disease given raw,
/// user-supplied age and severity strings.
pub fn resolve<'a>(
    catalog: &'a Catalog,
    disease: Disease,
    age_input: Option<&str>,
    severity_input: Option<&str>,
) -> RemedyOutcome<'a> {
    let mut advisories = Vec::new();

    let age_group = match age_input.and_then(parse_age) {
        Some(age) => AgeGroup::from_age(age),
        None => {
            advisories.push(Advisory::AgeDefaulted {
                raw: age_input.map(str::to_string),
            });
            AgeGroup::Adult
        }
    };

    let severity = match severity_input.and_then(Severity::from_self_reported) {
        Some(severity) => severity,
        None => {
            advisories.push(Advisory::SeverityDefaulted {
                raw: severity_input.map(str::to_string),
            });
            Severity::Moderate
        }
    };

    let requested = Tier::new(severity, age_group);
    let probes = probe_order(requested);

    // First substantial bundle wins. A minimal bundle found earlier is
    // remembered so it is never discarded in favor of a later one.
    let mut fallback: Option<(&RemedyBundle, Tier)> = None;
    for tier in probes {
        let Some(bundle) = catalog.bundle(disease, tier.severity, tier.age_group) else {
            continue;
        };
        if bundle.is_substantial() {
            if tier != requested {
                advisories.push(Advisory::SubstituteTier {
                    requested,
                    matched: tier,
                });
            }
            return RemedyOutcome::Found {
                bundle,
                requested,
                matched: tier,
                advisories,
            };
        }
        if fallback.is_none() {
            fallback = Some((bundle, tier));
        }
    }

    match fallback {
        Some((bundle, tier)) => {
            if tier != requested {
                advisories.push(Advisory::SubstituteTier {
                    requested,
                    matched: tier,
                });
            }
            RemedyOutcome::Found {
                bundle,
                requested,
                matched: tier,
                advisories,
            }
        }
        None => RemedyOutcome::NotFound {
            requested,
            advisories,
        },
    }
}

/// Age must be a positive integer in plain digits; "abc", "-5", "0" and
/// the empty string all fail and leave the bracket to the Adult default.
fn parse_age(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let age = trimmed.parse::<u32>().ok()?;
    (age > 0).then_some(age)
}

/// Ordered candidate tiers, most specific first. Same-severity before
/// less severe; the requested age group before the adult baseline.
/// Mild is the least-specific clinical tier and has no further fallback.
fn probe_order(requested: Tier) -> Vec<Tier> {
    let Tier {
        severity,
        age_group,
    } = requested;

    let mut probes = Vec::with_capacity(6);
    let mut push_pair = |severity: Severity| {
        probes.push(Tier::new(severity, age_group));
        if age_group != AgeGroup::Adult {
            probes.push(Tier::new(severity, AgeGroup::Adult));
        }
    };

    push_pair(severity);
    match severity {
        Severity::Severe => {
            push_pair(Severity::Moderate);
            push_pair(Severity::Mild);
        }
        Severity::Moderate => push_pair(Severity::Mild),
        Severity::Mild => {}
    }
    probes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    const NO_FACILITIES: &str = r#"{"hospitals": {}, "rosters": {}}"#;

    fn fixture_catalog(remedies_json: &str) -> Catalog {
        Catalog::from_sources(remedies_json, NO_FACILITIES, "{}").unwrap()
    }

    /// A small sparse table: Mild/Adult substantial, Moderate/Young
    /// substantial, Severe/Adult minimal. Everything else absent.
    fn sparse_catalog() -> Catalog {
        fixture_catalog(
            r#"{
                "diabetes": {
                    "mild": {
                        "adult": {"sections": [{
                            "category": "yoga",
                            "content": {"kind": "structured", "items": [{"name": "Mandukasana"}]}
                        }]}
                    },
                    "moderate": {
                        "young": {"sections": [{
                            "category": "pranayama",
                            "content": {"kind": "structured", "items": [{"name": "Bhramari"}]}
                        }]}
                    },
                    "severe": {
                        "adult": {"note": "severe adult summary"}
                    }
                }
            }"#,
        )
    }

    fn matched_tier(outcome: &RemedyOutcome<'_>) -> Tier {
        match outcome {
            RemedyOutcome::Found { matched, .. } => *matched,
            RemedyOutcome::NotFound { .. } => panic!("expected a match"),
        }
    }

    #[test]
    fn exact_substantial_match_has_no_substitution_advisory() {
        let catalog = sparse_catalog();
        let outcome = resolve(&catalog, Disease::Diabetes, Some("35"), Some("Mild"));
        let tier = matched_tier(&outcome);
        assert_eq!(tier, Tier::new(Severity::Mild, AgeGroup::Adult));
        assert!(outcome.advisories().is_empty());
    }

    #[test]
    fn severe_young_degrades_to_moderate_young_not_mild() {
        // Severe/Young absent, Moderate/Young substantial: the probe
        // order must stop there instead of skipping ahead to Mild.
        let catalog = sparse_catalog();
        let outcome = resolve(&catalog, Disease::Diabetes, Some("15"), Some("Severe"));
        assert_eq!(
            matched_tier(&outcome),
            Tier::new(Severity::Moderate, AgeGroup::Young)
        );
        assert!(outcome
            .advisories()
            .iter()
            .any(|a| matches!(a, Advisory::SubstituteTier { .. })));
    }

    #[test]
    fn minimal_bundle_found_first_is_not_discarded() {
        // Only Severe/Adult (minimal) and nothing substantial anywhere:
        // the first minimal probe must be returned, not dropped.
        let catalog = fixture_catalog(
            r#"{
                "diabetes": {
                    "severe": {"adult": {"note": "severe adult summary"}},
                    "mild": {"adult": {"note": "mild adult summary"}}
                }
            }"#,
        );
        let outcome = resolve(&catalog, Disease::Diabetes, Some("40"), Some("Severe"));
        match outcome {
            RemedyOutcome::Found {
                bundle, matched, ..
            } => {
                assert_eq!(matched, Tier::new(Severity::Severe, AgeGroup::Adult));
                assert_eq!(bundle.note.as_deref(), Some("severe adult summary"));
            }
            RemedyOutcome::NotFound { .. } => panic!("expected minimal fallback"),
        }
    }

    #[test]
    fn substantial_later_beats_minimal_earlier() {
        // Severe/Adult is minimal, Mild/Adult is substantial: the
        // substantial bundle wins even though the minimal one probed first.
        let catalog = sparse_catalog();
        let outcome = resolve(&catalog, Disease::Diabetes, Some("40"), Some("Severe"));
        assert_eq!(
            matched_tier(&outcome),
            Tier::new(Severity::Mild, AgeGroup::Adult)
        );
    }

    #[test]
    fn garbage_severity_behaves_like_moderate() {
        let catalog = sparse_catalog();
        let garbage = resolve(&catalog, Disease::Diabetes, Some("15"), Some("garbage"));
        let moderate = resolve(&catalog, Disease::Diabetes, Some("15"), Some("Moderate"));
        assert_eq!(matched_tier(&garbage), matched_tier(&moderate));
        assert!(garbage
            .advisories()
            .iter()
            .any(|a| matches!(a, Advisory::SeverityDefaulted { .. })));
    }

    #[test]
    fn bad_age_inputs_behave_like_adult() {
        let catalog = sparse_catalog();
        let adult = resolve(&catalog, Disease::Diabetes, Some("30"), Some("Mild"));
        for raw in ["abc", "-5", "", "0", "12.5"] {
            let outcome = resolve(&catalog, Disease::Diabetes, Some(raw), Some("Mild"));
            assert_eq!(
                matched_tier(&outcome),
                matched_tier(&adult),
                "age input {raw:?} should default to Adult"
            );
            assert!(outcome
                .advisories()
                .iter()
                .any(|a| matches!(a, Advisory::AgeDefaulted { .. })));
        }
    }

    #[test]
    fn missing_age_defaults_to_adult() {
        let catalog = sparse_catalog();
        let outcome = resolve(&catalog, Disease::Diabetes, None, Some("Mild"));
        assert_eq!(
            matched_tier(&outcome),
            Tier::new(Severity::Mild, AgeGroup::Adult)
        );
    }

    #[test]
    fn unknown_disease_table_is_not_found() {
        let catalog = sparse_catalog();
        let outcome = resolve(&catalog, Disease::Parkinsons, Some("40"), Some("Mild"));
        assert!(matches!(outcome, RemedyOutcome::NotFound { .. }));
    }

    #[test]
    fn probe_order_for_severe_young() {
        let probes = probe_order(Tier::new(Severity::Severe, AgeGroup::Young));
        let expected = [
            (Severity::Severe, AgeGroup::Young),
            (Severity::Severe, AgeGroup::Adult),
            (Severity::Moderate, AgeGroup::Young),
            (Severity::Moderate, AgeGroup::Adult),
            (Severity::Mild, AgeGroup::Young),
            (Severity::Mild, AgeGroup::Adult),
        ];
        assert_eq!(
            probes,
            expected.map(|(s, a)| Tier::new(s, a)).to_vec()
        );
    }

    #[test]
    fn probe_order_for_mild_adult_is_single() {
        let probes = probe_order(Tier::new(Severity::Mild, AgeGroup::Adult));
        assert_eq!(probes, vec![Tier::new(Severity::Mild, AgeGroup::Adult)]);
    }

    #[test]
    fn resolution_is_idempotent() {
        let catalog = sparse_catalog();
        let first = resolve(&catalog, Disease::Diabetes, Some("65"), Some("Severe"));
        let second = resolve(&catalog, Disease::Diabetes, Some("65"), Some("Severe"));
        assert_eq!(matched_tier(&first), matched_tier(&second));
        assert_eq!(first.advisories(), second.advisories());
    }

    // ── Embedded-table behavior ──────────────────────────────────

    #[test]
    fn embedded_exact_match_for_mild_adult() {
        let catalog = Catalog::load_embedded().unwrap();
        for disease in Disease::ALL {
            let outcome = resolve(&catalog, disease, Some("35"), Some("Mild"));
            assert_eq!(
                matched_tier(&outcome),
                Tier::new(Severity::Mild, AgeGroup::Adult),
                "{} mild/adult should match exactly",
                disease.as_str()
            );
            assert!(outcome.advisories().is_empty());
        }
    }

    #[test]
    fn embedded_severe_senior_diabetes_degrades_to_mild_senior() {
        // Severe and moderate senior tiers are note-only for diabetes;
        // the first itemized bundle in probe order is Mild/Senior.
        let catalog = Catalog::load_embedded().unwrap();
        let outcome = resolve(&catalog, Disease::Diabetes, Some("70"), Some("Severe"));
        assert_eq!(
            matched_tier(&outcome),
            Tier::new(Severity::Mild, AgeGroup::Senior)
        );
    }

    #[test]
    fn embedded_severe_senior_parkinsons_matches_exactly() {
        let catalog = Catalog::load_embedded().unwrap();
        let outcome = resolve(&catalog, Disease::Parkinsons, Some("70"), Some("Severe"));
        assert_eq!(
            matched_tier(&outcome),
            Tier::new(Severity::Severe, AgeGroup::Senior)
        );
        assert!(outcome.advisories().is_empty());
    }
}
