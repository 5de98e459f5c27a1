use crate::catalog::CatalogError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(CatalogError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Disease {
    Diabetes => "diabetes",
    HeartDisease => "heart_disease",
    Parkinsons => "parkinsons",
});

str_enum!(Severity {
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
});

str_enum!(AgeGroup {
    Young => "young",
    Adult => "adult",
    Senior => "senior",
});

str_enum!(Category {
    Yoga => "yoga",
    Pranayama => "pranayama",
    Diet => "diet",
    Naturopathy => "naturopathy",
    Ayurveda => "ayurveda",
    ProTips => "pro_tips",
});

impl Disease {
    pub const ALL: [Disease; 3] = [
        Disease::Diabetes,
        Disease::HeartDisease,
        Disease::Parkinsons,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Disease::Diabetes => "Diabetes",
            Disease::HeartDisease => "Heart Disease",
            Disease::Parkinsons => "Parkinson's Disease",
        }
    }

    /// Number of values the disease's classifier expects, in order.
    pub fn feature_len(&self) -> usize {
        self.feature_names().len()
    }

    /// Ordered feature names for the disease's classifier input.
    pub fn feature_names(&self) -> &'static [&'static str] {
        match self {
            Disease::Diabetes => &[
                "pregnancies",
                "glucose",
                "blood_pressure",
                "skin_thickness",
                "insulin",
                "bmi",
                "diabetes_pedigree_function",
                "age",
            ],
            Disease::HeartDisease => &[
                "age",
                "sex",
                "chest_pain_type",
                "resting_bp",
                "cholesterol",
                "fasting_blood_sugar",
                "resting_ecg",
                "max_heart_rate",
                "exercise_angina",
                "st_depression",
                "st_slope",
                "major_vessels",
                "thalassemia",
            ],
            Disease::Parkinsons => &[
                "mdvp_fo_hz",
                "mdvp_fhi_hz",
                "mdvp_flo_hz",
                "jitter_percent",
                "jitter_abs",
                "rap",
                "ppq",
                "jitter_ddp",
                "shimmer",
                "shimmer_db",
                "apq3",
                "apq5",
                "apq",
                "shimmer_dda",
                "nhr",
                "hnr",
                "rpde",
                "dfa",
                "spread1",
                "spread2",
                "d2",
                "ppe",
            ],
        }
    }

    /// City preselected in the facility search for this disease.
    pub fn default_city(&self) -> &'static str {
        match self {
            Disease::Diabetes => "Kolhapur",
            Disease::HeartDisease | Disease::Parkinsons => "Mumbai",
        }
    }
}

impl Severity {
    /// Parse a self-reported severity string: trim, capitalize, match.
    /// Returns `None` for anything outside the three clinical tiers;
    /// the caller decides the default and the advisory.
    pub fn from_self_reported(raw: &str) -> Option<Severity> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let normalized = match chars.next() {
            Some(first) => {
                first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
            }
            None => return None,
        };
        match normalized.as_str() {
            "Mild" => Some(Severity::Mild),
            "Moderate" => Some(Severity::Moderate),
            "Severe" => Some(Severity::Severe),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }
}

impl AgeGroup {
    /// Bracket a numeric age: under 18 young, 60 and over senior.
    pub fn from_age(age: u32) -> AgeGroup {
        if age < 18 {
            AgeGroup::Young
        } else if age >= 60 {
            AgeGroup::Senior
        } else {
            AgeGroup::Adult
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AgeGroup::Young => "Young",
            AgeGroup::Adult => "Adult",
            AgeGroup::Senior => "Senior",
        }
    }
}

impl Category {
    /// Fixed display order for bundle sections.
    pub const ALL: [Category; 6] = [
        Category::Yoga,
        Category::Pranayama,
        Category::Diet,
        Category::Naturopathy,
        Category::Ayurveda,
        Category::ProTips,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Yoga => "Yoga Asanas",
            Category::Pranayama => "Pranayama (Breathing Exercises)",
            Category::Diet => "Dietary Guidelines",
            Category::Naturopathy => "Naturopathy & Lifestyle",
            Category::Ayurveda => "Ayurvedic Considerations",
            Category::ProTips => "Pro-Tips & Extra Steps",
        }
    }
}
