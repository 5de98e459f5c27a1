//! Remedy bundle model — the typed shape of one knowledge-base entry.
//!
//! The source data is a deeply nested table with inconsistent keys per
//! branch. Here every entry is a `RemedyBundle`: an ordered list of
//! category sections whose content is either a free-text note or a
//! structured list of named practices. The `Note`/`Structured` tag is
//! explicit so the resolver never has to re-inspect raw shape.

use serde::{Deserialize, Serialize};

use super::enums::Category;

/// One (disease, severity, age group) entry in the knowledge base.
///
/// `note` carries tier-level summary text for entries that were captured
/// as a single paragraph; fully fleshed-out entries use `sections`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemedyBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub sections: Vec<CategorySection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySection {
    pub category: Category,
    pub content: CategoryContent,
}

/// Content of one category inside a bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CategoryContent {
    /// A terse summary paragraph, nothing itemized.
    Note { text: String },
    /// Itemized guidance, optionally with a trailing note.
    Structured {
        items: Vec<RemedyItem>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
}

/// A single named practice: an asana, a breathing exercise, a meal slot,
/// a preparation. Steps are ordered; the rest is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemedyItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caution: Option<String>,
}

impl CategoryContent {
    pub fn is_structured(&self) -> bool {
        matches!(self, CategoryContent::Structured { .. })
    }
}

impl RemedyBundle {
    /// A bundle is substantial when at least one category carries
    /// itemized guidance. Note-only bundles are minimal: shown only
    /// when nothing better exists at any fallback tier.
    pub fn is_substantial(&self) -> bool {
        self.sections.iter().any(|s| s.content.is_structured())
    }

    pub fn section(&self, category: Category) -> Option<&CategorySection> {
        self.sections.iter().find(|s| s.category == category)
    }
}
