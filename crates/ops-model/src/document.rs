//! The unified operational document type.
//!
//! `OperationalDocument` is an internally tagged union over the five
//! known document shapes. Unrecognized `type` values do not fail
//! deserialization: they land in the [`Unknown`] fallback variant with
//! the raw JSON preserved, so the viewer can degrade to a diagnostic
//! dump instead of erroring.
//!
//! [`Unknown`]: OperationalDocument::Unknown

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::checklist::Checklist;
use crate::enums::{DocStatus, DocumentType, Frequency};
use crate::equipment::Equipment;
use crate::guide::Guide;
use crate::recipe::Recipe;
use crate::shared::{ConfidenceTier, EvidenceRef};
use crate::sop::Sop;

/// Metadata every known document variant carries, flattened into the
/// variant's JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentCore {
    pub id: String,
    pub title: String,
    pub status: DocStatus,
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner_user_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub source_evidence: Vec<EvidenceRef>,
    #[serde(default)]
    pub open_questions: Vec<String>,
    /// Extraction confidence in [0, 1]; see [`ConfidenceTier`].
    pub confidence_score: f64,
}

impl DocumentCore {
    #[cfg(test)]
    pub(crate) fn test_stub(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            status: DocStatus::Published,
            version: "1.0".to_string(),
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
            owner_user_id: "tester".to_string(),
            tags: Vec::new(),
            description: None,
            source_evidence: Vec::new(),
            open_questions: Vec::new(),
            confidence_score: 1.0,
        }
    }
}

/// A document whose `type` matched none of the known variants.
///
/// Keeps the raw JSON so the fallback view can show a diagnostic dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnknownDocument {
    pub raw: Value,
}

impl UnknownDocument {
    fn str_field(&self, key: &str) -> Option<&str> {
        self.raw.get(key).and_then(Value::as_str)
    }

    /// The unrecognized `type` string, if the value carried one.
    pub fn type_str(&self) -> Option<&str> {
        self.str_field("type")
    }

    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }

    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    /// Pretty-printed JSON for the diagnostic view.
    pub fn pretty_dump(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| self.raw.to_string())
    }
}

/// One operational document of any shape.
///
/// Dispatch checks the known discriminants in declaration order
/// (Recipe, SOP, Checklist, Equipment, Guide); anything else falls
/// through to `Unknown`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OperationalDocument {
    Recipe(Recipe),
    #[serde(rename = "SOP")]
    Sop(Sop),
    Checklist(Checklist),
    Equipment(Equipment),
    Guide(Guide),
    #[serde(untagged)]
    Unknown(UnknownDocument),
}

impl OperationalDocument {
    /// The known discriminant, `None` for unknown documents.
    pub fn doc_type(&self) -> Option<DocumentType> {
        match self {
            Self::Recipe(_) => Some(DocumentType::Recipe),
            Self::Sop(_) => Some(DocumentType::Sop),
            Self::Checklist(_) => Some(DocumentType::Checklist),
            Self::Equipment(_) => Some(DocumentType::Equipment),
            Self::Guide(_) => Some(DocumentType::Guide),
            Self::Unknown(_) => None,
        }
    }

    /// Type string for display; the raw tag for unknown documents.
    pub fn type_label(&self) -> &str {
        match self {
            Self::Unknown(unknown) => unknown.type_str().unwrap_or("Unknown"),
            known => known
                .doc_type()
                .map(|doc_type| doc_type.as_str())
                .unwrap_or("Unknown"),
        }
    }

    /// Shared metadata, `None` for unknown documents.
    pub fn core(&self) -> Option<&DocumentCore> {
        match self {
            Self::Recipe(r) => Some(&r.core),
            Self::Sop(s) => Some(&s.core),
            Self::Checklist(c) => Some(&c.core),
            Self::Equipment(e) => Some(&e.core),
            Self::Guide(g) => Some(&g.core),
            Self::Unknown(_) => None,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Unknown(unknown) => unknown.id().unwrap_or(""),
            known => known.core().map(|c| c.id.as_str()).unwrap_or(""),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Unknown(unknown) => unknown.title().unwrap_or("Untitled"),
            known => known.core().map(|c| c.title.as_str()).unwrap_or("Untitled"),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.core().and_then(|c| c.description.as_deref())
    }

    pub fn confidence_score(&self) -> f64 {
        self.core().map(|c| c.confidence_score).unwrap_or(0.0)
    }

    pub fn confidence_tier(&self) -> ConfidenceTier {
        ConfidenceTier::from_score(self.confidence_score())
    }

    pub fn open_questions(&self) -> &[String] {
        self.core().map(|c| c.open_questions.as_slice()).unwrap_or(&[])
    }

    pub fn source_evidence(&self) -> &[EvidenceRef] {
        self.core().map(|c| c.source_evidence.as_slice()).unwrap_or(&[])
    }

    pub fn category_path(&self) -> Option<&str> {
        match self {
            Self::Recipe(r) => r.category_path.as_deref(),
            Self::Sop(s) => s.category_path.as_deref(),
            Self::Guide(g) => g.category_path.as_deref(),
            _ => None,
        }
    }

    pub fn station(&self) -> Option<&str> {
        match self {
            Self::Recipe(r) => r.station.as_deref(),
            Self::Sop(s) => s.station.as_deref(),
            Self::Checklist(c) => c.station.as_deref(),
            Self::Equipment(e) => e.station.as_deref(),
            Self::Guide(g) => g.station.as_deref(),
            Self::Unknown(_) => None,
        }
    }

    pub fn role(&self) -> Option<&str> {
        match self {
            Self::Recipe(r) => r.role.as_deref(),
            Self::Sop(s) => s.role.as_deref(),
            Self::Checklist(c) => c.role.as_deref(),
            Self::Equipment(e) => e.role.as_deref(),
            Self::Guide(g) => g.role.as_deref(),
            Self::Unknown(_) => None,
        }
    }

    pub fn frequency(&self) -> Option<Frequency> {
        match self {
            Self::Recipe(r) => r.frequency,
            Self::Sop(s) => s.frequency,
            Self::Checklist(c) => Some(c.frequency),
            Self::Equipment(e) => e.frequency,
            Self::Guide(g) => g.frequency,
            Self::Unknown(_) => None,
        }
    }

    pub fn hazards(&self) -> &[String] {
        match self {
            Self::Recipe(r) => &r.hazards,
            Self::Sop(s) => &s.hazards,
            _ => &[],
        }
    }

    pub fn allergens(&self) -> &[String] {
        match self {
            Self::Recipe(r) => &r.allergens,
            Self::Sop(s) => &s.allergens,
            _ => &[],
        }
    }

    /// Derived time estimate for the header: Recipe prep+cook, SOP
    /// estimated time, nothing for the rest.
    pub fn time_estimate_minutes(&self) -> Option<u32> {
        match self {
            Self::Recipe(r) => r.total_time_minutes(),
            Self::Sop(s) => s.estimated_time_minutes,
            _ => None,
        }
    }
}
