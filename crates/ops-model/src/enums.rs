//! Type-safe enumerations for operational document metadata.
//!
//! These enums give compile-time safety to concepts the wire format
//! represents as strings. Serde spellings match the document JSON
//! (snake_case values, `"SOP"` uppercase).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Document type discriminant.
///
/// Every operational document carries a `type` field with one of these
/// five values. Viewer dispatch checks them in the order of [`ALL`],
/// which is also the sidebar display order.
///
/// [`ALL`]: DocumentType::ALL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    /// Recipe: ingredients, method steps, plating and QC.
    Recipe,
    /// Standard operating procedure: ordered steps plus troubleshooting.
    #[serde(rename = "SOP")]
    Sop,
    /// Checklist: per-item responses with completion tracking.
    Checklist,
    /// Equipment guide: quick actions, programs, error codes.
    Equipment,
    /// Reference guide: sections, tables, scenarios, FAQ.
    Guide,
}

impl DocumentType {
    /// All document types in dispatch/display order.
    pub const ALL: [DocumentType; 5] = [
        Self::Recipe,
        Self::Sop,
        Self::Checklist,
        Self::Equipment,
        Self::Guide,
    ];

    /// The canonical type string as it appears in the `type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recipe => "Recipe",
            Self::Sop => "SOP",
            Self::Checklist => "Checklist",
            Self::Equipment => "Equipment",
            Self::Guide => "Guide",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Recipe" => Ok(Self::Recipe),
            "SOP" => Ok(Self::Sop),
            "Checklist" => Ok(Self::Checklist),
            "Equipment" => Ok(Self::Equipment),
            "Guide" => Ok(Self::Guide),
            other => Err(ModelError::UnknownDocumentType(other.to_string())),
        }
    }
}

/// How often a document is expected to be executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    PerOrder,
    PerShift,
    Daily,
    Weekly,
    Monthly,
    AdHoc,
}

impl Frequency {
    /// Human-readable label ("per order", "ad hoc", ...).
    pub fn label(&self) -> &'static str {
        match self {
            Self::PerOrder => "per order",
            Self::PerShift => "per shift",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::AdHoc => "ad hoc",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Shift a checklist applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    Am,
    Pm,
    FullDay,
    Overnight,
}

impl Shift {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
            Self::FullDay => "Full Day",
            Self::Overnight => "Overnight",
        }
    }
}

/// Response kind of a checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    Checkbox,
    Number,
    Temperature,
    Text,
    Photo,
}

impl ResponseType {
    /// Whether this response expects a numeric entry field.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number | Self::Temperature)
    }
}

/// Temperature unit for CCPs, cooking modes, and equipment programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    C,
    F,
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::C => write!(f, "C"),
            Self::F => write!(f, "F"),
        }
    }
}

/// Starting state a recipe cooking mode applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CookingMode {
    Fresh,
    Defrosted,
    Frozen,
}

impl CookingMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Defrosted => "defrosted",
            Self::Frozen => "frozen",
        }
    }
}

/// Severity/intent of a callout block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalloutKind {
    Info,
    Warning,
    Critical,
    Tip,
}

/// Authoring lifecycle state of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocStatus {
    Draft,
    NeedsReview,
    Approved,
    Published,
    Archived,
}

/// Guide subcategory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuideKind {
    OpsReference,
    PolicyHr,
    Culture,
    TrainingStandard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_type_round_trips_sop_spelling() {
        let json = serde_json::to_string(&DocumentType::Sop).unwrap();
        assert_eq!(json, "\"SOP\"");
        let parsed: DocumentType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, DocumentType::Sop);
    }

    #[test]
    fn document_type_from_str_rejects_unknown() {
        assert!("Memo".parse::<DocumentType>().is_err());
        assert_eq!("SOP".parse::<DocumentType>().unwrap(), DocumentType::Sop);
    }

    #[test]
    fn frequency_uses_snake_case_wire_values() {
        let json = serde_json::to_string(&Frequency::PerShift).unwrap();
        assert_eq!(json, "\"per_shift\"");
    }
}
