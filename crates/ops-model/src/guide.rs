//! Reference guide documents: sections, tables, scenarios, FAQ.

use serde::{Deserialize, Serialize};

use crate::document::DocumentCore;
use crate::enums::{Frequency, GuideKind};
use crate::shared::{Callout, EvidenceRef};

/// A titled bullet-list section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideSection {
    pub title: String,
    pub bullets: Vec<String>,
}

/// A headers-plus-rows matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub notes: Option<String>,
}

/// One variant card inside a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioVariant {
    pub label: String,
    pub fields: Vec<KeyValueField>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValueField {
    pub key: String,
    pub value: String,
}

/// A scenario comparing several variant cards side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioBlock {
    pub title: String,
    pub description: Option<String>,
    pub variants: Vec<ScenarioVariant>,
}

/// A paired good/bad image reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualExample {
    pub title: String,
    pub good_image_ref: Option<String>,
    pub bad_image_ref: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub evidence: Vec<EvidenceRef>,
}

/// A cross-reference to another operational document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkOut {
    pub target_doc_type: String,
    pub title_hint: String,
    pub category_path_hint: Option<String>,
    pub reason: Option<String>,
}

/// A reference guide document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    #[serde(flatten)]
    pub core: DocumentCore,

    #[serde(default)]
    pub sections: Vec<GuideSection>,

    pub kind: Option<GuideKind>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub category_path: Option<String>,
    pub station: Option<String>,
    pub role: Option<String>,
    pub frequency: Option<Frequency>,
    pub overview: Option<String>,
    pub overview_callout: Option<Callout>,
    #[serde(default)]
    pub reference_tables: Vec<ReferenceTable>,
    #[serde(default)]
    pub scenarios: Vec<ScenarioBlock>,
    #[serde(default)]
    pub visual_examples: Vec<VisualExample>,
    #[serde(default)]
    pub faq: Vec<FaqItem>,
    #[serde(default)]
    pub links_out: Vec<LinkOut>,
}
