//! Standard operating procedure documents.

use serde::{Deserialize, Serialize};

use crate::document::DocumentCore;
use crate::enums::Frequency;
use crate::shared::{Callout, StepCard, Tool, TroubleshootingItem};

/// Escalation contract: when to stop and who to call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Escalation {
    pub conditions: Vec<String>,
    pub actions: Vec<String>,
    pub contact_role: Option<String>,
}

/// A standard operating procedure document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sop {
    #[serde(flatten)]
    pub core: DocumentCore,

    pub steps: Vec<StepCard>,

    pub purpose: Option<String>,
    pub scope: Option<String>,
    pub when_to_use: Option<String>,
    pub category_path: Option<String>,
    pub station: Option<String>,
    pub role: Option<String>,
    pub frequency: Option<Frequency>,
    pub estimated_time_minutes: Option<u32>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub tools_required: Vec<Tool>,
    #[serde(default)]
    pub safety_warnings: Vec<Callout>,
    #[serde(default)]
    pub quality_checks: Vec<String>,
    #[serde(default)]
    pub common_mistakes: Vec<String>,
    #[serde(default)]
    pub hazards: Vec<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub troubleshooting: Vec<TroubleshootingItem>,
    pub escalation: Option<Escalation>,
}
