//! Substructures shared across document variants.
//!
//! Steps, callouts, control points, evidence references, and the
//! confidence tiering rule all live here; the variant modules compose
//! them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{CalloutKind, TemperatureUnit};

/// Pointer back into the source material a document was extracted from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceRef {
    pub source_id: String,
    /// Page, timestamp, or section locator within the source.
    pub locator: String,
    pub note: Option<String>,
}

/// An inline highlighted note attached to a step or document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Callout {
    pub callout_type: CalloutKind,
    pub title: Option<String>,
    pub text: String,
}

/// Comparison operator of a critical control point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CcpOperator {
    #[serde(rename = ">=")]
    AtLeast,
    #[serde(rename = "<=")]
    AtMost,
    #[serde(rename = "=")]
    Exactly,
    #[serde(rename = "between")]
    Between,
}

impl fmt::Display for CcpOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtLeast => write!(f, "\u{2265}"),
            Self::AtMost => write!(f, "\u{2264}"),
            Self::Exactly => write!(f, "="),
            Self::Between => write!(f, "between"),
        }
    }
}

/// A critical control point: a numeric safety constraint on a step.
///
/// Example: internal temperature \u{2265} 74 C before holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// What is being measured ("internal temp", "hold time").
    pub metric: String,
    pub operator: CcpOperator,
    pub value: f64,
    pub unit: String,
    pub required: bool,
    pub note: Option<String>,
}

impl ControlPoint {
    /// Display form of the target, e.g. "\u{2265} 74 C".
    pub fn target_text(&self) -> String {
        format!("{} {} {}", self.operator, self.value, self.unit)
    }
}

/// A temperature with an optional unit, as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub value: Option<f64>,
    pub unit: Option<TemperatureUnit>,
}

impl Temperature {
    /// "180\u{b0}C" when a value is present.
    pub fn display(&self) -> Option<String> {
        let value = self.value?;
        let unit = self.unit.map(|u| u.to_string()).unwrap_or_default();
        Some(format!("{value}\u{b0}{unit}"))
    }
}

/// A tool or piece of smallware a procedure needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub tool_name: String,
    pub quantity: Option<u32>,
    pub notes: Option<String>,
}

/// One ordered step of a recipe or SOP.
///
/// `id` is unique within its document and is the join key for the
/// viewer's completion set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepCard {
    pub id: String,
    pub title: Option<String>,
    pub instruction: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    /// Rationale shown alongside the instruction.
    pub why_callout: Option<Callout>,
    /// Display-only duration metadata; never an active countdown.
    pub timer_seconds: Option<u32>,
    #[serde(default)]
    pub critical_control_points: Vec<ControlPoint>,
    #[serde(default)]
    pub media_refs: Vec<String>,
}

/// A symptom with causes, fix steps, and an escalation condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TroubleshootingItem {
    pub symptom: String,
    #[serde(default)]
    pub likely_causes: Vec<String>,
    pub fix_steps: Vec<String>,
    pub escalate_when: Option<String>,
}

/// Three-tier label derived from a document's confidence score.
///
/// High \u{2265} 0.8, Medium \u{2265} 0.6, else Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            Self::High
        } else if score >= 0.6 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_tier_boundaries() {
        assert_eq!(ConfidenceTier::from_score(0.8), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_score(0.79), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_score(0.6), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_score(0.59), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_score(0.0), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_score(1.0), ConfidenceTier::High);
    }

    #[test]
    fn ccp_operator_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&CcpOperator::AtLeast).unwrap(),
            "\">=\""
        );
        let parsed: CcpOperator = serde_json::from_str("\"between\"").unwrap();
        assert_eq!(parsed, CcpOperator::Between);
    }

    #[test]
    fn step_card_tolerates_absent_lists() {
        let step: StepCard = serde_json::from_str(
            r#"{"id": "s1", "instruction": "Sear both sides."}"#,
        )
        .unwrap();
        assert!(step.key_points.is_empty());
        assert!(step.critical_control_points.is_empty());
        assert!(step.timer_seconds.is_none());
    }
}
