//! Equipment guide documents: quick actions, programs, error codes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::document::DocumentCore;
use crate::enums::Frequency;
use crate::error::ModelError;
use crate::shared::{Callout, Temperature, TroubleshootingItem};

/// The closed set of quick-action slots on an equipment document.
///
/// Rendering walks [`ALL`](Self::ALL) in order and skips absent kinds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum QuickActionKind {
    Startup,
    Shutdown,
    CleaningDaily,
    CleaningWeekly,
    CleaningDeep,
    EmergencyStop,
}

impl QuickActionKind {
    /// All kinds in display order.
    pub const ALL: [QuickActionKind; 6] = [
        Self::Startup,
        Self::Shutdown,
        Self::CleaningDaily,
        Self::CleaningWeekly,
        Self::CleaningDeep,
        Self::EmergencyStop,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Startup => "Startup",
            Self::Shutdown => "Shutdown",
            Self::CleaningDaily => "Daily Cleaning",
            Self::CleaningWeekly => "Weekly Cleaning",
            Self::CleaningDeep => "Deep Cleaning",
            Self::EmergencyStop => "Emergency Stop",
        }
    }
}

impl fmt::Display for QuickActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for QuickActionKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "startup" => Ok(Self::Startup),
            "shutdown" => Ok(Self::Shutdown),
            "cleaning_daily" => Ok(Self::CleaningDaily),
            "cleaning_weekly" => Ok(Self::CleaningWeekly),
            "cleaning_deep" => Ok(Self::CleaningDeep),
            "emergency_stop" => Ok(Self::EmergencyStop),
            other => Err(ModelError::UnknownQuickActionKind(other.to_string())),
        }
    }
}

/// An ordered step list for one quick-action slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickAction {
    pub title: Option<String>,
    pub steps: Vec<String>,
    #[serde(default)]
    pub media_refs: Vec<String>,
}

/// A key/value pair on a program's control panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramSetting {
    pub key: String,
    pub value: String,
}

/// A stored machine program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentProgram {
    pub name: String,
    pub program_code: Option<String>,
    pub purpose: Option<String>,
    pub button_sequence: Vec<String>,
    #[serde(default)]
    pub settings: Vec<ProgramSetting>,
    pub time_minutes: Option<u32>,
    pub temperature: Option<Temperature>,
    #[serde(default)]
    pub common_mistakes: Vec<String>,
    #[serde(default)]
    pub verification: Vec<String>,
}

/// A panel error code with its meaning and first response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorCode {
    pub code: String,
    pub meaning: Option<String>,
    pub immediate_action: Option<String>,
}

/// A hazard/warning pair shown on the equipment info card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRisk {
    pub hazard: String,
    pub warning: String,
}

/// An equipment guide document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(flatten)]
    pub core: DocumentCore,

    #[serde(default)]
    pub quick_actions: BTreeMap<QuickActionKind, QuickAction>,

    pub machine_name: Option<String>,
    pub model_number: Option<String>,
    pub station: Option<String>,
    pub role: Option<String>,
    pub frequency: Option<Frequency>,
    #[serde(default)]
    pub safety_warnings: Vec<Callout>,
    #[serde(default)]
    pub risk_warnings: Vec<EquipmentRisk>,
    #[serde(default)]
    pub programs: Vec<EquipmentProgram>,
    #[serde(default)]
    pub error_codes: Vec<ErrorCode>,
    #[serde(default)]
    pub troubleshooting: Vec<TroubleshootingItem>,
}

impl Equipment {
    /// Quick actions present on this document, in the fixed kind order.
    pub fn ordered_quick_actions(&self) -> Vec<(QuickActionKind, &QuickAction)> {
        QuickActionKind::ALL
            .iter()
            .filter_map(|kind| self.quick_actions.get(kind).map(|a| (*kind, a)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(steps: &[&str]) -> QuickAction {
        QuickAction {
            title: None,
            steps: steps.iter().map(|s| (*s).to_string()).collect(),
            media_refs: Vec::new(),
        }
    }

    #[test]
    fn ordered_quick_actions_skips_absent_kinds() {
        let mut quick_actions = BTreeMap::new();
        quick_actions.insert(QuickActionKind::EmergencyStop, action(&["Hit the red button"]));
        quick_actions.insert(QuickActionKind::Startup, action(&["Power on", "Wait for preheat"]));

        let equipment = Equipment {
            core: crate::document::DocumentCore::test_stub("eq-1", "Combi Oven"),
            quick_actions,
            machine_name: None,
            model_number: None,
            station: None,
            role: None,
            frequency: None,
            safety_warnings: Vec::new(),
            risk_warnings: Vec::new(),
            programs: Vec::new(),
            error_codes: Vec::new(),
            troubleshooting: Vec::new(),
        };

        let ordered = equipment.ordered_quick_actions();
        assert_eq!(ordered.len(), 2);
        // Startup before EmergencyStop regardless of insertion order.
        assert_eq!(ordered[0].0, QuickActionKind::Startup);
        assert_eq!(ordered[1].0, QuickActionKind::EmergencyStop);
    }

    #[test]
    fn quick_action_kind_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&QuickActionKind::CleaningDeep).unwrap(),
            "\"cleaning_deep\""
        );
        assert_eq!(
            "emergency_stop".parse::<QuickActionKind>().unwrap(),
            QuickActionKind::EmergencyStop
        );
        assert!("defrost".parse::<QuickActionKind>().is_err());
    }
}
