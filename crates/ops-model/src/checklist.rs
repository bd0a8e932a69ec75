//! Checklist documents and their per-item response contracts.

use serde::{Deserialize, Serialize};

use crate::document::DocumentCore;
use crate::enums::{Frequency, ResponseType, Shift};

/// Numeric entry spec for number/temperature items.
///
/// A value is out of range iff it falls outside the inclusive
/// `[min, max]` interval where either bound is defined. Boundary values
/// are in range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericField {
    pub label: String,
    pub unit: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub target: Option<f64>,
    pub target_text: Option<String>,
}

impl NumericField {
    /// Inclusive range check against whichever bounds are present.
    pub fn is_out_of_range(&self, value: f64) -> bool {
        if let Some(min) = self.min
            && value < min
        {
            return true;
        }
        if let Some(max) = self.max
            && value > max
        {
            return true;
        }
        false
    }
}

/// One checklist line item.
///
/// `id` is unique within the document and keys the viewer's response map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub label: String,
    pub category: Option<String>,
    pub is_mandatory: bool,
    pub response_type: ResponseType,
    pub numeric_field: Option<NumericField>,
    #[serde(default)]
    pub photo_required: bool,
    #[serde(default)]
    pub text_required: bool,
    pub expected_value_text: Option<String>,
    /// What to do when the reading is out of range.
    pub fail_path_instruction: Option<String>,
    pub escalation_trigger: Option<String>,
    #[serde(default)]
    pub requires_signature: bool,
    #[serde(default)]
    pub requires_initials: bool,
}

/// Document-level escalation rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscalationRule {
    pub condition: String,
    pub action: String,
    #[serde(default)]
    pub notify_roles: Vec<String>,
}

/// A checklist document. `frequency` is required at the document level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    #[serde(flatten)]
    pub core: DocumentCore,

    pub frequency: Frequency,
    pub items: Vec<ChecklistItem>,

    pub department: Option<String>,
    pub station: Option<String>,
    pub role: Option<String>,
    pub shift: Option<Shift>,
    #[serde(default)]
    pub requires_signature: bool,
    #[serde(default)]
    pub escalation_rules: Vec<EscalationRule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(min: Option<f64>, max: Option<f64>) -> NumericField {
        NumericField {
            label: "temp".to_string(),
            unit: Some("\u{b0}C".to_string()),
            min,
            max,
            target: None,
            target_text: None,
        }
    }

    #[test]
    fn out_of_range_is_inclusive_at_bounds() {
        let field = bounds(Some(2.0), Some(5.0));
        assert!(!field.is_out_of_range(2.0));
        assert!(!field.is_out_of_range(5.0));
        assert!(!field.is_out_of_range(3.5));
        assert!(field.is_out_of_range(1.9));
        assert!(field.is_out_of_range(5.1));
    }

    #[test]
    fn out_of_range_with_single_bound() {
        let min_only = bounds(Some(0.0), None);
        assert!(min_only.is_out_of_range(-0.1));
        assert!(!min_only.is_out_of_range(1000.0));

        let max_only = bounds(None, Some(8.0));
        assert!(max_only.is_out_of_range(8.5));
        assert!(!max_only.is_out_of_range(-40.0));
    }

    #[test]
    fn no_bounds_means_never_out_of_range() {
        let field = bounds(None, None);
        assert!(!field.is_out_of_range(f64::MAX));
        assert!(!field.is_out_of_range(f64::MIN));
    }
}
