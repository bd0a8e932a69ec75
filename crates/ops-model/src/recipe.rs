//! Recipe documents: ingredients, method steps, plating, and QC.

use serde::{Deserialize, Serialize};

use crate::document::DocumentCore;
use crate::enums::{CookingMode, Frequency};
use crate::shared::{StepCard, Temperature, Tool};

/// An amount with an optional unit ("250 g", "2 each").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub qty: Option<f64>,
    pub unit: Option<String>,
}

/// What one batch of the recipe produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeYield {
    pub amount: Option<f64>,
    pub unit: Option<String>,
}

/// One ingredient line, optionally grouped ("Sauce", "Garnish").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    pub group: Option<String>,
    /// Prep note ("brunoise", "picked").
    pub prep: Option<String>,
    pub per_portion: Option<Quantity>,
    pub per_batch: Option<Quantity>,
    pub notes: Option<String>,
}

/// Cooking parameters for one starting state (fresh/defrosted/frozen).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookingModeSpec {
    pub mode: CookingMode,
    pub time_minutes: Option<u32>,
    pub temperature: Option<Temperature>,
    pub equipment_program_code: Option<String>,
    pub notes: Option<String>,
}

/// Holding constraints after production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingRules {
    pub items: Vec<String>,
    pub reheat_allowed: Option<bool>,
}

/// Plating instructions with an optional reference photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatingGuide {
    pub bullets: Vec<String>,
    pub reference_image_ref: Option<String>,
}

/// A named group of quality-control cues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityCheckGroup {
    pub group_name: String,
    pub checks: Vec<QualityCheck>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityCheck {
    pub label: String,
    pub check_type: Option<QualityCheckKind>,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityCheckKind {
    Visual,
    Texture,
    PassFail,
    Measurement,
}

/// A recipe document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(flatten)]
    pub core: DocumentCore,

    #[serde(rename = "yield")]
    pub yield_spec: RecipeYield,
    pub ingredients: Vec<RecipeIngredient>,
    pub steps: Vec<StepCard>,

    pub category_path: Option<String>,
    pub station: Option<String>,
    pub role: Option<String>,
    pub frequency: Option<Frequency>,
    pub portion_size: Option<String>,
    pub prep_time_minutes: Option<u32>,
    pub cook_time_minutes: Option<u32>,
    pub shelf_life: Option<String>,
    pub holding_rules: Option<HoldingRules>,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub hazards: Vec<String>,
    #[serde(default)]
    pub tools_required: Vec<Tool>,
    #[serde(default)]
    pub cooking_modes: Vec<CookingModeSpec>,
    pub plating_guide: Option<PlatingGuide>,
    #[serde(default)]
    pub quality_checks: Vec<QualityCheckGroup>,
}

impl Recipe {
    /// Prep plus cook time, `None` when neither is recorded.
    pub fn total_time_minutes(&self) -> Option<u32> {
        match (self.prep_time_minutes, self.cook_time_minutes) {
            (None, None) => None,
            (prep, cook) => Some(prep.unwrap_or(0) + cook.unwrap_or(0)),
        }
    }
}
