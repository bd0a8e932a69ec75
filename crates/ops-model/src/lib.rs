pub mod checklist;
pub mod document;
pub mod enums;
pub mod equipment;
pub mod error;
pub mod guide;
pub mod recipe;
pub mod shared;
pub mod sop;

pub use checklist::{Checklist, ChecklistItem, EscalationRule, NumericField};
pub use document::{DocumentCore, OperationalDocument, UnknownDocument};
pub use enums::{
    CalloutKind, CookingMode, DocStatus, DocumentType, Frequency, GuideKind, ResponseType, Shift,
    TemperatureUnit,
};
pub use equipment::{
    Equipment, EquipmentProgram, EquipmentRisk, ErrorCode, ProgramSetting, QuickAction,
    QuickActionKind,
};
pub use error::{ModelError, Result};
pub use guide::{
    FaqItem, Guide, GuideSection, KeyValueField, LinkOut, ReferenceTable, ScenarioBlock,
    ScenarioVariant, VisualExample,
};
pub use recipe::{
    CookingModeSpec, HoldingRules, PlatingGuide, QualityCheck, QualityCheckGroup, Quantity, Recipe,
    RecipeIngredient, RecipeYield,
};
pub use shared::{
    Callout, CcpOperator, ConfidenceTier, ControlPoint, EvidenceRef, StepCard, Temperature, Tool,
    TroubleshootingItem,
};
pub use sop::{Escalation, Sop};
