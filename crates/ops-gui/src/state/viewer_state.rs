//! Per-viewer UI state.
//!
//! # Architecture
//!
//! Each document type gets its own UI state struct, and the current
//! one lives inside [`ViewerState`]. Selecting a document replaces the
//! whole `ViewerState`, which automatically discards completion sets,
//! typed values, and expansion flags - interaction state never outlives
//! the selection.
//!
//! All progress math recounts ids that exist in the current document,
//! so a stale id can never inflate the numbers.

use std::collections::{BTreeMap, BTreeSet};

use ops_model::checklist::ChecklistItem;
use ops_model::{Equipment, Guide, OperationalDocument, Sop, StepCard};

// =============================================================================
// PROGRESS MATH
// =============================================================================

/// Completion percentage, rounded. Zero trackable items is 0%, not NaN.
pub fn progress_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

// =============================================================================
// TABS
// =============================================================================

/// Tabs of the recipe viewer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RecipeTab {
    #[default]
    Overview,
    Ingredients,
    Method,
    Plating,
}

impl RecipeTab {
    pub const ALL: [RecipeTab; 4] = [
        Self::Overview,
        Self::Ingredients,
        Self::Method,
        Self::Plating,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Ingredients => "Ingredients",
            Self::Method => "Method",
            Self::Plating => "Plating & QC",
        }
    }
}

/// Tabs of the SOP viewer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SopTab {
    #[default]
    Steps,
    Details,
    Troubleshooting,
}

impl SopTab {
    pub const ALL: [SopTab; 3] = [Self::Steps, Self::Details, Self::Troubleshooting];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Steps => "Step by Step",
            Self::Details => "Details",
            Self::Troubleshooting => "Troubleshooting",
        }
    }
}

/// Tabs of the equipment viewer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentTab {
    #[default]
    QuickActions,
    Programs,
    Troubleshooting,
}

impl EquipmentTab {
    pub const ALL: [EquipmentTab; 3] = [
        Self::QuickActions,
        Self::Programs,
        Self::Troubleshooting,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::QuickActions => "Quick Actions",
            Self::Programs => "Programs",
            Self::Troubleshooting => "Troubleshooting",
        }
    }
}

/// Tabs of the guide viewer. Availability depends on document content.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GuideTab {
    #[default]
    Content,
    Tables,
    Scenarios,
    Faq,
}

impl GuideTab {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Content => "Content",
            Self::Tables => "Reference Tables",
            Self::Scenarios => "Scenarios",
            Self::Faq => "FAQ",
        }
    }

    /// The tab set for one guide, computed purely from the document:
    /// Content always, the rest only when their section is non-empty.
    pub fn available(guide: &Guide) -> Vec<GuideTab> {
        let mut tabs = vec![Self::Content];
        if !guide.reference_tables.is_empty() {
            tabs.push(Self::Tables);
        }
        if !guide.scenarios.is_empty() {
            tabs.push(Self::Scenarios);
        }
        if !guide.faq.is_empty() {
            tabs.push(Self::Faq);
        }
        tabs
    }
}

// =============================================================================
// BATCH SCALE
// =============================================================================

/// Closed set of recipe scale factors.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BatchScale {
    Half,
    #[default]
    Single,
    Double,
    Batch5,
    Batch10,
}

impl BatchScale {
    pub const ALL: [BatchScale; 5] = [
        Self::Half,
        Self::Single,
        Self::Double,
        Self::Batch5,
        Self::Batch10,
    ];

    pub fn factor(&self) -> f64 {
        match self {
            Self::Half => 0.5,
            Self::Single => 1.0,
            Self::Double => 2.0,
            Self::Batch5 => 5.0,
            Self::Batch10 => 10.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Half => "0.5\u{d7} (Half)",
            Self::Single => "1\u{d7} (Original)",
            Self::Double => "2\u{d7} (Double)",
            Self::Batch5 => "5\u{d7} (Batch)",
            Self::Batch10 => "10\u{d7} (Large Batch)",
        }
    }

    /// Short form for table headers: "5×".
    pub fn short_label(&self) -> &'static str {
        match self {
            Self::Half => "0.5\u{d7}",
            Self::Single => "1\u{d7}",
            Self::Double => "2\u{d7}",
            Self::Batch5 => "5\u{d7}",
            Self::Batch10 => "10\u{d7}",
        }
    }
}

impl std::fmt::Display for BatchScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// RECIPE UI STATE
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct RecipeUiState {
    pub tab: RecipeTab,
    pub scale: BatchScale,
    /// Completed step ids.
    pub completed: BTreeSet<String>,
}

impl RecipeUiState {
    pub fn toggle_step(&mut self, id: &str) {
        if !self.completed.remove(id) {
            self.completed.insert(id.to_string());
        }
    }

    pub fn reset(&mut self) {
        self.completed.clear();
    }

    /// Completed steps that exist in the current document.
    pub fn completed_count(&self, steps: &[StepCard]) -> usize {
        steps
            .iter()
            .filter(|step| self.completed.contains(&step.id))
            .count()
    }

    pub fn progress(&self, steps: &[StepCard]) -> u8 {
        progress_percent(self.completed_count(steps), steps.len())
    }
}

// =============================================================================
// SOP UI STATE
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct SopUiState {
    pub tab: SopTab,
    pub completed: BTreeSet<String>,
    /// One independent flag per troubleshooting entry.
    pub open_troubleshooting: Vec<bool>,
}

impl SopUiState {
    pub fn new(sop: &Sop) -> Self {
        Self {
            open_troubleshooting: vec![false; sop.troubleshooting.len()],
            ..Self::default()
        }
    }

    pub fn toggle_step(&mut self, id: &str) {
        if !self.completed.remove(id) {
            self.completed.insert(id.to_string());
        }
    }

    pub fn reset(&mut self) {
        self.completed.clear();
    }

    pub fn completed_count(&self, steps: &[StepCard]) -> usize {
        steps
            .iter()
            .filter(|step| self.completed.contains(&step.id))
            .count()
    }

    pub fn progress(&self, steps: &[StepCard]) -> u8 {
        progress_percent(self.completed_count(steps), steps.len())
    }

    pub fn toggle_troubleshooting(&mut self, index: usize) {
        if let Some(flag) = self.open_troubleshooting.get_mut(index) {
            *flag = !*flag;
        }
    }
}

// =============================================================================
// CHECKLIST UI STATE
// =============================================================================

/// Everything the user has entered against one checklist item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemResponse {
    pub checked: bool,
    /// Coerced numeric value; `None` until the field is first touched.
    pub value: Option<f64>,
    /// What the user actually typed, echoed back in the input.
    pub raw_value: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default)]
pub struct ChecklistUiState {
    /// Item id -> response. Only touched items have entries.
    pub responses: BTreeMap<String, ItemResponse>,
}

impl ChecklistUiState {
    pub fn toggle_item(&mut self, id: &str) {
        let response = self.responses.entry(id.to_string()).or_default();
        response.checked = !response.checked;
    }

    /// Store a numeric field edit.
    ///
    /// Invalid or empty input coerces to 0 before storing, matching the
    /// original widget's `parseFloat(input) || 0` exactly. The raw text
    /// is kept so the field shows what was typed.
    pub fn set_value(&mut self, id: &str, raw: String) {
        let coerced = raw.trim().parse::<f64>().unwrap_or(0.0);
        let response = self.responses.entry(id.to_string()).or_default();
        response.value = Some(coerced);
        response.raw_value = raw;
    }

    pub fn set_notes(&mut self, id: &str, notes: String) {
        let response = self.responses.entry(id.to_string()).or_default();
        response.notes = notes;
    }

    /// Clear every response unconditionally.
    pub fn reset(&mut self) {
        self.responses.clear();
    }

    pub fn response(&self, id: &str) -> Option<&ItemResponse> {
        self.responses.get(id)
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.responses.get(id).is_some_and(|r| r.checked)
    }

    /// Checked items that exist in the current document.
    pub fn completed_count(&self, items: &[ChecklistItem]) -> usize {
        items.iter().filter(|item| self.is_checked(&item.id)).count()
    }

    pub fn progress(&self, items: &[ChecklistItem]) -> u8 {
        progress_percent(self.completed_count(items), items.len())
    }

    /// Re-evaluated on every render: a touched numeric value outside
    /// the item's inclusive bounds.
    pub fn is_out_of_range(&self, item: &ChecklistItem) -> bool {
        let Some(field) = &item.numeric_field else {
            return false;
        };
        let Some(value) = self.responses.get(&item.id).and_then(|r| r.value) else {
            return false;
        };
        field.is_out_of_range(value)
    }
}

/// Group items by category, preserving first-seen category order.
/// Items without a category land under "General".
pub fn grouped_items(items: &[ChecklistItem]) -> Vec<(String, Vec<&ChecklistItem>)> {
    let mut groups: Vec<(String, Vec<&ChecklistItem>)> = Vec::new();
    for item in items {
        let category = item.category.as_deref().unwrap_or("General");
        match groups.iter_mut().find(|(name, _)| name == category) {
            Some((_, members)) => members.push(item),
            None => groups.push((category.to_string(), vec![item])),
        }
    }
    groups
}

// =============================================================================
// EQUIPMENT UI STATE
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct EquipmentUiState {
    pub tab: EquipmentTab,
    /// One independent flag per program card.
    pub expanded_programs: Vec<bool>,
    /// One independent flag per troubleshooting entry.
    pub open_troubleshooting: Vec<bool>,
}

impl EquipmentUiState {
    pub fn new(equipment: &Equipment) -> Self {
        Self {
            tab: EquipmentTab::default(),
            expanded_programs: vec![false; equipment.programs.len()],
            open_troubleshooting: vec![false; equipment.troubleshooting.len()],
        }
    }

    pub fn toggle_program(&mut self, index: usize) {
        if let Some(flag) = self.expanded_programs.get_mut(index) {
            *flag = !*flag;
        }
    }

    pub fn is_program_expanded(&self, index: usize) -> bool {
        self.expanded_programs.get(index).copied().unwrap_or(false)
    }

    pub fn toggle_troubleshooting(&mut self, index: usize) {
        if let Some(flag) = self.open_troubleshooting.get_mut(index) {
            *flag = !*flag;
        }
    }
}

// =============================================================================
// GUIDE UI STATE
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct GuideUiState {
    pub tab: GuideTab,
    /// One independent flag per FAQ entry.
    pub open_faq: Vec<bool>,
}

impl GuideUiState {
    pub fn new(guide: &Guide) -> Self {
        Self {
            tab: GuideTab::default(),
            open_faq: vec![false; guide.faq.len()],
        }
    }

    pub fn toggle_faq(&mut self, index: usize) {
        if let Some(flag) = self.open_faq.get_mut(index) {
            *flag = !*flag;
        }
    }
}

// =============================================================================
// VIEWER STATE
// =============================================================================

/// UI state of the currently selected document's viewer.
#[derive(Debug, Clone, Default)]
pub enum ViewerState {
    Recipe(RecipeUiState),
    Sop(SopUiState),
    Checklist(ChecklistUiState),
    Equipment(EquipmentUiState),
    Guide(GuideUiState),
    /// Unrecognized document type; the fallback view has no state.
    Unknown,
    /// Selected id resolved to nothing.
    #[default]
    Missing,
}

impl ViewerState {
    /// Fresh state for a newly selected document.
    pub fn for_document(document: Option<&OperationalDocument>) -> Self {
        match document {
            Some(OperationalDocument::Recipe(_)) => Self::Recipe(RecipeUiState::default()),
            Some(OperationalDocument::Sop(sop)) => Self::Sop(SopUiState::new(sop)),
            Some(OperationalDocument::Checklist(_)) => {
                Self::Checklist(ChecklistUiState::default())
            }
            Some(OperationalDocument::Equipment(equipment)) => {
                Self::Equipment(EquipmentUiState::new(equipment))
            }
            Some(OperationalDocument::Guide(guide)) => Self::Guide(GuideUiState::new(guide)),
            Some(OperationalDocument::Unknown(_)) => Self::Unknown,
            None => Self::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ops_model::checklist::NumericField;
    use ops_model::ResponseType;

    fn step(id: &str) -> StepCard {
        StepCard {
            id: id.to_string(),
            title: None,
            instruction: "do the thing".to_string(),
            key_points: Vec::new(),
            why_callout: None,
            timer_seconds: None,
            critical_control_points: Vec::new(),
            media_refs: Vec::new(),
        }
    }

    fn item(id: &str, category: Option<&str>) -> ChecklistItem {
        ChecklistItem {
            id: id.to_string(),
            label: format!("item {id}"),
            category: category.map(ToString::to_string),
            is_mandatory: false,
            response_type: ResponseType::Checkbox,
            numeric_field: None,
            photo_required: false,
            text_required: false,
            expected_value_text: None,
            fail_path_instruction: None,
            escalation_trigger: None,
            requires_signature: false,
            requires_initials: false,
        }
    }

    #[test]
    fn progress_percent_guards_zero_denominator() {
        assert_eq!(progress_percent(0, 0), 0);
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(2, 3), 67);
        assert_eq!(progress_percent(3, 3), 100);
    }

    #[test]
    fn double_toggle_is_idempotent() {
        let steps = [step("a"), step("b")];
        let mut ui = RecipeUiState::default();

        ui.toggle_step("a");
        assert_eq!(ui.completed_count(&steps), 1);
        ui.toggle_step("a");
        assert_eq!(ui.completed_count(&steps), 0);
    }

    #[test]
    fn progress_ignores_ids_not_in_document() {
        let steps = [step("a"), step("b"), step("c")];
        let mut ui = RecipeUiState::default();
        ui.toggle_step("a");
        ui.toggle_step("ghost-id");

        // Denominator and numerator both come from the document.
        assert_eq!(ui.completed_count(&steps), 1);
        assert_eq!(ui.progress(&steps), 33);
    }

    #[test]
    fn reset_clears_everything() {
        let steps = [step("a"), step("b")];
        let mut ui = SopUiState::default();
        ui.toggle_step("a");
        ui.toggle_step("b");
        assert_eq!(ui.progress(&steps), 100);

        ui.reset();
        assert_eq!(ui.completed_count(&steps), 0);
        assert_eq!(ui.progress(&steps), 0);
    }

    #[test]
    fn checklist_example_one_of_three() {
        let items = [item("c1", None), item("c2", None), item("c3", None)];
        let mut ui = ChecklistUiState::default();

        ui.toggle_item("c1");
        assert_eq!(ui.completed_count(&items), 1);
        assert_eq!(ui.progress(&items), 33);

        ui.reset();
        assert_eq!(ui.completed_count(&items), 0);
        assert_eq!(ui.progress(&items), 0);
    }

    #[test]
    fn invalid_numeric_input_coerces_to_zero() {
        let mut ui = ChecklistUiState::default();

        ui.set_value("c1", "3.5".to_string());
        assert_eq!(ui.response("c1").unwrap().value, Some(3.5));

        ui.set_value("c1", "abc".to_string());
        let response = ui.response("c1").unwrap();
        assert_eq!(response.value, Some(0.0));
        assert_eq!(response.raw_value, "abc");

        ui.set_value("c1", String::new());
        assert_eq!(ui.response("c1").unwrap().value, Some(0.0));
    }

    #[test]
    fn value_edits_do_not_affect_checked_state() {
        let items = [item("c1", None)];
        let mut ui = ChecklistUiState::default();

        ui.set_value("c1", "4".to_string());
        assert_eq!(ui.completed_count(&items), 0);

        ui.toggle_item("c1");
        ui.set_value("c1", "5".to_string());
        assert_eq!(ui.completed_count(&items), 1);
    }

    #[test]
    fn out_of_range_tracks_the_latest_input() {
        let mut reading = item("t1", Some("Temperatures"));
        reading.response_type = ResponseType::Temperature;
        reading.numeric_field = Some(NumericField {
            label: "temp".to_string(),
            unit: Some("C".to_string()),
            min: Some(0.0),
            max: Some(5.0),
            target: None,
            target_text: None,
        });

        let mut ui = ChecklistUiState::default();
        // Untouched: not out of range.
        assert!(!ui.is_out_of_range(&reading));

        ui.set_value("t1", "5".to_string());
        assert!(!ui.is_out_of_range(&reading));

        ui.set_value("t1", "7.2".to_string());
        assert!(ui.is_out_of_range(&reading));

        ui.set_value("t1", "4".to_string());
        assert!(!ui.is_out_of_range(&reading));
    }

    #[test]
    fn grouping_preserves_first_seen_order_with_general_default() {
        let items = [
            item("1", Some("Temperatures")),
            item("2", None),
            item("3", Some("Setup")),
            item("4", Some("Temperatures")),
            item("5", None),
        ];

        let groups = grouped_items(&items);
        let names: Vec<&str> = groups.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["Temperatures", "General", "Setup"]);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].1.len(), 2);
    }

    #[test]
    fn guide_tab_bar_collapses_to_content_only() {
        let guide: Guide = serde_json::from_value(serde_json::json!({
            "id": "g", "title": "G", "status": "published", "version": "1",
            "created_at": "2025-01-01T00:00:00Z", "updated_at": "2025-01-01T00:00:00Z",
            "owner_user_id": "u", "confidence_score": 0.9,
            "sections": [{"title": "One", "bullets": ["a"]}]
        }))
        .unwrap();

        assert_eq!(GuideTab::available(&guide), [GuideTab::Content]);

        let mut with_faq = guide.clone();
        with_faq.faq.push(ops_model::FaqItem {
            question: "Q".to_string(),
            answer: "A".to_string(),
            evidence: Vec::new(),
        });
        assert_eq!(
            GuideTab::available(&with_faq),
            [GuideTab::Content, GuideTab::Faq]
        );
    }

    #[test]
    fn program_expansion_flags_are_independent() {
        let mut ui = EquipmentUiState {
            tab: EquipmentTab::Programs,
            expanded_programs: vec![false; 3],
            open_troubleshooting: Vec::new(),
        };

        ui.toggle_program(1);
        assert!(!ui.is_program_expanded(0));
        assert!(ui.is_program_expanded(1));
        assert!(!ui.is_program_expanded(2));

        // Out-of-bounds toggles are ignored.
        ui.toggle_program(9);
        assert_eq!(ui.expanded_programs, vec![false, true, false]);
    }
}
