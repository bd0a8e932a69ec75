//! Application state management.
//!
//! - **AppState**: root state (library, selection, appearance)
//! - **ViewerState**: per-document-type UI state, replaced wholesale on
//!   navigation so interaction state never leaks across documents

mod app_state;
mod viewer_state;

pub use app_state::AppState;
pub use viewer_state::{
    BatchScale, ChecklistUiState, EquipmentTab, EquipmentUiState, GuideTab, GuideUiState,
    ItemResponse, RecipeTab, RecipeUiState, SopTab, SopUiState, ViewerState, grouped_items,
    progress_percent,
};
