//! Recipe viewer messages.

use crate::state::{BatchScale, RecipeTab};

#[derive(Debug, Clone)]
pub enum RecipeMessage {
    TabSelected(RecipeTab),
    /// Batch scale picked in the scale selector.
    ScaleChanged(BatchScale),
    /// Mark/unmark one method step by id.
    StepToggled(String),
    /// Clear all step completion.
    ResetProgress,
}
