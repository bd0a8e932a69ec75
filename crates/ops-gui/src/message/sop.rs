//! SOP viewer messages.

use crate::state::SopTab;

#[derive(Debug, Clone)]
pub enum SopMessage {
    TabSelected(SopTab),
    StepToggled(String),
    ResetProgress,
    /// Expand/collapse one troubleshooting entry.
    TroubleshootingToggled(usize),
}
