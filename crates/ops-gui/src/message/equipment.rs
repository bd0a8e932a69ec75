//! Equipment viewer messages.

use crate::state::EquipmentTab;

#[derive(Debug, Clone)]
pub enum EquipmentMessage {
    TabSelected(EquipmentTab),
    /// Expand/collapse one program card (independent per card).
    ProgramToggled(usize),
    /// Expand/collapse one troubleshooting entry.
    TroubleshootingToggled(usize),
}
