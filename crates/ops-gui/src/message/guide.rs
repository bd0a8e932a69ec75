//! Guide viewer messages.

use crate::state::GuideTab;

#[derive(Debug, Clone)]
pub enum GuideMessage {
    TabSelected(GuideTab),
    /// Expand/collapse one FAQ entry.
    FaqToggled(usize),
}
