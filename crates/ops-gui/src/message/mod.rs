//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions flow through these types into `App::update`.
//! Viewer interactions are grouped per document type so handlers stay
//! small and the root enum stays readable.

pub mod checklist;
pub mod equipment;
pub mod guide;
pub mod recipe;
pub mod sop;

pub use checklist::ChecklistMessage;
pub use equipment::EquipmentMessage;
pub use guide::GuideMessage;
pub use recipe::RecipeMessage;
pub use sop::SopMessage;

use crate::theme::ThemeMode;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// A document was picked in the sidebar. Replaces the viewer state,
    /// discarding any in-progress interaction state.
    DocumentSelected(String),

    /// Show/hide the navigation sidebar.
    SidebarToggled,

    // =========================================================================
    // Viewer interactions
    // =========================================================================
    Recipe(RecipeMessage),
    Sop(SopMessage),
    Checklist(ChecklistMessage),
    Equipment(EquipmentMessage),
    Guide(GuideMessage),

    // =========================================================================
    // Appearance
    // =========================================================================
    /// Theme mode picked in the header bar.
    ThemeModeSelected(ThemeMode),

    /// OS light/dark change (relevant in `ThemeMode::System`).
    SystemThemeChanged(iced::theme::Mode),

    /// No operation - placeholder for inert subscriptions.
    Noop,
}
