//! Root application state.

use ops_fixtures::{DocumentLibrary, DocumentSummary};
use ops_model::OperationalDocument;

use crate::settings::Settings;
use crate::state::ViewerState;

/// Everything the application knows at runtime.
///
/// Documents are immutable inputs; the only mutable data is the
/// selection, the viewer's ephemeral UI state, and appearance settings.
#[derive(Debug)]
pub struct AppState {
    /// The static document collection.
    pub library: DocumentLibrary,
    /// Set when the embedded fixtures failed to parse at startup.
    pub load_error: Option<String>,

    /// Currently selected document id.
    pub selected_id: String,
    /// UI state of the selected document's viewer.
    pub viewer: ViewerState,
    /// Sidebar visibility.
    pub sidebar_open: bool,

    pub settings: Settings,
    /// Tracked from the OS for `ThemeMode::System`.
    pub system_is_dark: bool,
}

impl AppState {
    pub fn new(library: DocumentLibrary, load_error: Option<String>, settings: Settings) -> Self {
        let selected_id = library.first_id().unwrap_or_default().to_string();
        let viewer = ViewerState::for_document(library.get(&selected_id));
        Self {
            library,
            load_error,
            selected_id,
            viewer,
            sidebar_open: true,
            settings,
            system_is_dark: false,
        }
    }

    /// The selected document, if the id still resolves.
    pub fn selected_document(&self) -> Option<&OperationalDocument> {
        self.library.get(&self.selected_id)
    }

    /// Select a document and replace the viewer state, discarding any
    /// prior interaction state.
    pub fn select_document(&mut self, id: String) {
        self.viewer = ViewerState::for_document(self.library.get(&id));
        self.selected_id = id;
    }

    /// Sidebar entries in fixture order.
    pub fn summaries(&self) -> Vec<DocumentSummary> {
        self.library.summaries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let library = DocumentLibrary::load().expect("fixtures parse");
        AppState::new(library, None, Settings::default())
    }

    #[test]
    fn initial_selection_is_first_fixture() {
        let state = state();
        assert_eq!(state.selected_id, "recipe-seared-salmon");
        assert!(matches!(state.viewer, ViewerState::Recipe(_)));
    }

    #[test]
    fn selecting_a_document_resets_viewer_state() {
        let mut state = state();

        // Complete a recipe step, then navigate away and back.
        if let ViewerState::Recipe(ui) = &mut state.viewer {
            ui.toggle_step("step-1");
        }
        state.select_document("checklist-line-opening".to_string());
        assert!(matches!(state.viewer, ViewerState::Checklist(_)));

        state.select_document("recipe-seared-salmon".to_string());
        let ViewerState::Recipe(ui) = &state.viewer else {
            panic!("expected recipe viewer state");
        };
        assert!(ui.completed.is_empty());
    }

    #[test]
    fn unknown_id_yields_missing_viewer() {
        let mut state = state();
        state.select_document("not-a-document".to_string());
        assert!(matches!(state.viewer, ViewerState::Missing));
        assert!(state.selected_document().is_none());
    }

    #[test]
    fn memo_selection_yields_unknown_viewer() {
        let mut state = state();
        state.select_document("memo-walk-in-door".to_string());
        assert!(matches!(state.viewer, ViewerState::Unknown));
    }
}
