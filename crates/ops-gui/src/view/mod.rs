//! Views: the dispatcher, the five per-type viewers, the diagnostic
//! fallback, and the home shell.

pub mod checklist;
pub mod equipment;
pub mod fallback;
pub mod guide;
pub mod header;
pub mod home;
pub mod recipe;
pub mod sop;
mod steps;

pub use home::view_home;

use checklist::view_checklist;
use equipment::view_equipment;
use fallback::view_unknown;
use guide::view_guide;
use recipe::view_recipe;
use sop::view_sop;

use iced::Element;
use iced_fonts::lucide;

use ops_model::{DocumentType, OperationalDocument};

use crate::component::{EmptyState, card};
use crate::message::Message;
use crate::state::{AppState, ViewerState};

/// Lucide glyph for a document type (neutral file icon for unknown).
pub(crate) fn doc_type_icon<'a, M: 'a>(
    doc_type: Option<DocumentType>,
    size: f32,
) -> Element<'a, M> {
    match doc_type {
        Some(DocumentType::Recipe) => lucide::chef_hat().size(size).into(),
        Some(DocumentType::Sop) => lucide::clipboard_list().size(size).into(),
        Some(DocumentType::Checklist) => lucide::circle_check().size(size).into(),
        Some(DocumentType::Equipment) => lucide::settings().size(size).into(),
        Some(DocumentType::Guide) => lucide::book_open().size(size).into(),
        None => lucide::file_text().size(size).into(),
    }
}

/// Select the viewer for the current document.
///
/// Known discriminants are matched in fixed order (Recipe, SOP,
/// Checklist, Equipment, Guide); anything else lands in the diagnostic
/// fallback. A missing document renders a plain empty state.
pub fn view_document(state: &AppState) -> Element<'_, Message> {
    let Some(document) = state.selected_document() else {
        return card(
            EmptyState::new("No document selected")
                .icon(lucide::file_text().size(36))
                .description("Pick a document from the sidebar.")
                .view(),
        );
    };

    match (document, &state.viewer) {
        (OperationalDocument::Recipe(recipe), ViewerState::Recipe(ui)) => {
            view_recipe(document, recipe, ui)
        }
        (OperationalDocument::Sop(sop), ViewerState::Sop(ui)) => view_sop(document, sop, ui),
        (OperationalDocument::Checklist(checklist), ViewerState::Checklist(ui)) => {
            view_checklist(document, checklist, ui)
        }
        (OperationalDocument::Equipment(equipment), ViewerState::Equipment(ui)) => {
            view_equipment(document, equipment, ui)
        }
        (OperationalDocument::Guide(guide), ViewerState::Guide(ui)) => {
            view_guide(document, guide, ui)
        }
        (OperationalDocument::Unknown(unknown), _) => view_unknown(unknown),
        // Selection and viewer state are replaced together; reaching
        // this arm means an update was missed. Degrade visibly.
        _ => card(
            EmptyState::new("Viewer state out of sync")
                .icon(lucide::triangle_alert().size(36))
                .description("Reselect the document from the sidebar.")
                .view(),
        ),
    }
}
