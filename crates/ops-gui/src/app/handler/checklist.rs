//! Checklist viewer message handlers.

use iced::Task;

use crate::message::{ChecklistMessage, Message};
use crate::state::{AppState, ViewerState};

pub fn handle(state: &mut AppState, message: ChecklistMessage) -> Task<Message> {
    let ViewerState::Checklist(ui) = &mut state.viewer else {
        return Task::none();
    };

    match message {
        ChecklistMessage::ItemToggled(id) => ui.toggle_item(&id),
        ChecklistMessage::ValueChanged(id, raw) => ui.set_value(&id, raw),
        ChecklistMessage::NotesChanged(id, notes) => ui.set_notes(&id, notes),
        ChecklistMessage::ResetAll => ui.reset(),
    }
    Task::none()
}
