//! SOP viewer message handlers.

use iced::Task;

use crate::message::{Message, SopMessage};
use crate::state::{AppState, ViewerState};

pub fn handle(state: &mut AppState, message: SopMessage) -> Task<Message> {
    let ViewerState::Sop(ui) = &mut state.viewer else {
        return Task::none();
    };

    match message {
        SopMessage::TabSelected(tab) => ui.tab = tab,
        SopMessage::StepToggled(id) => ui.toggle_step(&id),
        SopMessage::ResetProgress => ui.reset(),
        SopMessage::TroubleshootingToggled(index) => ui.toggle_troubleshooting(index),
    }
    Task::none()
}
