//! Equipment viewer message handlers.

use iced::Task;

use crate::message::{EquipmentMessage, Message};
use crate::state::{AppState, ViewerState};

pub fn handle(state: &mut AppState, message: EquipmentMessage) -> Task<Message> {
    let ViewerState::Equipment(ui) = &mut state.viewer else {
        return Task::none();
    };

    match message {
        EquipmentMessage::TabSelected(tab) => ui.tab = tab,
        EquipmentMessage::ProgramToggled(index) => ui.toggle_program(index),
        EquipmentMessage::TroubleshootingToggled(index) => ui.toggle_troubleshooting(index),
    }
    Task::none()
}
