//! Guide viewer message handlers.

use iced::Task;

use crate::message::{GuideMessage, Message};
use crate::state::{AppState, ViewerState};

pub fn handle(state: &mut AppState, message: GuideMessage) -> Task<Message> {
    let ViewerState::Guide(ui) = &mut state.viewer else {
        return Task::none();
    };

    match message {
        GuideMessage::TabSelected(tab) => ui.tab = tab,
        GuideMessage::FaqToggled(index) => ui.toggle_faq(index),
    }
    Task::none()
}
