//! Recipe viewer message handlers.

use iced::Task;

use crate::message::{Message, RecipeMessage};
use crate::state::{AppState, ViewerState};

pub fn handle(state: &mut AppState, message: RecipeMessage) -> Task<Message> {
    let ViewerState::Recipe(ui) = &mut state.viewer else {
        return Task::none();
    };

    match message {
        RecipeMessage::TabSelected(tab) => ui.tab = tab,
        RecipeMessage::ScaleChanged(scale) => ui.scale = scale,
        RecipeMessage::StepToggled(id) => ui.toggle_step(&id),
        RecipeMessage::ResetProgress => ui.reset(),
    }
    Task::none()
}
