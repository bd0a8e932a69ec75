//! Main application module.
//!
//! Implements the Iced 0.14 application using the builder pattern. The
//! architecture follows the Elm pattern: State → Message → Update →
//! View.
//!
//! All state changes happen in `update()`; views are pure functions of
//! the state. The only subscription is the OS theme change signal - the
//! viewers themselves are entirely event-driven with no timers.

mod handler;

use iced::{Element, Subscription, Task, Theme};

use ops_fixtures::DocumentLibrary;

use crate::message::Message;
use crate::settings::Settings;
use crate::state::AppState;
use crate::theme::{ThemeMode, app_theme, set_theme};
use crate::view::view_home;

/// Root of the Iced application.
pub struct App {
    pub state: AppState,
}

impl App {
    /// Called once at startup: load settings, parse the embedded
    /// document collection, and resolve the initial theme.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();

        let (library, load_error) = match DocumentLibrary::load() {
            Ok(library) => {
                tracing::info!("Loaded {} embedded documents", library.len());
                (library, None)
            }
            Err(err) => {
                tracing::error!("Embedded documents failed to load: {err}");
                (DocumentLibrary::default(), Some(err.to_string()))
            }
        };

        set_theme(settings.theme_mode, false);

        let state = AppState::new(library, load_error, settings);
        (Self { state }, Task::none())
    }

    /// All state changes happen here, synchronously; the last update
    /// wins.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DocumentSelected(id) => {
                self.state.select_document(id);
                Task::none()
            }

            Message::SidebarToggled => {
                self.state.sidebar_open = !self.state.sidebar_open;
                Task::none()
            }

            Message::Recipe(msg) => handler::recipe::handle(&mut self.state, msg),
            Message::Sop(msg) => handler::sop::handle(&mut self.state, msg),
            Message::Checklist(msg) => handler::checklist::handle(&mut self.state, msg),
            Message::Equipment(msg) => handler::equipment::handle(&mut self.state, msg),
            Message::Guide(msg) => handler::guide::handle(&mut self.state, msg),

            Message::ThemeModeSelected(mode) => {
                self.state.settings.theme_mode = mode;
                set_theme(mode, self.state.system_is_dark);
                self.state.settings.save();
                Task::none()
            }

            Message::SystemThemeChanged(mode) => {
                self.state.system_is_dark = matches!(mode, iced::theme::Mode::Dark);
                if self.state.settings.theme_mode == ThemeMode::System {
                    set_theme(ThemeMode::System, self.state.system_is_dark);
                }
                Task::none()
            }

            Message::Noop => Task::none(),
        }
    }

    /// Pure render of the current state.
    pub fn view(&self) -> Element<'_, Message> {
        view_home(&self.state)
    }

    pub fn title(&self) -> String {
        match self.state.selected_document() {
            Some(document) => format!("{} - Line Ops Studio", document.title()),
            None => "Line Ops Studio".to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        app_theme(self.state.settings.theme_mode, self.state.system_is_dark)
    }

    /// OS theme changes only; no timers drive any behavior.
    pub fn subscription(&self) -> Subscription<Message> {
        iced::system::theme_changes().map(Message::SystemThemeChanged)
    }
}
