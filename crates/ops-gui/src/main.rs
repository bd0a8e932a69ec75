//! Line Ops Studio - Desktop viewer for operational documents.
//!
//! Renders recipes, SOPs, checklists, equipment guides, and reference
//! guides from the embedded demo collection as interactive views.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View).

use iced::Size;
use iced::window;

use ops_gui::app::App;

pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Line Ops Studio");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(1280.0, 800.0),
            min_size: Some(Size::new(1024.0, 600.0)),
            ..Default::default()
        })
        .run()
}
