//! Diagnostic fallback for unrecognized document types.
//!
//! Not an error screen: the document renders as its unrecognized type
//! string plus a pretty-printed dump of the raw value, so unknown data
//! degrades visibly instead of failing.

use iced::widget::{column, container, scrollable, text};
use iced::{Element, Font, Length};
use iced_fonts::lucide;

use ops_model::UnknownDocument;

use crate::component::card;
use crate::message::Message;
use crate::theme::{SPACING_MD, SPACING_SM, colors, container_inset};

pub fn view_unknown(document: &UnknownDocument) -> Element<'_, Message> {
    let c = colors();
    let type_str = document.type_str().unwrap_or("(missing)");

    let dump = container(
        scrollable(
            text(document.pretty_dump())
                .size(12)
                .font(Font::MONOSPACE)
                .color(c.text_secondary),
        )
        .width(Length::Fill),
    )
    .padding(SPACING_MD)
    .width(Length::Fill)
    .max_height(420.0)
    .style(container_inset);

    card(
        column![
            container(lucide::file_text().size(40)).style(move |_theme| container::Style {
                text_color: Some(c.text_disabled),
                ..Default::default()
            }),
            text("Unknown Document Type").size(18).color(c.text_primary),
            text(format!("Document type \"{type_str}\" is not supported."))
                .size(14)
                .color(c.text_muted),
            dump,
        ]
        .spacing(SPACING_SM)
        .align_x(iced::Alignment::Center),
    )
}
