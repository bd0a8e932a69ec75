//! Metadata chips for the document header.

use iced::widget::{container, row, text};
use iced::Element;

use crate::theme::{SPACING_LG, SPACING_XS, colors};

/// "icon label: value" chip.
pub fn metadata_item<'a, M: 'a>(
    icon: impl Into<Element<'a, M>>,
    label: &str,
    value: impl Into<String>,
) -> Element<'a, M> {
    let c = colors();
    let icon = container(icon.into()).style(move |_theme| container::Style {
        text_color: Some(c.text_disabled),
        ..Default::default()
    });

    row![
        icon,
        text(format!("{label}:")).size(13).color(c.text_muted),
        text(value.into()).size(13).color(c.text_primary),
    ]
    .spacing(SPACING_XS + 2.0)
    .align_y(iced::Alignment::Center)
    .into()
}

/// Horizontal row of metadata chips.
pub fn metadata_row<'a, M: 'a>(items: Vec<Element<'a, M>>) -> Element<'a, M> {
    let mut row_el = row![].spacing(SPACING_LG).align_y(iced::Alignment::Center);
    for item in items {
        row_el = row_el.push(item);
    }
    row_el.into()
}
