//! Step number indicator.

use iced::widget::{container, text};
use iced::{Border, Element, Length};
use iced_fonts::lucide;

use crate::theme::{BORDER_WIDTH_MEDIUM, colors};

/// Circled step number; shows a check mark once complete.
pub fn step_indicator<'a, M: 'a>(number: usize, complete: bool) -> Element<'a, M> {
    let c = colors();
    let size = 36.0;

    let (border_color, background, content_color) = if complete {
        (
            c.status_success,
            c.status_success_light,
            c.status_success,
        )
    } else {
        (c.border_default, c.background_secondary, c.text_secondary)
    };

    let inner: Element<'a, M> = if complete {
        container(lucide::check().size(16))
            .style(move |_theme| container::Style {
                text_color: Some(content_color),
                ..Default::default()
            })
            .into()
    } else {
        text(number.to_string()).size(14).color(content_color).into()
    };

    container(inner)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .center_x(Length::Fixed(size))
        .center_y(Length::Fixed(size))
        .style(move |_theme| container::Style {
            background: Some(background.into()),
            border: Border {
                radius: (size / 2.0).into(),
                width: BORDER_WIDTH_MEDIUM,
                color: border_color,
            },
            ..Default::default()
        })
        .into()
}
