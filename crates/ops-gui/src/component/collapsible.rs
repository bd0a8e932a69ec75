//! Collapsible section.
//!
//! The one interactive primitive: a header button that shows or hides
//! its body. The open flag lives in the owning viewer's UI state and
//! arrives here as a plain bool with a toggle message.

use iced::widget::{Space, button, column, container, row};
use iced::{Border, Element, Length, Padding};
use iced_fonts::lucide;

use crate::theme::{BORDER_RADIUS_MD, BORDER_WIDTH_THIN, SPACING_MD, SPACING_SM, colors};

/// A bordered box whose body renders only while open.
pub fn collapsible<'a, M: Clone + 'a>(
    header: impl Into<Element<'a, M>>,
    open: bool,
    on_toggle: M,
    body: impl Into<Element<'a, M>>,
) -> Element<'a, M> {
    let c = colors();

    let chevron = if open {
        lucide::chevron_up()
    } else {
        lucide::chevron_down()
    };
    let chevron = container(chevron.size(16)).style(move |_theme| container::Style {
        text_color: Some(c.text_muted),
        ..Default::default()
    });

    let header_button = button(
        row![
            header.into(),
            Space::new().width(Length::Fill),
            chevron,
        ]
        .align_y(iced::Alignment::Center),
    )
    .on_press(on_toggle)
    .width(Length::Fill)
    .padding(SPACING_MD)
    .style(move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => Some(c.background_secondary.into()),
            _ => None,
        };
        button::Style {
            background: bg,
            text_color: c.text_primary,
            border: Border {
                radius: BORDER_RADIUS_MD.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    let mut content = column![header_button];
    if open {
        content = content.push(
            container(body.into()).padding(Padding::new(SPACING_MD).top(SPACING_SM)),
        );
    }

    container(content)
        .width(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(c.background_elevated.into()),
            border: Border {
                radius: BORDER_RADIUS_MD.into(),
                width: BORDER_WIDTH_THIN,
                color: c.border_default,
            },
            ..Default::default()
        })
        .into()
}
