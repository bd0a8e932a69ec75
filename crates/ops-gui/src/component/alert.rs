//! Alert component.
//!
//! Colored callout box with an icon, optional title, and body content.

use iced::widget::{column, container, row, text};
use iced::{Border, Element, Length};
use iced_fonts::lucide;

use crate::theme::{BORDER_RADIUS_MD, BORDER_WIDTH_THIN, SPACING_SM, colors};

/// Alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertVariant {
    Info,
    Success,
    Warning,
    Error,
}

/// A colored callout with icon and optional bold title.
pub fn alert<'a, M: 'a>(
    variant: AlertVariant,
    title: Option<&str>,
    content: impl Into<Element<'a, M>>,
) -> Element<'a, M> {
    let c = colors();
    let (accent, tint) = match variant {
        AlertVariant::Info => (c.status_info, c.status_info_light),
        AlertVariant::Success => (c.status_success, c.status_success_light),
        AlertVariant::Warning => (c.status_warning, c.status_warning_light),
        AlertVariant::Error => (c.status_error, c.status_error_light),
    };

    let icon = match variant {
        AlertVariant::Info => lucide::info(),
        AlertVariant::Success => lucide::circle_check(),
        AlertVariant::Warning => lucide::triangle_alert(),
        AlertVariant::Error => lucide::circle_x(),
    };
    let icon = container(icon.size(16)).style(move |_theme| container::Style {
        text_color: Some(accent),
        ..Default::default()
    });

    let mut body = column![].spacing(SPACING_SM / 2.0);
    if let Some(title) = title {
        body = body.push(text(title.to_string()).size(14).color(c.text_primary));
    }
    body = body.push(content.into());

    container(row![icon, body].spacing(SPACING_SM))
        .padding(SPACING_SM * 1.5)
        .width(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(tint.into()),
            border: Border {
                radius: BORDER_RADIUS_MD.into(),
                width: BORDER_WIDTH_THIN,
                color: iced::Color { a: 0.4, ..accent },
            },
            ..Default::default()
        })
        .into()
}
