//! Badge components.
//!
//! Pill-shaped labels driven by a closed variant enum, plus a tinted
//! variant for document-type accents.

use iced::widget::{container, row, text};
use iced::{Border, Color, Element};

use crate::theme::{BORDER_RADIUS_FULL, BORDER_WIDTH_THIN, colors};

/// Visual variant of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Success,
    Warning,
    Error,
    Info,
    Neutral,
    /// Transparent with a border, for low-emphasis tags.
    Outline,
}

fn badge_colors(variant: BadgeVariant) -> (Color, Option<Color>, Option<Color>) {
    let c = colors();
    // (text, background, border)
    match variant {
        BadgeVariant::Success => (c.status_success, Some(c.status_success_light), None),
        BadgeVariant::Warning => (c.status_warning, Some(c.status_warning_light), None),
        BadgeVariant::Error => (c.status_error, Some(c.status_error_light), None),
        BadgeVariant::Info => (c.status_info, Some(c.status_info_light), None),
        BadgeVariant::Neutral => (c.text_secondary, Some(c.background_inset), None),
        BadgeVariant::Outline => (c.text_muted, None, Some(c.border_default)),
    }
}

/// A pill badge.
pub fn badge<'a, M: 'a>(label: impl Into<String>, variant: BadgeVariant) -> Element<'a, M> {
    let (text_color, background, border) = badge_colors(variant);

    container(text(label.into()).size(12).color(text_color))
        .padding([3.0, 10.0])
        .style(move |_theme| container::Style {
            background: background.map(Into::into),
            border: Border {
                radius: BORDER_RADIUS_FULL.into(),
                width: if border.is_some() { BORDER_WIDTH_THIN } else { 0.0 },
                color: border.unwrap_or(Color::TRANSPARENT),
            },
            ..Default::default()
        })
        .into()
}

/// A pill badge with an icon before the label.
pub fn badge_with_icon<'a, M: 'a>(
    icon: impl Into<Element<'a, M>>,
    label: impl Into<String>,
    variant: BadgeVariant,
) -> Element<'a, M> {
    let (text_color, background, border) = badge_colors(variant);

    let icon_el = container(icon.into()).style(move |_theme| container::Style {
        text_color: Some(text_color),
        ..Default::default()
    });

    container(
        row![icon_el, text(label.into()).size(12).color(text_color)]
            .spacing(5.0)
            .align_y(iced::Alignment::Center),
    )
    .padding([3.0, 10.0])
    .style(move |_theme| container::Style {
        background: background.map(Into::into),
        border: Border {
            radius: BORDER_RADIUS_FULL.into(),
            width: if border.is_some() { BORDER_WIDTH_THIN } else { 0.0 },
            color: border.unwrap_or(Color::TRANSPARENT),
        },
        ..Default::default()
    })
    .into()
}

/// A badge tinted from an arbitrary accent color (document types).
pub fn tinted_badge<'a, M: 'a>(label: impl Into<String>, accent: Color) -> Element<'a, M> {
    let tint = Color { a: 0.12, ..accent };

    container(text(label.into()).size(12).color(accent))
        .padding([3.0, 10.0])
        .style(move |_theme| container::Style {
            background: Some(tint.into()),
            border: Border {
                radius: BORDER_RADIUS_FULL.into(),
                width: BORDER_WIDTH_THIN,
                color: Color { a: 0.35, ..accent },
            },
            ..Default::default()
        })
        .into()
}
