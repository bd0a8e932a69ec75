//! Widget style functions.
//!
//! Style closures fetch the thread-local resolved colors, so they stay
//! correct across theme changes without captured state.

use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Vector};

use super::context::colors;
use super::spacing::{BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_WIDTH_MEDIUM, BORDER_WIDTH_THIN};

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button - main actions.
pub fn button_primary(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let c = colors();
    let base = Border {
        radius: BORDER_RADIUS_SM.into(),
        width: 0.0,
        color: Color::TRANSPARENT,
    };

    match status {
        button::Status::Active => button::Style {
            background: Some(c.accent_primary.into()),
            text_color: c.text_on_accent,
            border: base,
            shadow: Shadow {
                color: c.shadow,
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(c.accent_hover.into()),
            text_color: c.text_on_accent,
            border: base,
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(c.accent_pressed.into()),
            text_color: c.text_on_accent,
            border: base,
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(c.background_inset.into()),
            text_color: c.text_disabled,
            border: base,
            ..Default::default()
        },
    }
}

/// Secondary button - bordered, subtle background.
pub fn button_secondary(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let c = colors();
    let border = Border {
        radius: BORDER_RADIUS_SM.into(),
        width: BORDER_WIDTH_THIN,
        color: c.border_default,
    };

    match status {
        button::Status::Active => button::Style {
            background: Some(c.background_elevated.into()),
            text_color: c.text_secondary,
            border,
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(c.background_secondary.into()),
            text_color: c.text_secondary,
            border: Border {
                color: c.text_disabled,
                ..border
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(c.background_secondary.into()),
            text_color: c.text_secondary,
            border,
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(c.background_secondary.into()),
            text_color: c.text_disabled,
            border: Border {
                color: c.border_subtle,
                ..border
            },
            ..Default::default()
        },
    }
}

/// Ghost button - text only, tint on hover.
pub fn button_ghost(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let c = colors();
    let border = Border {
        radius: BORDER_RADIUS_SM.into(),
        width: 0.0,
        color: Color::TRANSPARENT,
    };
    let accent_light = Color {
        a: 0.12,
        ..c.accent_primary
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: c.accent_primary,
            border,
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(accent_light.into()),
            text_color: c.accent_primary,
            border,
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(
                Color {
                    a: 0.2,
                    ..c.accent_primary
                }
                .into(),
            ),
            text_color: c.accent_pressed,
            border,
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: c.text_disabled,
            border,
            ..Default::default()
        },
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Elevated card surface.
pub fn container_card(_theme: &iced::Theme) -> container::Style {
    let c = colors();
    container::Style {
        background: Some(c.background_elevated.into()),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: BORDER_WIDTH_THIN,
            color: c.border_default,
        },
        shadow: Shadow {
            color: c.shadow,
            offset: Vector::new(0.0, 1.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    }
}

/// Recessed inset area (code dumps, setting values).
pub fn container_inset(_theme: &iced::Theme) -> container::Style {
    let c = colors();
    container::Style {
        background: Some(c.background_inset.into()),
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: BORDER_WIDTH_THIN,
            color: c.border_subtle,
        },
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input.
pub fn text_input_default(_theme: &iced::Theme, status: text_input::Status) -> text_input::Style {
    text_input_with_border(status, None)
}

/// Text input with an error border (out-of-range numeric readings).
pub fn text_input_error(_theme: &iced::Theme, status: text_input::Status) -> text_input::Style {
    let c = colors();
    text_input_with_border(status, Some(c.status_error))
}

fn text_input_with_border(
    status: text_input::Status,
    border_override: Option<Color>,
) -> text_input::Style {
    let c = colors();
    let border_color = |fallback: Color| border_override.unwrap_or(fallback);

    match status {
        text_input::Status::Active => text_input::Style {
            background: c.background_elevated.into(),
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                width: BORDER_WIDTH_THIN,
                color: border_color(c.border_default),
            },
            icon: c.text_muted,
            placeholder: c.text_disabled,
            value: c.text_primary,
            selection: Color {
                a: 0.3,
                ..c.accent_primary
            },
        },
        text_input::Status::Hovered => text_input::Style {
            background: c.background_elevated.into(),
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                width: BORDER_WIDTH_THIN,
                color: border_color(c.text_disabled),
            },
            icon: c.text_muted,
            placeholder: c.text_disabled,
            value: c.text_primary,
            selection: Color {
                a: 0.3,
                ..c.accent_primary
            },
        },
        text_input::Status::Focused { .. } => text_input::Style {
            background: c.background_elevated.into(),
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                width: BORDER_WIDTH_MEDIUM,
                color: border_color(c.border_focused),
            },
            icon: c.text_muted,
            placeholder: c.text_disabled,
            value: c.text_primary,
            selection: Color {
                a: 0.3,
                ..c.accent_primary
            },
        },
        text_input::Status::Disabled => text_input::Style {
            background: c.background_secondary.into(),
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                width: BORDER_WIDTH_THIN,
                color: c.border_default,
            },
            icon: c.text_disabled,
            placeholder: c.text_disabled,
            value: c.text_muted,
            selection: c.border_subtle,
        },
    }
}
