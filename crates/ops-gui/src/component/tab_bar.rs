//! Tab bar navigation component.
//!
//! Horizontal tab row with the active tab highlighted.

use iced::widget::{button, container, row, text};
use iced::{Border, Color, Element, Length};

use crate::theme::{BORDER_WIDTH_THIN, TAB_PADDING_X, TAB_PADDING_Y, colors};

/// A tab item for the tab bar.
pub struct Tab<M> {
    pub label: String,
    pub message: M,
}

impl<M> Tab<M> {
    pub fn new(label: impl Into<String>, message: M) -> Self {
        Self {
            label: label.into(),
            message,
        }
    }
}

/// Creates a horizontal tab bar with the tab at `active_index`
/// highlighted.
pub fn tab_bar<'a, M: Clone + 'a>(tabs: Vec<Tab<M>>, active_index: usize) -> Element<'a, M> {
    let c = colors();
    let accent_light = Color {
        a: 0.12,
        ..c.accent_primary
    };

    let mut tab_row = row![].spacing(0);

    for (index, tab) in tabs.into_iter().enumerate() {
        let is_active = index == active_index;
        let label_color = if is_active {
            c.accent_primary
        } else {
            c.text_muted
        };

        let tab_button = button(
            container(text(tab.label).size(14).color(label_color))
                .padding([TAB_PADDING_Y, TAB_PADDING_X]),
        )
        .on_press(tab.message)
        .style(move |_theme, status| {
            if is_active {
                button::Style {
                    background: Some(accent_light.into()),
                    text_color: c.accent_pressed,
                    border: Border::default(),
                    ..Default::default()
                }
            } else {
                let bg = match status {
                    button::Status::Hovered => Some(c.background_secondary.into()),
                    _ => None,
                };
                button::Style {
                    background: bg,
                    text_color: c.text_muted,
                    border: Border::default(),
                    ..Default::default()
                }
            }
        });

        tab_row = tab_row.push(tab_button);
    }

    container(tab_row)
        .width(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(c.background_elevated.into()),
            border: Border {
                color: c.border_default,
                width: BORDER_WIDTH_THIN,
                radius: 0.0.into(),
            },
            ..Default::default()
        })
        .into()
}
