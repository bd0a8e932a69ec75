//! Sidebar navigation component.
//!
//! Vertical list of document entries: tinted type icon, title, and a
//! type caption, with the active entry highlighted.

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Border, Color, Element, Length};

use crate::theme::{
    BORDER_RADIUS_LG, BORDER_RADIUS_SM, BORDER_WIDTH_THIN, SIDEBAR_WIDTH, SPACING_SM, SPACING_XS,
    colors,
};

/// One sidebar entry.
pub struct SidebarItem<'a, M> {
    pub label: String,
    pub caption: String,
    pub accent: Color,
    pub icon: Element<'a, M>,
    pub message: M,
}

impl<'a, M> SidebarItem<'a, M> {
    pub fn new(
        label: impl Into<String>,
        caption: impl Into<String>,
        accent: Color,
        icon: impl Into<Element<'a, M>>,
        message: M,
    ) -> Self {
        Self {
            label: label.into(),
            caption: caption.into(),
            accent,
            icon: icon.into(),
            message,
        }
    }
}

/// Vertical document navigation list.
pub fn sidebar<'a, M: Clone + 'a>(
    header: Element<'a, M>,
    items: Vec<SidebarItem<'a, M>>,
    active_index: Option<usize>,
) -> Element<'a, M> {
    let c = colors();
    let accent_light = Color {
        a: 0.12,
        ..c.accent_primary
    };

    let mut item_column = column![].spacing(SPACING_XS);

    for (index, item) in items.into_iter().enumerate() {
        let is_active = active_index == Some(index);
        let item_accent = item.accent;
        let icon_tile = container(item.icon)
            .width(Length::Fixed(32.0))
            .height(Length::Fixed(32.0))
            .center_x(Length::Fixed(32.0))
            .center_y(Length::Fixed(32.0))
            .style(move |_theme| container::Style {
                background: Some(
                    Color {
                        a: 0.12,
                        ..item_accent
                    }
                    .into(),
                ),
                text_color: Some(item_accent),
                border: Border {
                    radius: BORDER_RADIUS_LG.into(),
                    ..Default::default()
                },
                ..Default::default()
            });

        let labels = column![
            text(item.label).size(14).color(if is_active {
                c.accent_pressed
            } else {
                c.text_primary
            }),
            text(item.caption).size(11).color(c.text_muted),
        ]
        .spacing(1.0);

        let item_button = button(
            row![icon_tile, labels]
                .spacing(SPACING_SM + 2.0)
                .align_y(iced::Alignment::Center),
        )
        .on_press(item.message)
        .width(Length::Fill)
        .padding([6.0, SPACING_SM])
        .style(move |_theme, status| {
            if is_active {
                button::Style {
                    background: Some(accent_light.into()),
                    text_color: c.accent_pressed,
                    border: Border {
                        radius: BORDER_RADIUS_SM.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            } else {
                let bg = match status {
                    button::Status::Hovered => Some(c.background_secondary.into()),
                    _ => None,
                };
                button::Style {
                    background: bg,
                    text_color: c.text_primary,
                    border: Border {
                        radius: BORDER_RADIUS_SM.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            }
        });

        item_column = item_column.push(item_button);
    }

    container(
        column![
            container(header).padding(SPACING_SM),
            scrollable(container(item_column).padding(SPACING_SM)).height(Length::Fill),
            Space::new().height(SPACING_SM),
        ]
        .spacing(0),
    )
    .width(Length::Fixed(SIDEBAR_WIDTH))
    .height(Length::Fill)
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
