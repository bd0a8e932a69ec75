//! Empty state placeholder.

use iced::widget::{column, container, text};
use iced::{Element, Length};

use crate::theme::{SPACING_SM, SPACING_XL, colors};

/// Centered icon + title + optional description, for sections with
/// nothing to show.
pub struct EmptyState<'a, M> {
    icon: Option<Element<'a, M>>,
    title: String,
    description: Option<String>,
}

impl<'a, M: 'a> EmptyState<'a, M> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            icon: None,
            title: title.into(),
            description: None,
        }
    }

    pub fn icon(mut self, icon: impl Into<Element<'a, M>>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn view(self) -> Element<'a, M> {
        let c = colors();
        let Self {
            icon,
            title,
            description,
        } = self;

        let mut content = column![]
            .spacing(SPACING_SM)
            .align_x(iced::Alignment::Center);
        if let Some(icon) = icon {
            content = content.push(
                container(icon).style(move |_theme| container::Style {
                    text_color: Some(c.text_disabled),
                    ..Default::default()
                }),
            );
        }
        content = content.push(text(title).size(16).color(c.text_primary));
        if let Some(description) = description {
            content = content.push(text(description).size(13).color(c.text_muted));
        }

        container(content)
            .width(Length::Fill)
            .padding(SPACING_XL)
            .center_x(Length::Fill)
            .into()
    }
}
