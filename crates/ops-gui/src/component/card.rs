//! Card and panel containers.
//!
//! Containers for grouping related content with consistent styling.

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Border, Color, Element, Length};

use crate::theme::{
    BORDER_RADIUS_MD, BORDER_WIDTH_MEDIUM, SPACING_MD, SPACING_SM, colors, container_card,
};

// =============================================================================
// SECTION CARD
// =============================================================================

/// A titled card with optional trailing element in the header.
pub struct SectionCard<'a, M> {
    title: String,
    trailing: Option<Element<'a, M>>,
    icon: Option<Element<'a, M>>,
    content: Element<'a, M>,
}

impl<'a, M: 'a> SectionCard<'a, M> {
    pub fn new(title: impl Into<String>, content: impl Into<Element<'a, M>>) -> Self {
        Self {
            title: title.into(),
            trailing: None,
            icon: None,
            content: content.into(),
        }
    }

    /// Add an icon before the title.
    pub fn icon(mut self, icon: impl Into<Element<'a, M>>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Add a trailing element (count badge, action) to the header.
    pub fn trailing(mut self, trailing: impl Into<Element<'a, M>>) -> Self {
        self.trailing = Some(trailing.into());
        self
    }

    pub fn view(self) -> Element<'a, M> {
        let c = colors();
        let Self {
            title,
            trailing,
            icon,
            content,
        } = self;

        let mut header = row![].spacing(SPACING_SM).align_y(Alignment::Center);
        if let Some(icon) = icon {
            header = header.push(icon);
        }
        header = header.push(text(title).size(16).color(c.text_primary));
        if let Some(trailing) = trailing {
            header = header.push(Space::new().width(Length::Fill));
            header = header.push(trailing);
        }

        container(
            column![header, Space::new().height(SPACING_SM), content].width(Length::Fill),
        )
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(container_card)
        .into()
    }
}

// =============================================================================
// PANELS
// =============================================================================

/// Plain card wrapper without a header.
pub fn card<'a, M: 'a>(content: impl Into<Element<'a, M>>) -> Element<'a, M> {
    container(content)
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(container_card)
        .into()
}

/// Subtle gray panel for nested content.
pub fn panel<'a, M: 'a>(content: impl Into<Element<'a, M>>) -> Element<'a, M> {
    let c = colors();
    container(content)
        .padding(SPACING_SM)
        .width(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(c.background_secondary.into()),
            border: Border {
                radius: BORDER_RADIUS_MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Panel with a colored border and tinted background, for status
/// emphasis (completion banners, out-of-range warnings).
pub fn status_panel<'a, M: 'a>(
    content: impl Into<Element<'a, M>>,
    border_color: Color,
    background: Option<Color>,
) -> Element<'a, M> {
    let c = colors();
    let bg = background.unwrap_or(c.background_secondary);
    container(content)
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(bg.into()),
            border: Border {
                radius: BORDER_RADIUS_MD.into(),
                width: BORDER_WIDTH_MEDIUM,
                color: border_color,
            },
            ..Default::default()
        })
        .into()
}
