//! Home shell: top bar, navigation sidebar, and the reading pane.

use iced::widget::{Space, button, column, container, pick_list, row, scrollable, text};
use iced::{Border, Element, Length};
use iced_fonts::lucide;

use crate::component::{AlertVariant, BadgeVariant, SidebarItem, alert, badge, sidebar};
use crate::message::Message;
use crate::state::AppState;
use crate::theme::{
    BORDER_RADIUS_LG, BORDER_WIDTH_THIN, CONTENT_MAX_WIDTH, SPACING_MD, SPACING_SM, ThemeMode,
    button_ghost, colors,
};
use crate::view::{doc_type_icon, view_document};

pub fn view_home(state: &AppState) -> Element<'_, Message> {
    let mut body = row![].spacing(0);

    if state.sidebar_open {
        body = body.push(document_sidebar(state));
    }

    let mut reading_pane = column![].spacing(SPACING_MD);
    if let Some(error) = &state.load_error {
        reading_pane = reading_pane.push(alert(
            AlertVariant::Error,
            Some("Document library failed to load"),
            text(error.clone()).size(13),
        ));
    }
    reading_pane = reading_pane.push(view_document(state));

    body = body.push(
        scrollable(
            container(
                container(reading_pane)
                    .max_width(CONTENT_MAX_WIDTH)
                    .width(Length::Fill),
            )
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding(SPACING_MD),
        )
        .width(Length::Fill)
        .height(Length::Fill),
    );

    column![top_bar(state), body].into()
}

// =============================================================================
// TOP BAR
// =============================================================================

fn top_bar(state: &AppState) -> Element<'_, Message> {
    let c = colors();

    let toggle = button(
        container(lucide::menu().size(18)).style(move |_theme| container::Style {
            text_color: Some(c.text_secondary),
            ..Default::default()
        }),
    )
    .on_press(Message::SidebarToggled)
    .padding([6.0, 8.0])
    .style(button_ghost);

    let mark = container(text("LO").size(13).color(c.text_on_accent))
        .width(Length::Fixed(28.0))
        .height(Length::Fixed(28.0))
        .center_x(Length::Fixed(28.0))
        .center_y(Length::Fixed(28.0))
        .style(move |_theme| container::Style {
            background: Some(c.accent_primary.into()),
            border: Border {
                radius: BORDER_RADIUS_LG.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let theme_picker = pick_list(
        &ThemeMode::ALL[..],
        Some(state.settings.theme_mode),
        Message::ThemeModeSelected,
    )
    .text_size(13)
    .padding([4.0, 8.0]);

    container(
        row![
            toggle,
            mark,
            text("Line Ops Studio").size(15).color(c.text_primary),
            Space::new().width(Length::Fill),
            theme_picker,
            badge("Demo Mode", BadgeVariant::Success),
        ]
        .spacing(SPACING_SM + 2.0)
        .align_y(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .padding([SPACING_SM, SPACING_MD])
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

// =============================================================================
// SIDEBAR
// =============================================================================

fn document_sidebar(state: &AppState) -> Element<'_, Message> {
    let c = colors();
    let summaries = state.summaries();

    let active_index = summaries
        .iter()
        .position(|summary| summary.id == state.selected_id);

    let items: Vec<SidebarItem<'_, Message>> = summaries
        .into_iter()
        .map(|summary| {
            let doc_type = state
                .library
                .get(&summary.id)
                .and_then(|doc| doc.doc_type());
            SidebarItem::new(
                summary.title,
                summary.type_label,
                c.document_type(doc_type),
                doc_type_icon(doc_type, 15.0),
                Message::DocumentSelected(summary.id),
            )
        })
        .collect();

    let header = text("DOCUMENTS").size(11).color(c.text_muted);

    sidebar(header.into(), items, active_index)
}
