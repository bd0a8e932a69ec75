//! Guide viewer.
//!
//! Tabs are computed from the document: "Content" always exists, the
//! other tabs appear only when their section has entries, and the tab
//! bar itself disappears when Content is the only tab.

use iced::widget::{Space, column, container, row, text};
use iced::{Element, Length};
use iced_fonts::lucide;

use ops_model::guide::{ScenarioBlock, VisualExample};
use ops_model::{Guide, OperationalDocument};

use crate::component::{
    AlertVariant, BadgeVariant, EmptyState, SectionCard, Tab, TableColumn, alert, badge, card,
    collapsible, panel, simple_table, tab_bar,
};
use crate::message::{GuideMessage, Message};
use crate::state::{GuideTab, GuideUiState};
use crate::theme::{SPACING_MD, SPACING_SM, SPACING_XS, colors};
use crate::view::header::view_document_header;

pub fn view_guide<'a>(
    document: &'a OperationalDocument,
    guide: &'a Guide,
    ui: &'a GuideUiState,
) -> Element<'a, Message> {
    let c = colors();
    let available = GuideTab::available(guide);

    let mut content = column![view_document_header(document)].spacing(SPACING_MD);

    if !guide.topics.is_empty() {
        let mut topics = row![].spacing(SPACING_XS + 2.0);
        for topic in &guide.topics {
            topics = topics.push(badge(topic.clone(), BadgeVariant::Info));
        }
        content = content.push(topics);
    }

    if let Some(overview) = &guide.overview {
        content = content.push(alert(
            AlertVariant::Info,
            None,
            row![
                container(lucide::book_open().size(16)).style(move |_theme| container::Style {
                    text_color: Some(c.status_info),
                    ..Default::default()
                }),
                text(overview.as_str()).size(14).color(c.text_secondary),
            ]
            .spacing(SPACING_SM),
        ));
    }

    // Tab bar only when more than one tab would exist.
    let active = if available.contains(&ui.tab) {
        ui.tab
    } else {
        GuideTab::Content
    };
    if available.len() > 1 {
        let tabs: Vec<Tab<Message>> = available
            .iter()
            .map(|tab| Tab::new(tab.name(), Message::Guide(GuideMessage::TabSelected(*tab))))
            .collect();
        let active_index = available.iter().position(|tab| *tab == active).unwrap_or(0);
        content = content.push(tab_bar(tabs, active_index));
    }

    content = content.push(match active {
        GuideTab::Content => content_tab(guide),
        GuideTab::Tables => tables_tab(guide),
        GuideTab::Scenarios => scenarios_tab(guide),
        GuideTab::Faq => faq_tab(guide, ui),
    });

    if !guide.visual_examples.is_empty() {
        content = content.push(visual_examples_section(&guide.visual_examples));
    }

    if !guide.links_out.is_empty() {
        let mut links = column![].spacing(SPACING_SM);
        for link in &guide.links_out {
            let mut link_panel = column![
                badge(link.target_doc_type.clone(), BadgeVariant::Outline),
                text(link.title_hint.as_str()).size(13).color(c.text_primary),
            ]
            .spacing(SPACING_XS);
            if let Some(hint) = &link.category_path_hint {
                link_panel = link_panel.push(text(hint.as_str()).size(11).color(c.text_disabled));
            }
            if let Some(reason) = &link.reason {
                link_panel = link_panel.push(text(reason.as_str()).size(12).color(c.text_muted));
            }
            links = links.push(panel(link_panel));
        }
        content = content.push(SectionCard::new("Related Documents", links).view());
    }

    content.into()
}

// =============================================================================
// TABS
// =============================================================================

fn content_tab(guide: &Guide) -> Element<'_, Message> {
    let c = colors();

    if guide.sections.is_empty() {
        return card(
            EmptyState::new("No content sections")
                .icon(lucide::info().size(36))
                .description("No content sections available.")
                .view(),
        );
    }

    let mut content = column![].spacing(SPACING_MD);
    for section in &guide.sections {
        let mut bullets = column![].spacing(SPACING_XS + 2.0);
        for bullet in &section.bullets {
            bullets = bullets.push(
                row![
                    container(lucide::circle_check().size(13)).style(move |_theme| {
                        container::Style {
                            text_color: Some(c.status_success),
                            ..Default::default()
                        }
                    }),
                    text(bullet.as_str()).size(13).color(c.text_secondary),
                ]
                .spacing(SPACING_SM)
                .align_y(iced::Alignment::Start),
            );
        }
        content = content.push(
            SectionCard::new(section.title.clone(), bullets)
                .icon(container(lucide::list().size(15)).style(move |_theme| container::Style {
                    text_color: Some(c.text_muted),
                    ..Default::default()
                }))
                .view(),
        );
    }
    content.into()
}

fn tables_tab(guide: &Guide) -> Element<'_, Message> {
    let c = colors();
    let mut content = column![text("Reference Tables").size(18).color(c.text_primary)]
        .spacing(SPACING_MD);

    for table in &guide.reference_tables {
        let columns: Vec<TableColumn> = table
            .headers
            .iter()
            .map(|header| TableColumn::fill(header.clone()))
            .collect();

        let mut body = column![simple_table(&columns, table.rows.clone())].spacing(SPACING_SM);
        if let Some(notes) = &table.notes {
            body = body.push(alert(
                AlertVariant::Warning,
                None,
                text(notes.as_str()).size(13).color(c.text_secondary),
            ));
        }
        content = content.push(SectionCard::new(table.title.clone(), body).view());
    }

    content.into()
}

fn scenario_card(scenario: &ScenarioBlock) -> Element<'_, Message> {
    let c = colors();
    let mut body = column![].spacing(SPACING_SM);

    if let Some(description) = &scenario.description {
        body = body.push(text(description.as_str()).size(13).color(c.text_muted));
    }

    let mut variants = row![].spacing(SPACING_SM);
    for variant in &scenario.variants {
        let mut variant_col = column![badge(variant.label.clone(), BadgeVariant::Info)]
            .spacing(SPACING_XS + 2.0);
        for field in &variant.fields {
            variant_col = variant_col.push(
                row![
                    text(format!("{}:", field.key)).size(12).color(c.text_muted),
                    Space::new().width(Length::Fill),
                    text(field.value.as_str()).size(12).color(c.text_primary),
                ]
                .spacing(SPACING_XS),
            );
        }
        if let Some(notes) = &variant.notes {
            variant_col = variant_col.push(text(notes.as_str()).size(11).color(c.text_muted));
        }
        variants = variants.push(container(panel(variant_col)).width(Length::Fill));
    }
    body = body.push(variants);

    SectionCard::new(scenario.title.clone(), body).view()
}

fn scenarios_tab(guide: &Guide) -> Element<'_, Message> {
    let c = colors();
    let mut content = column![text("Scenarios & Variants").size(18).color(c.text_primary)]
        .spacing(SPACING_MD);
    for scenario in &guide.scenarios {
        content = content.push(scenario_card(scenario));
    }
    content.into()
}

fn faq_tab<'a>(guide: &'a Guide, ui: &'a GuideUiState) -> Element<'a, Message> {
    let c = colors();
    let mut content = column![
        text("Frequently Asked Questions").size(18).color(c.text_primary),
    ]
    .spacing(SPACING_MD);

    for (index, item) in guide.faq.iter().enumerate() {
        let open = ui.open_faq.get(index).copied().unwrap_or(false);

        let header = row![
            container(lucide::circle_help().size(14)).style(move |_theme| container::Style {
                text_color: Some(c.accent_primary),
                ..Default::default()
            }),
            text(item.question.as_str()).size(14).color(c.text_primary),
        ]
        .spacing(SPACING_SM)
        .align_y(iced::Alignment::Center);

        let mut body = column![
            text(item.answer.as_str()).size(13).color(c.text_secondary),
        ]
        .spacing(SPACING_SM);
        if !item.evidence.is_empty() {
            let mut sources = row![
                text("Sources:").size(12).color(c.text_muted),
            ]
            .spacing(SPACING_XS + 2.0)
            .align_y(iced::Alignment::Center);
            for evidence in &item.evidence {
                sources = sources.push(badge(
                    format!("{} \u{2022} {}", evidence.source_id, evidence.locator),
                    BadgeVariant::Outline,
                ));
            }
            body = body.push(sources);
        }

        content = content.push(collapsible(
            header,
            open,
            Message::Guide(GuideMessage::FaqToggled(index)),
            body,
        ));
    }

    content.into()
}

// =============================================================================
// VISUAL EXAMPLES
// =============================================================================

fn visual_examples_section(examples: &[VisualExample]) -> Element<'_, Message> {
    let c = colors();
    let mut list = column![].spacing(SPACING_MD);

    for example in examples {
        let mut example_col = column![
            text(example.title.as_str()).size(14).color(c.text_primary),
        ]
        .spacing(SPACING_SM);

        let good = column![
            badge("\u{2713} Good", BadgeVariant::Success),
            panel(
                text(example.good_image_ref.as_deref().unwrap_or("(no image)"))
                    .size(11)
                    .color(c.status_success),
            ),
        ]
        .spacing(SPACING_XS);

        let bad = column![
            badge("\u{2717} Bad", BadgeVariant::Error),
            panel(
                text(example.bad_image_ref.as_deref().unwrap_or("(no image)"))
                    .size(11)
                    .color(c.status_error),
            ),
        ]
        .spacing(SPACING_XS);

        example_col = example_col.push(
            row![
                container(good).width(Length::Fill),
                container(bad).width(Length::Fill),
            ]
            .spacing(SPACING_MD),
        );

        if let Some(notes) = &example.notes {
            example_col = example_col.push(text(notes.as_str()).size(12).color(c.text_muted));
        }

        list = list.push(example_col);
    }

    SectionCard::new("Visual Examples", list).view()
}
