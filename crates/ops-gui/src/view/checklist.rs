//! Checklist viewer.
//!
//! Items grouped by category, per-item responses (check, numeric
//! reading, notes), live out-of-range feedback, and a reset-all action.

use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Border, Element, Length};
use iced_fonts::lucide;

use ops_model::checklist::ChecklistItem;
use ops_model::{Checklist, OperationalDocument};

use crate::component::{
    AlertVariant, BadgeVariant, ProgressBar, SectionCard, alert, badge, badge_with_icon, card,
    status_panel,
};
use crate::message::{ChecklistMessage, Message};
use crate::state::{ChecklistUiState, grouped_items};
use crate::theme::{
    BORDER_RADIUS_MD, BORDER_WIDTH_MEDIUM, SPACING_MD, SPACING_SM, SPACING_XS, button_secondary,
    colors, text_input_default, text_input_error,
};
use crate::view::header::view_document_header;
use crate::view::steps::completion_banner;

pub fn view_checklist<'a>(
    document: &'a OperationalDocument,
    checklist: &'a Checklist,
    ui: &'a ChecklistUiState,
) -> Element<'a, Message> {
    let progress = ui.progress(&checklist.items);

    let mut content = column![
        view_document_header(document),
        progress_card(checklist, ui),
    ]
    .spacing(SPACING_MD);

    if !checklist.escalation_rules.is_empty() {
        let c = colors();
        let mut rules = column![].spacing(SPACING_XS);
        for rule in &checklist.escalation_rules {
            rules = rules.push(
                text(format!("\u{2022} {} \u{2192} {}", rule.condition, rule.action))
                    .size(13)
                    .color(c.text_secondary),
            );
            if !rule.notify_roles.is_empty() {
                rules = rules.push(
                    text(format!("   Notify: {}", rule.notify_roles.join(", ")))
                        .size(12)
                        .color(c.text_muted),
                );
            }
        }
        content = content.push(alert(AlertVariant::Warning, Some("Escalation Rules"), rules));
    }

    for (category, items) in grouped_items(&checklist.items) {
        content = content.push(category_card(category, &items, ui));
    }

    if progress == 100 {
        content = content.push(completion_banner(
            "Checklist Complete!",
            format!("All {} items have been checked.", checklist.items.len()),
        ));
    }

    content.into()
}

// =============================================================================
// PROGRESS CARD
// =============================================================================

fn progress_card<'a>(checklist: &'a Checklist, ui: &'a ChecklistUiState) -> Element<'a, Message> {
    let c = colors();
    let completed = ui.completed_count(&checklist.items);
    let total = checklist.items.len();
    let progress = ui.progress(&checklist.items);

    let mut header = row![
        text(completed.to_string()).size(28).color(c.text_primary),
        text("/").size(18).color(c.text_disabled),
        text(total.to_string()).size(18).color(c.text_muted),
    ]
    .spacing(SPACING_XS + 2.0)
    .align_y(iced::Alignment::Center);

    if let Some(shift) = checklist.shift {
        header = header.push(badge(format!("{} Shift", shift.label()), BadgeVariant::Info));
    }
    header = header.push(badge(checklist.frequency.label(), BadgeVariant::Outline));
    header = header.push(Space::new().width(Length::Fill));
    header = header.push(
        button(text("Reset All").size(13))
            .on_press(Message::Checklist(ChecklistMessage::ResetAll))
            .padding([6.0, 12.0])
            .style(button_secondary),
    );

    card(
        column![
            header,
            ProgressBar::new(progress as f32 / 100.0)
                .height(8.0)
                .show_label(true)
                .view(),
        ]
        .spacing(SPACING_SM),
    )
}

// =============================================================================
// CATEGORY GROUPS
// =============================================================================

fn category_card<'a>(
    category: String,
    items: &[&'a ChecklistItem],
    ui: &'a ChecklistUiState,
) -> Element<'a, Message> {
    let checked_in_group = items.iter().filter(|item| ui.is_checked(&item.id)).count();

    let mut list = column![].spacing(SPACING_SM);
    for item in items.iter().copied() {
        list = list.push(item_row(item, ui));
    }

    SectionCard::new(category, list)
        .trailing(badge(
            format!("{checked_in_group}/{}", items.len()),
            BadgeVariant::Outline,
        ))
        .view()
}

fn item_row<'a>(item: &'a ChecklistItem, ui: &'a ChecklistUiState) -> Element<'a, Message> {
    let c = colors();
    let checked = ui.is_checked(&item.id);
    let out_of_range = ui.is_out_of_range(item);
    let response = ui.response(&item.id);

    // Check indicator doubles as the toggle.
    let indicator: Element<'a, Message> = if checked {
        container(lucide::check().size(14))
            .width(Length::Fixed(24.0))
            .height(Length::Fixed(24.0))
            .center_x(Length::Fixed(24.0))
            .center_y(Length::Fixed(24.0))
            .style(move |_theme| container::Style {
                background: Some(c.status_success.into()),
                text_color: Some(c.text_on_accent),
                border: Border {
                    radius: 6.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .into()
    } else {
        container(Space::new())
            .width(Length::Fixed(24.0))
            .height(Length::Fixed(24.0))
            .style(move |_theme| container::Style {
                border: Border {
                    radius: 6.0.into(),
                    width: BORDER_WIDTH_MEDIUM,
                    color: c.border_default,
                },
                ..Default::default()
            })
            .into()
    };
    let toggle = button(indicator)
        .on_press(Message::Checklist(ChecklistMessage::ItemToggled(
            item.id.clone(),
        )))
        .padding(0)
        .style(|_theme, _status| button::Style {
            background: None,
            ..Default::default()
        });

    // Label + requirement badges.
    let mut label_row = row![
        text(item.label.as_str()).size(14).color(if checked {
            c.status_success
        } else {
            c.text_primary
        }),
    ]
    .spacing(SPACING_XS + 2.0)
    .align_y(iced::Alignment::Center);

    if item.is_mandatory {
        label_row = label_row.push(badge("Required", BadgeVariant::Error));
    }
    if item.photo_required {
        label_row = label_row.push(badge_with_icon(
            lucide::camera().size(11),
            "Photo",
            BadgeVariant::Info,
        ));
    }
    if item.requires_initials {
        label_row = label_row.push(badge("Initials", BadgeVariant::Outline));
    }
    if item.requires_signature {
        label_row = label_row.push(badge("Signature", BadgeVariant::Outline));
    }

    let mut body = column![label_row].spacing(SPACING_SM);

    // Numeric entry for number/temperature items.
    if item.response_type.is_numeric()
        && let Some(field) = &item.numeric_field
    {
        let raw_value = response.map(|r| r.raw_value.as_str()).unwrap_or("");
        let placeholder = field.target_text.clone().unwrap_or_else(|| "Enter value".to_string());
        let item_id = item.id.clone();

        // Fn-pointer type so both style fns unify.
        let input_style: fn(&iced::Theme, text_input::Status) -> text_input::Style =
            if out_of_range {
                text_input_error
            } else {
                text_input_default
            };

        let input = text_input(&placeholder, raw_value)
            .on_input(move |value| {
                Message::Checklist(ChecklistMessage::ValueChanged(item_id.clone(), value))
            })
            .size(13)
            .width(Length::Fixed(110.0))
            .style(input_style);

        let mut input_row = row![
            container(lucide::thermometer().size(14)).style(move |_theme| container::Style {
                text_color: Some(c.text_muted),
                ..Default::default()
            }),
            input,
        ]
        .spacing(SPACING_SM)
        .align_y(iced::Alignment::Center);

        if let Some(unit) = &field.unit {
            input_row = input_row.push(text(unit.as_str()).size(13).color(c.text_secondary));
        }
        if let Some(target_text) = &field.target_text {
            input_row = input_row.push(
                text(format!("Target: {target_text}"))
                    .size(12)
                    .color(c.text_muted),
            );
        }
        body = body.push(input_row);
    }

    // Notes entry for items that require text.
    if item.text_required {
        let notes = response.map(|r| r.notes.as_str()).unwrap_or("");
        let item_id = item.id.clone();
        body = body.push(
            text_input(
                item.expected_value_text.as_deref().unwrap_or("Add notes..."),
                notes,
            )
            .on_input(move |value| {
                Message::Checklist(ChecklistMessage::NotesChanged(item_id.clone(), value))
            })
            .size(13)
            .width(Length::Fill)
            .style(text_input_default),
        );
    }

    // Out-of-range fail path, re-evaluated on every input change.
    if out_of_range
        && let Some(instruction) = &item.fail_path_instruction
    {
        body = body.push(alert(
            AlertVariant::Error,
            None,
            text(instruction.as_str()).size(13).color(c.text_secondary),
        ));
    }

    if let Some(trigger) = &item.escalation_trigger {
        body = body.push(
            row![
                container(lucide::info().size(12)).style(move |_theme| container::Style {
                    text_color: Some(c.text_disabled),
                    ..Default::default()
                }),
                text(format!("Escalate: {trigger}")).size(12).color(c.text_muted),
            ]
            .spacing(SPACING_XS)
            .align_y(iced::Alignment::Center),
        );
    }

    let content = row![toggle, body.width(Length::Fill)]
        .spacing(SPACING_MD)
        .align_y(iced::Alignment::Start);

    if checked {
        status_panel(content, c.status_success, Some(c.status_success_light))
    } else if out_of_range {
        status_panel(content, c.status_error, Some(c.status_error_light))
    } else {
        container(content)
            .padding(SPACING_MD)
            .width(Length::Fill)
            .style(move |_theme| container::Style {
                background: Some(c.background_elevated.into()),
                border: Border {
                    radius: BORDER_RADIUS_MD.into(),
                    width: BORDER_WIDTH_MEDIUM,
                    color: c.border_default,
                },
                ..Default::default()
            })
            .into()
    }
}
