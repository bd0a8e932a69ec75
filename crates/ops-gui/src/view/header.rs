//! Shared document header.
//!
//! Renders the metadata every known variant carries: type badge,
//! category breadcrumb, title, description, derived time estimate,
//! station/role/frequency chips, hazard/allergen badges, and the first
//! three open questions.

use iced::widget::{Space, column, container, row, text};
use iced::{Element, Length};
use iced_fonts::lucide;

use ops_model::{ConfidenceTier, OperationalDocument};

use crate::component::{
    AlertVariant, BadgeVariant, alert, badge, card, metadata_item, metadata_row, tinted_badge,
};
use crate::message::Message;
use crate::theme::{SPACING_SM, SPACING_XS, colors};
use crate::util::{breadcrumb, format_minutes};
use crate::view::doc_type_icon;

/// Number of open questions shown before truncating to "+N more".
const OPEN_QUESTION_LIMIT: usize = 3;

pub fn view_document_header(document: &OperationalDocument) -> Element<'_, Message> {
    let c = colors();
    let accent = c.document_type(document.doc_type());

    // Confidence chip, right aligned.
    let tier = document.confidence_tier();
    let confidence_variant = match tier {
        ConfidenceTier::High => BadgeVariant::Success,
        ConfidenceTier::Medium => BadgeVariant::Warning,
        ConfidenceTier::Low => BadgeVariant::Error,
    };
    let confidence = badge(
        format!(
            "Confidence: {} ({}%)",
            tier.label(),
            (document.confidence_score() * 100.0).round() as u32
        ),
        confidence_variant,
    );

    // Type badge + category breadcrumb.
    let mut type_row = row![]
        .spacing(SPACING_SM)
        .align_y(iced::Alignment::Center);
    type_row = type_row.push(tinted_badge(document.type_label(), accent));
    if let Some(path) = document.category_path() {
        type_row = type_row.push(text(breadcrumb(path)).size(13).color(c.text_muted));
    }
    type_row = type_row.push(Space::new().width(Length::Fill));
    type_row = type_row.push(confidence);

    let mut content = column![type_row].spacing(SPACING_SM);

    // Type icon + title.
    content = content.push(
        row![
            container(doc_type_icon(document.doc_type(), 22.0)).style(move |_theme| {
                container::Style {
                    text_color: Some(accent),
                    ..Default::default()
                }
            }),
            text(document.title().to_string()).size(24).color(c.text_primary),
        ]
        .spacing(SPACING_SM)
        .align_y(iced::Alignment::Center),
    );

    if let Some(description) = document.description() {
        content = content.push(text(description.to_string()).size(14).color(c.text_secondary));
    }

    // Metadata chips.
    let mut chips: Vec<Element<'_, Message>> = Vec::new();
    if let Some(minutes) = document.time_estimate_minutes()
        && minutes > 0
    {
        chips.push(metadata_item(
            lucide::timer().size(14),
            "Time",
            format_minutes(Some(minutes)),
        ));
    }
    if let Some(station) = document.station() {
        chips.push(metadata_item(lucide::info().size(14), "Station", station));
    }
    if let Some(role) = document.role() {
        chips.push(metadata_item(lucide::users().size(14), "Role", role));
    }
    if let Some(frequency) = document.frequency() {
        chips.push(metadata_item(
            lucide::calendar().size(14),
            "Frequency",
            frequency.label(),
        ));
    }
    if !chips.is_empty() {
        content = content.push(metadata_row(chips));
    }

    // Hazards and allergens.
    let hazards = document.hazards();
    let allergens = document.allergens();
    if !hazards.is_empty() || !allergens.is_empty() {
        let mut badges = row![]
            .spacing(SPACING_XS + 2.0)
            .align_y(iced::Alignment::Center);
        if !hazards.is_empty() {
            badges = badges.push(text("Hazards:").size(13).color(c.text_muted));
            for hazard in hazards {
                badges = badges.push(badge(hazard.replace('_', " "), BadgeVariant::Warning));
            }
        }
        if !allergens.is_empty() {
            if !hazards.is_empty() {
                badges = badges.push(Space::new().width(SPACING_SM));
            }
            badges = badges.push(text("Allergens:").size(13).color(c.text_muted));
            for allergen in allergens {
                badges = badges.push(badge(allergen.clone(), BadgeVariant::Error));
            }
        }
        content = content.push(badges);
    }

    // Open questions, truncated after the first three.
    let open_questions = document.open_questions();
    if !open_questions.is_empty() {
        let mut list = column![].spacing(SPACING_XS);
        for question in open_questions.iter().take(OPEN_QUESTION_LIMIT) {
            list = list.push(
                text(format!("\u{2022} {question}"))
                    .size(13)
                    .color(c.text_secondary),
            );
        }
        if open_questions.len() > OPEN_QUESTION_LIMIT {
            list = list.push(
                text(format!(
                    "+{} more...",
                    open_questions.len() - OPEN_QUESTION_LIMIT
                ))
                .size(13)
                .color(c.text_muted),
            );
        }
        content = content.push(alert(AlertVariant::Warning, Some("Open Questions"), list));
    }

    card(content)
}
