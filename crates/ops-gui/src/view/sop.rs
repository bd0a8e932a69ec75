//! SOP viewer.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Element, Length};
use iced_fonts::lucide;

use ops_model::{OperationalDocument, Sop, TroubleshootingItem};

use crate::component::{
    AlertVariant, BadgeVariant, EmptyState, ProgressBar, SectionCard, Tab, alert, badge, card,
    collapsible, tab_bar,
};
use crate::message::{Message, SopMessage};
use crate::state::{SopTab, SopUiState};
use crate::theme::{SPACING_MD, SPACING_SM, SPACING_XS, button_ghost, colors};
use crate::util::format_minutes;
use crate::view::header::view_document_header;
use crate::view::steps::{completion_banner, view_step_card};

pub fn view_sop<'a>(
    document: &'a OperationalDocument,
    sop: &'a Sop,
    ui: &'a SopUiState,
) -> Element<'a, Message> {
    let c = colors();
    let progress = ui.progress(&sop.steps);

    let mut content = column![view_document_header(document)].spacing(SPACING_MD);

    if !sop.safety_warnings.is_empty() {
        let mut warnings = column![].spacing(SPACING_XS);
        for warning in &sop.safety_warnings {
            let mut line = warning.text.clone();
            if let Some(title) = &warning.title {
                line = format!("{title}: {line}");
            }
            warnings = warnings.push(text(line).size(13).color(c.text_secondary));
        }
        content = content.push(alert(
            AlertVariant::Error,
            Some("Safety Warnings"),
            warnings,
        ));
    }

    content = content.push(progress_card(sop, ui));
    content = content.push(tabs(ui.tab));
    content = content.push(match ui.tab {
        SopTab::Steps => steps_tab(sop, ui),
        SopTab::Details => details_tab(sop),
        SopTab::Troubleshooting => troubleshooting_tab(sop, ui),
    });

    if progress == 100 {
        content = content.push(completion_banner(
            "SOP Complete!",
            "All steps have been completed successfully.",
        ));
    }

    content.into()
}

fn progress_card<'a>(sop: &'a Sop, ui: &'a SopUiState) -> Element<'a, Message> {
    let c = colors();
    let completed = ui.completed_count(&sop.steps);
    let progress = ui.progress(&sop.steps);

    let mut header = row![
        text(format!("Progress: {completed} of {} steps", sop.steps.len()))
            .size(13)
            .color(c.text_secondary),
    ]
    .spacing(SPACING_MD)
    .align_y(iced::Alignment::Center);

    if let Some(minutes) = sop.estimated_time_minutes {
        header = header.push(
            text(format!("Est. {}", format_minutes(Some(minutes))))
                .size(13)
                .color(c.text_muted),
        );
    }
    header = header.push(Space::new().width(Length::Fill));
    if completed > 0 {
        header = header.push(
            button(text("Reset").size(13))
                .on_press(Message::Sop(SopMessage::ResetProgress))
                .padding([4.0, 10.0])
                .style(button_ghost),
        );
    }

    card(
        column![
            header,
            ProgressBar::new(progress as f32 / 100.0).view(),
        ]
        .spacing(SPACING_SM),
    )
}

fn tabs<'a>(active: SopTab) -> Element<'a, Message> {
    let tabs: Vec<Tab<Message>> = SopTab::ALL
        .iter()
        .map(|tab| Tab::new(tab.name(), Message::Sop(SopMessage::TabSelected(*tab))))
        .collect();
    let active_index = SopTab::ALL
        .iter()
        .position(|tab| *tab == active)
        .unwrap_or(0);
    tab_bar(tabs, active_index)
}

fn steps_tab<'a>(sop: &'a Sop, ui: &'a SopUiState) -> Element<'a, Message> {
    let c = colors();
    let mut content = column![
        text("Step-by-Step Instructions").size(18).color(c.text_primary),
    ]
    .spacing(SPACING_MD);

    for (index, step) in sop.steps.iter().enumerate() {
        let complete = ui.completed.contains(&step.id);
        content = content.push(view_step_card(
            index,
            step,
            complete,
            Message::Sop(SopMessage::StepToggled(step.id.clone())),
        ));
    }

    content.into()
}

fn bullet_list<'a>(items: &'a [String]) -> Element<'a, Message> {
    let c = colors();
    let mut list = column![].spacing(SPACING_XS);
    for item in items {
        list = list.push(
            text(format!("\u{2022} {item}"))
                .size(13)
                .color(c.text_secondary),
        );
    }
    list.into()
}

fn details_tab(sop: &Sop) -> Element<'_, Message> {
    let c = colors();
    let mut content = column![].spacing(SPACING_MD);
    let mut has_any = false;

    if let Some(purpose) = &sop.purpose {
        content = content.push(
            SectionCard::new("Purpose", text(purpose.as_str()).size(13).color(c.text_secondary))
                .view(),
        );
        has_any = true;
    }
    if let Some(scope) = &sop.scope {
        content = content.push(
            SectionCard::new("Scope", text(scope.as_str()).size(13).color(c.text_secondary))
                .view(),
        );
        has_any = true;
    }
    if let Some(when_to_use) = &sop.when_to_use {
        content = content.push(
            SectionCard::new(
                "When to Use",
                text(when_to_use.as_str()).size(13).color(c.text_secondary),
            )
            .view(),
        );
        has_any = true;
    }
    if !sop.prerequisites.is_empty() {
        content =
            content.push(SectionCard::new("Prerequisites", bullet_list(&sop.prerequisites)).view());
        has_any = true;
    }
    if !sop.tools_required.is_empty() {
        let mut tools = row![].spacing(SPACING_XS + 2.0);
        for tool in &sop.tools_required {
            tools = tools.push(badge(tool.tool_name.clone(), BadgeVariant::Outline));
        }
        content = content.push(SectionCard::new("Tools & Materials", tools).view());
        has_any = true;
    }
    if !sop.quality_checks.is_empty() {
        content =
            content.push(SectionCard::new("Quality Checks", bullet_list(&sop.quality_checks)).view());
        has_any = true;
    }
    if !sop.common_mistakes.is_empty() {
        content = content.push(
            SectionCard::new("Common Mistakes to Avoid", bullet_list(&sop.common_mistakes)).view(),
        );
        has_any = true;
    }
    if let Some(escalation) = &sop.escalation {
        let mut body = column![].spacing(SPACING_XS);
        if !escalation.conditions.is_empty() {
            body = body.push(text("When:").size(13).color(c.text_primary));
            body = body.push(bullet_list(&escalation.conditions));
        }
        if !escalation.actions.is_empty() {
            body = body.push(text("Do:").size(13).color(c.text_primary));
            body = body.push(bullet_list(&escalation.actions));
        }
        if let Some(contact) = &escalation.contact_role {
            body = body.push(
                text(format!("Contact: {contact}"))
                    .size(13)
                    .color(c.text_secondary),
            );
        }
        content = content.push(alert(AlertVariant::Warning, Some("Escalation"), body));
        has_any = true;
    }

    if !has_any {
        content = content.push(card(
            text("No additional details recorded for this SOP.")
                .size(13)
                .color(c.text_muted),
        ));
    }

    content.into()
}

/// Shared troubleshooting entry body (also used by the equipment view).
pub fn troubleshooting_body(item: &TroubleshootingItem) -> Element<'_, Message> {
    let c = colors();
    let mut body = column![].spacing(SPACING_SM);

    if !item.likely_causes.is_empty() {
        body = body.push(text("Likely Causes:").size(13).color(c.text_primary));
        body = body.push(bullet_list(&item.likely_causes));
    }

    body = body.push(text("Fix Steps:").size(13).color(c.text_primary));
    let mut fixes = column![].spacing(SPACING_XS);
    for (index, fix) in item.fix_steps.iter().enumerate() {
        fixes = fixes.push(
            text(format!("{}. {fix}", index + 1))
                .size(13)
                .color(c.text_secondary),
        );
    }
    body = body.push(fixes);

    if let Some(escalate) = &item.escalate_when {
        body = body.push(alert(
            AlertVariant::Info,
            Some("Escalate When"),
            text(escalate.as_str()).size(13).color(c.text_secondary),
        ));
    }

    body.into()
}

/// Collapsible header for a troubleshooting symptom.
pub fn troubleshooting_header(symptom: &str) -> Element<'_, Message> {
    let c = colors();
    row![
        container(lucide::triangle_alert().size(14)).style(move |_theme| container::Style {
            text_color: Some(c.status_warning),
            ..Default::default()
        }),
        text(symptom).size(14).color(c.text_primary),
    ]
    .spacing(SPACING_SM)
    .align_y(iced::Alignment::Center)
    .into()
}

fn troubleshooting_tab<'a>(sop: &'a Sop, ui: &'a SopUiState) -> Element<'a, Message> {
    let c = colors();

    if sop.troubleshooting.is_empty() {
        return card(
            EmptyState::new("No troubleshooting information")
                .icon(lucide::info().size(36))
                .description("This procedure has no recorded failure modes.")
                .view(),
        );
    }

    let mut content = column![
        text("Troubleshooting Guide").size(18).color(c.text_primary),
    ]
    .spacing(SPACING_MD);

    for (index, item) in sop.troubleshooting.iter().enumerate() {
        let open = ui.open_troubleshooting.get(index).copied().unwrap_or(false);
        content = content.push(collapsible(
            troubleshooting_header(&item.symptom),
            open,
            Message::Sop(SopMessage::TroubleshootingToggled(index)),
            troubleshooting_body(item),
        ));
    }

    content.into()
}
