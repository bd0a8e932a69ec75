//! Equipment viewer.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Element, Length};
use iced_fonts::lucide;

use ops_model::equipment::{EquipmentProgram, QuickAction, QuickActionKind};
use ops_model::{Equipment, OperationalDocument};

use crate::component::{
    AlertVariant, BadgeVariant, EmptyState, SectionCard, Tab, TableColumn, alert, badge,
    badge_with_icon, card, collapsible, panel, simple_table, tab_bar,
};
use crate::message::{EquipmentMessage, Message};
use crate::state::{EquipmentTab, EquipmentUiState};
use crate::theme::{SPACING_MD, SPACING_SM, SPACING_XS, colors};
use crate::util::format_minutes;
use crate::view::header::view_document_header;
use crate::view::sop::{troubleshooting_body, troubleshooting_header};

pub fn view_equipment<'a>(
    document: &'a OperationalDocument,
    equipment: &'a Equipment,
    ui: &'a EquipmentUiState,
) -> Element<'a, Message> {
    let mut content = column![
        view_document_header(document),
        info_card(equipment),
        tabs(ui.tab),
        match ui.tab {
            EquipmentTab::QuickActions => quick_actions_tab(equipment),
            EquipmentTab::Programs => programs_tab(equipment, ui),
            EquipmentTab::Troubleshooting => troubleshooting_tab(equipment, ui),
        },
    ]
    .spacing(SPACING_MD);

    if !equipment.safety_warnings.is_empty() {
        let c = colors();
        let mut warnings = column![].spacing(SPACING_XS);
        for warning in &equipment.safety_warnings {
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

    content.into()
}

// =============================================================================
// INFO CARD
// =============================================================================

fn info_card(equipment: &Equipment) -> Element<'_, Message> {
    let c = colors();
    let mut lines = column![].spacing(SPACING_SM);

    let mut name_row = row![].spacing(SPACING_SM).align_y(iced::Alignment::Center);
    name_row = name_row.push(
        container(lucide::settings().size(28)).style(move |_theme| container::Style {
            text_color: Some(c.document_type(Some(ops_model::DocumentType::Equipment))),
            ..Default::default()
        }),
    );
    if let Some(machine_name) = &equipment.machine_name {
        name_row = name_row.push(text(machine_name.as_str()).size(18).color(c.text_primary));
    }
    if let Some(model) = &equipment.model_number {
        name_row = name_row.push(badge(model.clone(), BadgeVariant::Outline));
    }
    lines = lines.push(name_row);

    if !equipment.risk_warnings.is_empty() {
        let mut risks = column![].spacing(SPACING_XS);
        for risk in &equipment.risk_warnings {
            risks = risks.push(
                row![
                    container(lucide::triangle_alert().size(13)).style(move |_theme| {
                        container::Style {
                            text_color: Some(c.status_error),
                            ..Default::default()
                        }
                    }),
                    text(format!(
                        "{}: {}",
                        risk.hazard.replace('_', " "),
                        risk.warning
                    ))
                    .size(13)
                    .color(c.text_secondary),
                ]
                .spacing(SPACING_XS + 2.0)
                .align_y(iced::Alignment::Center),
            );
        }
        lines = lines.push(risks);
    }

    card(lines)
}

fn tabs<'a>(active: EquipmentTab) -> Element<'a, Message> {
    let tabs: Vec<Tab<Message>> = EquipmentTab::ALL
        .iter()
        .map(|tab| {
            Tab::new(
                tab.name(),
                Message::Equipment(EquipmentMessage::TabSelected(*tab)),
            )
        })
        .collect();
    let active_index = EquipmentTab::ALL
        .iter()
        .position(|tab| *tab == active)
        .unwrap_or(0);
    tab_bar(tabs, active_index)
}

// =============================================================================
// QUICK ACTIONS
// =============================================================================

fn quick_action_card<'a>(
    kind: QuickActionKind,
    action: &'a QuickAction,
) -> Element<'a, Message> {
    let c = colors();
    let title = action.title.as_deref().unwrap_or(kind.label());

    let mut steps = column![].spacing(SPACING_XS + 2.0);
    for (index, step) in action.steps.iter().enumerate() {
        steps = steps.push(
            row![
                text(format!("{}.", index + 1)).size(13).color(c.text_muted),
                text(step.as_str()).size(13).color(c.text_secondary),
            ]
            .spacing(SPACING_XS + 2.0),
        );
    }

    let mut body = column![steps].spacing(SPACING_SM);
    if !action.media_refs.is_empty() {
        body = body.push(badge_with_icon(
            lucide::play().size(11),
            format!("{} media reference(s)", action.media_refs.len()),
            BadgeVariant::Info,
        ));
    }

    SectionCard::new(title, body).view()
}

fn quick_actions_tab(equipment: &Equipment) -> Element<'_, Message> {
    let ordered = equipment.ordered_quick_actions();

    if ordered.is_empty() {
        return card(
            EmptyState::new("No quick actions")
                .icon(lucide::info().size(36))
                .description("This equipment has no recorded quick actions.")
                .view(),
        );
    }

    // Two-column grid in the fixed kind order; absent kinds are skipped.
    let mut grid = column![].spacing(SPACING_MD);
    for pair in ordered.chunks(2) {
        let mut grid_row = row![].spacing(SPACING_MD);
        for &(kind, action) in pair {
            grid_row = grid_row.push(container(quick_action_card(kind, action)).width(Length::Fill));
        }
        if pair.len() == 1 {
            grid_row = grid_row.push(Space::new().width(Length::Fill));
        }
        grid = grid.push(grid_row);
    }
    grid.into()
}

// =============================================================================
// PROGRAMS
// =============================================================================

fn program_header(program: &EquipmentProgram) -> Element<'_, Message> {
    let c = colors();
    let mut header = row![].spacing(SPACING_SM).align_y(iced::Alignment::Center);

    if let Some(code) = &program.program_code {
        header = header.push(badge(code.clone(), BadgeVariant::Neutral));
    }

    let mut name_col = column![text(program.name.as_str()).size(14).color(c.text_primary)];
    if let Some(purpose) = &program.purpose {
        name_col = name_col.push(text(purpose.as_str()).size(12).color(c.text_muted));
    }
    header = header.push(name_col);
    header = header.push(Space::new().width(Length::Fill));

    if let Some(minutes) = program.time_minutes {
        header = header.push(badge_with_icon(
            lucide::timer().size(11),
            format_minutes(Some(minutes)),
            BadgeVariant::Outline,
        ));
    }
    if let Some(display) = program.temperature.as_ref().and_then(|t| t.display()) {
        header = header.push(badge_with_icon(
            lucide::thermometer().size(11),
            display,
            BadgeVariant::Outline,
        ));
    }

    header.into()
}

fn program_body(program: &EquipmentProgram) -> Element<'_, Message> {
    let c = colors();
    let mut body = column![].spacing(SPACING_SM);

    body = body.push(text("Button Sequence:").size(13).color(c.text_primary));
    let mut sequence = column![].spacing(SPACING_XS);
    for (index, step) in program.button_sequence.iter().enumerate() {
        sequence = sequence.push(
            text(format!("{}. {step}", index + 1))
                .size(13)
                .color(c.text_secondary),
        );
    }
    body = body.push(sequence);

    if !program.settings.is_empty() {
        body = body.push(text("Settings:").size(13).color(c.text_primary));
        let mut settings_row = row![].spacing(SPACING_SM);
        for setting in &program.settings {
            settings_row = settings_row.push(panel(
                column![
                    text(setting.key.as_str()).size(11).color(c.text_muted),
                    text(setting.value.as_str()).size(13).color(c.text_primary),
                ]
                .spacing(2.0),
            ));
        }
        body = body.push(settings_row);
    }

    if !program.common_mistakes.is_empty() {
        body = body.push(text("Common Mistakes:").size(13).color(c.text_primary));
        let mut mistakes = column![].spacing(SPACING_XS);
        for mistake in &program.common_mistakes {
            mistakes = mistakes.push(
                row![
                    container(lucide::triangle_alert().size(13)).style(move |_theme| {
                        container::Style {
                            text_color: Some(c.status_warning),
                            ..Default::default()
                        }
                    }),
                    text(mistake.as_str()).size(13).color(c.text_secondary),
                ]
                .spacing(SPACING_XS + 2.0)
                .align_y(iced::Alignment::Center),
            );
        }
        body = body.push(mistakes);
    }

    if !program.verification.is_empty() {
        body = body.push(text("Verification:").size(13).color(c.text_primary));
        let mut checks = column![].spacing(SPACING_XS);
        for check in &program.verification {
            checks = checks.push(
                row![
                    container(lucide::circle_check().size(13)).style(move |_theme| {
                        container::Style {
                            text_color: Some(c.status_success),
                            ..Default::default()
                        }
                    }),
                    text(check.as_str()).size(13).color(c.text_secondary),
                ]
                .spacing(SPACING_XS + 2.0)
                .align_y(iced::Alignment::Center),
            );
        }
        body = body.push(checks);
    }

    body.into()
}

fn programs_tab<'a>(equipment: &'a Equipment, ui: &'a EquipmentUiState) -> Element<'a, Message> {
    let c = colors();

    if equipment.programs.is_empty() {
        return card(
            EmptyState::new("No programs configured")
                .icon(lucide::info().size(36))
                .description("No programs configured for this equipment.")
                .view(),
        );
    }

    let mut content = column![text("Programs Library").size(18).color(c.text_primary)]
        .spacing(SPACING_MD);

    for (index, program) in equipment.programs.iter().enumerate() {
        // Each card expands independently.
        let expanded = ui.is_program_expanded(index);
        content = content.push(collapsible(
            program_header(program),
            expanded,
            Message::Equipment(EquipmentMessage::ProgramToggled(index)),
            program_body(program),
        ));
    }

    content.into()
}

// =============================================================================
// TROUBLESHOOTING
// =============================================================================

fn troubleshooting_tab<'a>(
    equipment: &'a Equipment,
    ui: &'a EquipmentUiState,
) -> Element<'a, Message> {
    let c = colors();

    if equipment.error_codes.is_empty() && equipment.troubleshooting.is_empty() {
        return card(
            EmptyState::new("No troubleshooting information")
                .icon(lucide::info().size(36))
                .description("No troubleshooting information available.")
                .view(),
        );
    }

    let mut content = column![].spacing(SPACING_MD);

    if !equipment.error_codes.is_empty() {
        let columns = [
            TableColumn::portion("Code", 1),
            TableColumn::portion("Meaning", 2),
            TableColumn::portion("Immediate Action", 3),
        ];
        let rows: Vec<Vec<String>> = equipment
            .error_codes
            .iter()
            .map(|error_code| {
                vec![
                    error_code.code.clone(),
                    error_code
                        .meaning
                        .clone()
                        .unwrap_or_else(|| "\u{2014}".to_string()),
                    error_code
                        .immediate_action
                        .clone()
                        .unwrap_or_else(|| "\u{2014}".to_string()),
                ]
            })
            .collect();
        content =
            content.push(SectionCard::new("Error Codes", simple_table(&columns, rows)).view());
    }

    if !equipment.troubleshooting.is_empty() {
        content = content.push(text("Troubleshooting Guide").size(18).color(c.text_primary));
        for (index, item) in equipment.troubleshooting.iter().enumerate() {
            let open = ui.open_troubleshooting.get(index).copied().unwrap_or(false);
            content = content.push(collapsible(
                troubleshooting_header(&item.symptom),
                open,
                Message::Equipment(EquipmentMessage::TroubleshootingToggled(index)),
                troubleshooting_body(item),
            ));
        }
    }

    content.into()
}
