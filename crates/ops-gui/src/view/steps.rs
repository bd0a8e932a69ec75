//! Step card rendering shared by the recipe and SOP viewers.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Element, Length};
use iced_fonts::lucide;

use ops_model::{CalloutKind, StepCard};

use crate::component::{
    AlertVariant, BadgeVariant, alert, badge_with_icon, card, status_panel, step_indicator,
};
use crate::message::Message;
use crate::theme::{SPACING_SM, SPACING_XS, button_secondary, colors};
use crate::util::format_seconds;

pub fn callout_variant(kind: CalloutKind) -> AlertVariant {
    match kind {
        CalloutKind::Info => AlertVariant::Info,
        CalloutKind::Warning => AlertVariant::Warning,
        CalloutKind::Critical => AlertVariant::Error,
        CalloutKind::Tip => AlertVariant::Success,
    }
}

/// One step card: indicator, instruction block, and a done toggle.
///
/// Every optional field renders nothing when absent.
pub fn view_step_card<'a>(
    index: usize,
    step: &'a StepCard,
    complete: bool,
    on_toggle: Message,
) -> Element<'a, Message> {
    let c = colors();

    let indicator = button(step_indicator(index + 1, complete))
        .on_press(on_toggle.clone())
        .padding(0)
        .style(|_theme, _status| button::Style {
            background: None,
            ..Default::default()
        });

    let mut body = column![].spacing(SPACING_SM);

    if let Some(title) = &step.title {
        body = body.push(text(title.as_str()).size(16).color(c.text_primary));
    }
    body = body.push(text(step.instruction.as_str()).size(14).color(c.text_secondary));

    if !step.key_points.is_empty() {
        let mut points = column![].spacing(SPACING_XS);
        points = points.push(text("Key Points:").size(13).color(c.text_muted));
        for point in &step.key_points {
            points = points.push(
                text(format!("\u{2022} {point}"))
                    .size(13)
                    .color(c.text_secondary),
            );
        }
        body = body.push(points);
    }

    if let Some(why) = &step.why_callout {
        body = body.push(alert(
            callout_variant(why.callout_type),
            why.title.as_deref(),
            text(why.text.as_str()).size(13).color(c.text_secondary),
        ));
    }

    let mut badges = row![].spacing(SPACING_SM).align_y(iced::Alignment::Center);
    let mut has_badges = false;
    if let Some(seconds) = step.timer_seconds {
        badges = badges.push(badge_with_icon(
            lucide::timer().size(12),
            format_seconds(seconds),
            BadgeVariant::Outline,
        ));
        has_badges = true;
    }
    if !step.media_refs.is_empty() {
        badges = badges.push(badge_with_icon(
            lucide::play().size(12),
            format!("{} media", step.media_refs.len()),
            BadgeVariant::Info,
        ));
        has_badges = true;
    }
    if has_badges {
        body = body.push(badges);
    }

    if !step.critical_control_points.is_empty() {
        let mut ccps = column![].spacing(SPACING_XS);
        for ccp in &step.critical_control_points {
            let mut line = format!("{}: {}", ccp.metric, ccp.target_text());
            if let Some(note) = &ccp.note {
                line.push_str(&format!(" ({note})"));
            }
            ccps = ccps.push(
                row![
                    container(lucide::thermometer().size(14)).style(move |_theme| {
                        container::Style {
                            text_color: Some(c.status_warning),
                            ..Default::default()
                        }
                    }),
                    text(line).size(13).color(c.text_secondary),
                ]
                .spacing(SPACING_XS + 2.0)
                .align_y(iced::Alignment::Center),
            );
        }
        body = body.push(alert(
            AlertVariant::Warning,
            Some("Critical Control Point"),
            ccps,
        ));
    }

    let toggle_label = if complete { "Done \u{2713}" } else { "Mark Done" };
    let toggle = button(text(toggle_label).size(13))
        .on_press(on_toggle)
        .padding([6.0, 12.0])
        .style(button_secondary);

    let content = row![
        indicator,
        body.width(Length::Fill),
        toggle,
    ]
    .spacing(SPACING_SM * 2.0)
    .align_y(iced::Alignment::Start);

    if complete {
        status_panel(content, c.status_success, Some(c.status_success_light))
    } else {
        card(content)
    }
}

/// The green affirmation card shown at 100% completion. Cosmetic only.
pub fn completion_banner<'a>(
    title: impl Into<String>,
    caption: impl Into<String>,
) -> Element<'a, Message> {
    let c = colors();
    status_panel(
        row![
            container(lucide::circle_check().size(32)).style(move |_theme| container::Style {
                text_color: Some(c.status_success),
                ..Default::default()
            }),
            column![
                text(title.into()).size(18).color(c.status_success),
                text(caption.into()).size(13).color(c.text_secondary),
            ]
            .spacing(2.0),
            Space::new().width(Length::Fill),
        ]
        .spacing(SPACING_SM * 2.0)
        .align_y(iced::Alignment::Center),
        c.status_success,
        Some(c.status_success_light),
    )
}
