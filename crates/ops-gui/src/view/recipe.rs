//! Recipe viewer.

use iced::widget::{Space, button, column, container, pick_list, row, text};
use iced::{Element, Length};

use ops_model::recipe::{CookingModeSpec, RecipeIngredient};
use ops_model::{OperationalDocument, Recipe};

use crate::component::{
    BadgeVariant, ProgressBar, SectionCard, Tab, TableColumn, badge, card, panel, simple_table,
    tab_bar,
};
use crate::message::{Message, RecipeMessage};
use crate::state::{BatchScale, RecipeTab, RecipeUiState};
use crate::theme::{SPACING_MD, SPACING_SM, SPACING_XS, button_ghost, colors};
use crate::util::{format_minutes, format_scaled_qty};
use crate::view::header::view_document_header;
use crate::view::steps::{completion_banner, view_step_card};

pub fn view_recipe<'a>(
    document: &'a OperationalDocument,
    recipe: &'a Recipe,
    ui: &'a RecipeUiState,
) -> Element<'a, Message> {
    let progress = ui.progress(&recipe.steps);

    let mut content = column![
        view_document_header(document),
        summary_card(recipe),
        scale_and_progress_card(recipe, ui),
        tabs(ui.tab),
        match ui.tab {
            RecipeTab::Overview => overview_tab(recipe),
            RecipeTab::Ingredients => ingredients_tab(recipe, ui.scale),
            RecipeTab::Method => method_tab(recipe, ui),
            RecipeTab::Plating => plating_tab(recipe),
        },
    ]
    .spacing(SPACING_MD);

    if progress == 100 {
        content = content.push(completion_banner(
            "Recipe Complete!",
            "Great job! You have finished all the steps.",
        ));
    }

    content.into()
}

// =============================================================================
// SUMMARY + SCALE
// =============================================================================

fn summary_cell<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    let c = colors();
    column![
        text(label).size(11).color(c.text_disabled),
        text(value).size(16).color(c.text_primary),
    ]
    .spacing(SPACING_XS)
    .align_x(iced::Alignment::Center)
    .width(Length::Fill)
    .into()
}

fn summary_card(recipe: &Recipe) -> Element<'_, Message> {
    let yield_text = match (recipe.yield_spec.amount, &recipe.yield_spec.unit) {
        (Some(amount), Some(unit)) => format!("{amount} {unit}"),
        (Some(amount), None) => amount.to_string(),
        _ => "\u{2014}".to_string(),
    };

    card(
        row![
            summary_cell("PREP TIME", format_minutes(recipe.prep_time_minutes)),
            summary_cell("COOK TIME", format_minutes(recipe.cook_time_minutes)),
            summary_cell("YIELD", yield_text),
            summary_cell(
                "PORTION SIZE",
                recipe
                    .portion_size
                    .clone()
                    .unwrap_or_else(|| "\u{2014}".to_string()),
            ),
        ]
        .spacing(SPACING_MD),
    )
}

fn scale_and_progress_card<'a>(recipe: &'a Recipe, ui: &'a RecipeUiState) -> Element<'a, Message> {
    let c = colors();
    let completed = ui.completed_count(&recipe.steps);
    let progress = ui.progress(&recipe.steps);

    let scale_picker = pick_list(&BatchScale::ALL[..], Some(ui.scale), |scale| {
        Message::Recipe(RecipeMessage::ScaleChanged(scale))
    })
    .text_size(13)
    .padding([4.0, 8.0]);

    let mut controls = row![
        text("Recipe Scale").size(13).color(c.text_secondary),
        scale_picker,
        Space::new().width(Length::Fill),
        text("Progress:").size(13).color(c.text_muted),
        text(format!("{completed} of {} steps", recipe.steps.len()))
            .size(13)
            .color(c.text_primary),
    ]
    .spacing(SPACING_SM)
    .align_y(iced::Alignment::Center);

    if completed > 0 {
        controls = controls.push(
            button(text("Reset").size(13))
                .on_press(Message::Recipe(RecipeMessage::ResetProgress))
                .padding([4.0, 10.0])
                .style(button_ghost),
        );
    }

    card(
        column![
            controls,
            ProgressBar::new(progress as f32 / 100.0).view(),
        ]
        .spacing(SPACING_SM),
    )
}

fn tabs<'a>(active: RecipeTab) -> Element<'a, Message> {
    let tabs: Vec<Tab<Message>> = RecipeTab::ALL
        .iter()
        .map(|tab| Tab::new(tab.name(), Message::Recipe(RecipeMessage::TabSelected(*tab))))
        .collect();
    let active_index = RecipeTab::ALL
        .iter()
        .position(|tab| *tab == active)
        .unwrap_or(0);
    tab_bar(tabs, active_index)
}

// =============================================================================
// OVERVIEW TAB
// =============================================================================

fn cooking_mode_panel(mode: &CookingModeSpec) -> Element<'_, Message> {
    let c = colors();
    let mut lines = column![badge(mode.mode.label(), BadgeVariant::Info)].spacing(SPACING_XS);

    if let Some(minutes) = mode.time_minutes {
        lines = lines.push(
            text(format!("Time: {}", format_minutes(Some(minutes))))
                .size(13)
                .color(c.text_secondary),
        );
    }
    if let Some(display) = mode.temperature.as_ref().and_then(|t| t.display()) {
        lines = lines.push(text(format!("Temp: {display}")).size(13).color(c.text_secondary));
    }
    if let Some(code) = &mode.equipment_program_code {
        lines = lines.push(
            text(format!("Program: {code}"))
                .size(13)
                .color(c.text_secondary),
        );
    }
    if let Some(notes) = &mode.notes {
        lines = lines.push(text(notes.as_str()).size(12).color(c.text_muted));
    }

    panel(lines)
}

fn overview_tab(recipe: &Recipe) -> Element<'_, Message> {
    let c = colors();
    let mut content = column![].spacing(SPACING_MD);
    let mut has_any = false;

    if let Some(holding) = &recipe.holding_rules
        && !holding.items.is_empty()
    {
        let mut rules = column![].spacing(SPACING_XS);
        for rule in &holding.items {
            rules = rules.push(
                text(format!("\u{2022} {rule}"))
                    .size(13)
                    .color(c.text_secondary),
            );
        }
        if holding.reheat_allowed == Some(false) {
            rules = rules.push(text("Reheating is not allowed.").size(13).color(c.status_error));
        }
        content = content.push(SectionCard::new("Holding Rules", rules).view());
        has_any = true;
    }

    if let Some(shelf_life) = &recipe.shelf_life {
        content = content.push(
            SectionCard::new(
                "Shelf Life",
                text(shelf_life.as_str()).size(13).color(c.text_secondary),
            )
            .view(),
        );
        has_any = true;
    }

    if !recipe.cooking_modes.is_empty() {
        let mut grid = column![].spacing(SPACING_SM);
        for pair in recipe.cooking_modes.chunks(2) {
            let mut grid_row = row![].spacing(SPACING_SM);
            for mode in pair {
                grid_row = grid_row.push(container(cooking_mode_panel(mode)).width(Length::Fill));
            }
            if pair.len() == 1 {
                grid_row = grid_row.push(Space::new().width(Length::Fill));
            }
            grid = grid.push(grid_row);
        }
        content = content.push(SectionCard::new("Cooking Modes", grid).view());
        has_any = true;
    }

    if !has_any {
        content = content.push(card(
            text("No overview details recorded for this recipe.")
                .size(13)
                .color(c.text_muted),
        ));
    }

    content.into()
}

// =============================================================================
// INGREDIENTS TAB
// =============================================================================

/// Group ingredients preserving first-seen group order; ungrouped lines
/// land under "Other".
fn grouped_ingredients(ingredients: &[RecipeIngredient]) -> Vec<(String, Vec<&RecipeIngredient>)> {
    let mut groups: Vec<(String, Vec<&RecipeIngredient>)> = Vec::new();
    for ingredient in ingredients {
        let group = ingredient.group.as_deref().unwrap_or("Other");
        match groups.iter_mut().find(|(name, _)| name == group) {
            Some((_, members)) => members.push(ingredient),
            None => groups.push((group.to_string(), vec![ingredient])),
        }
    }
    groups
}

fn quantity_cell(quantity: Option<&ops_model::Quantity>, scale: f64) -> String {
    match quantity {
        Some(q) => {
            let amount = format_scaled_qty(q.qty, scale);
            match &q.unit {
                Some(unit) => format!("{amount} {unit}"),
                None => amount,
            }
        }
        None => "\u{2014}".to_string(),
    }
}

fn ingredients_tab(recipe: &Recipe, scale: BatchScale) -> Element<'_, Message> {
    let mut content = column![].spacing(SPACING_MD);

    if !recipe.tools_required.is_empty() {
        let mut tools = row![].spacing(SPACING_XS + 2.0);
        for tool in &recipe.tools_required {
            let label = match tool.quantity {
                Some(qty) if qty > 1 => format!("{} \u{d7}{qty}", tool.tool_name),
                _ => tool.tool_name.clone(),
            };
            tools = tools.push(badge(label, BadgeVariant::Outline));
        }
        content = content.push(SectionCard::new("Tools Required", tools).view());
    }

    let factor = scale.factor();
    let columns = [
        TableColumn::portion("Ingredient", 3),
        TableColumn::portion("Prep", 2),
        TableColumn::portion("Per Portion", 2),
        TableColumn::portion(format!("Batch ({})", scale.short_label()), 2),
    ];

    for (group_name, ingredients) in grouped_ingredients(&recipe.ingredients) {
        let rows: Vec<Vec<String>> = ingredients
            .iter()
            .map(|ing| {
                // Batch falls back to the scaled per-portion quantity.
                let batch = match (&ing.per_batch, &ing.per_portion) {
                    (Some(batch), _) => quantity_cell(Some(batch), factor),
                    (None, Some(portion)) => quantity_cell(Some(portion), factor),
                    (None, None) => "\u{2014}".to_string(),
                };
                vec![
                    ing.name.clone(),
                    ing.prep.clone().unwrap_or_else(|| "\u{2014}".to_string()),
                    quantity_cell(ing.per_portion.as_ref(), factor),
                    batch,
                ]
            })
            .collect();

        content = content.push(SectionCard::new(group_name, simple_table(&columns, rows)).view());
    }

    content.into()
}

// =============================================================================
// METHOD TAB
// =============================================================================

fn method_tab<'a>(recipe: &'a Recipe, ui: &'a RecipeUiState) -> Element<'a, Message> {
    let c = colors();
    let mut content = column![
        text("Step-by-Step Instructions").size(18).color(c.text_primary),
    ]
    .spacing(SPACING_MD);

    for (index, step) in recipe.steps.iter().enumerate() {
        let complete = ui.completed.contains(&step.id);
        content = content.push(view_step_card(
            index,
            step,
            complete,
            Message::Recipe(RecipeMessage::StepToggled(step.id.clone())),
        ));
    }

    content.into()
}

// =============================================================================
// PLATING TAB
// =============================================================================

fn plating_tab(recipe: &Recipe) -> Element<'_, Message> {
    let c = colors();
    let mut content = column![].spacing(SPACING_MD);
    let mut has_any = false;

    if let Some(plating) = &recipe.plating_guide {
        let mut instructions = column![].spacing(SPACING_XS);
        for (index, bullet) in plating.bullets.iter().enumerate() {
            instructions = instructions.push(
                text(format!("{}. {bullet}", index + 1))
                    .size(13)
                    .color(c.text_secondary),
            );
        }
        if let Some(image_ref) = &plating.reference_image_ref {
            instructions = instructions.push(
                panel(
                    text(format!("Reference image: {image_ref}"))
                        .size(12)
                        .color(c.text_muted),
                ),
            );
        }
        content = content.push(SectionCard::new("Plating Guide", instructions).view());
        has_any = true;
    }

    if !recipe.quality_checks.is_empty() {
        let mut groups = column![].spacing(SPACING_SM);
        for group in &recipe.quality_checks {
            let mut checks = column![
                text(group.group_name.as_str()).size(14).color(c.text_primary),
            ]
            .spacing(SPACING_XS);
            for check in &group.checks {
                let marker = if check.required { "\u{2713}" } else { "\u{25cb}" };
                checks = checks.push(
                    text(format!("{marker} {}", check.label))
                        .size(13)
                        .color(c.text_secondary),
                );
            }
            groups = groups.push(panel(checks));
        }
        content = content.push(SectionCard::new("Quality Control Checks", groups).view());
        has_any = true;
    }

    if !has_any {
        content = content.push(card(
            text("No plating or QC guidance recorded.")
                .size(13)
                .color(c.text_muted),
        ));
    }

    content.into()
}
