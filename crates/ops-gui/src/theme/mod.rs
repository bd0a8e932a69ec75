//! Theme module for Line Ops Studio.
//!
//! - Pre-resolved color cache (`palette`, `context`) - eliminates config
//!   parameter passing; call [`colors()`] anywhere in view code
//! - Spacing constants (`spacing`)
//! - Widget style functions (`styles`)
//!
//! Call [`set_theme`] in `App::new` and on every theme change; the
//! resolved colors are cached until the next call.

pub mod context;
pub mod palette;
pub mod spacing;
pub mod styles;

pub use context::{colors, is_dark, set_theme};
pub use palette::ResolvedColors;
pub use spacing::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_WIDTH_MEDIUM,
    BORDER_WIDTH_THIN, CONTENT_MAX_WIDTH, SIDEBAR_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM,
    SPACING_XL, SPACING_XS, TAB_PADDING_X, TAB_PADDING_Y, TABLE_CELL_PADDING_X,
    TABLE_CELL_PADDING_Y,
};
pub use styles::{
    button_ghost, button_primary, button_secondary, container_card, container_inset,
    text_input_default, text_input_error,
};

use iced::Theme;
use serde::{Deserialize, Serialize};

// =============================================================================
// THEME MODE
// =============================================================================

/// Appearance mode selected in settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    /// Follow the operating system.
    System,
}

impl ThemeMode {
    /// All modes in picker order.
    pub const ALL: [ThemeMode; 3] = [Self::Light, Self::Dark, Self::System];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    /// Resolve to a concrete dark/light decision.
    pub fn is_dark(&self, system_is_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => system_is_dark,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// ICED THEME
// =============================================================================

/// Build the Iced theme for the current mode.
///
/// The detailed styling happens through [`colors()`]; this palette only
/// seeds Iced's own defaults (text color, base background).
pub fn app_theme(mode: ThemeMode, system_is_dark: bool) -> Theme {
    let resolved = if mode.is_dark(system_is_dark) {
        palette::DARK
    } else {
        palette::LIGHT
    };

    let name = if mode.is_dark(system_is_dark) {
        "Line Ops Dark"
    } else {
        "Line Ops Light"
    };

    Theme::custom(
        name.to_string(),
        iced::theme::Palette {
            background: resolved.background_primary,
            text: resolved.text_primary,
            primary: resolved.accent_primary,
            success: resolved.status_success,
            warning: resolved.status_warning,
            danger: resolved.status_error,
        },
    )
}
