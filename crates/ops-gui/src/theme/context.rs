//! Thread-local theme context for zero-parameter color access.
//!
//! Resolved colors are cached here once per theme change, so view and
//! component code can call [`colors()`] anywhere instead of threading a
//! config reference through the whole call hierarchy.

use std::cell::RefCell;

use super::ThemeMode;
use super::palette::{self, ResolvedColors};

struct ThemeContext {
    mode: ThemeMode,
    system_is_dark: bool,
    colors: ResolvedColors,
}

thread_local! {
    static THEME_CONTEXT: RefCell<ThemeContext> = const {
        RefCell::new(ThemeContext {
            mode: ThemeMode::Light,
            system_is_dark: false,
            colors: palette::LIGHT,
        })
    };
}

/// Initialize or update the theme context.
///
/// Call in `App::new()`, when the user picks a theme mode, and when the
/// system theme changes while in `System` mode.
pub fn set_theme(mode: ThemeMode, system_is_dark: bool) {
    THEME_CONTEXT.with(|ctx| {
        let mut ctx = ctx.borrow_mut();
        ctx.mode = mode;
        ctx.system_is_dark = system_is_dark;
        ctx.colors = if mode.is_dark(system_is_dark) {
            palette::DARK
        } else {
            palette::LIGHT
        };
    });
}

/// The current resolved colors. Main API for theme access in views.
pub fn colors() -> ResolvedColors {
    THEME_CONTEXT.with(|ctx| ctx.borrow().colors)
}

/// Whether the current effective theme is dark.
pub fn is_dark() -> bool {
    THEME_CONTEXT.with(|ctx| {
        let ctx = ctx.borrow();
        ctx.mode.is_dark(ctx.system_is_dark)
    })
}
