//! Spacing constants for consistent layout throughout the application.
//!
//! All values are in pixels (f32) and follow a consistent scale.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - page margins, large separations
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Small radius - buttons, inputs, chips
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius - cards, panels
pub const BORDER_RADIUS_MD: f32 = 6.0;

/// Large radius - modals, feature cards
pub const BORDER_RADIUS_LG: f32 = 8.0;

/// Full/pill radius - tags, badges
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

// =============================================================================
// BORDER WIDTHS
// =============================================================================

/// Thin border - subtle separators
pub const BORDER_WIDTH_THIN: f32 = 1.0;

/// Medium border - emphasis borders
pub const BORDER_WIDTH_MEDIUM: f32 = 2.0;

// =============================================================================
// LAYOUT WIDTHS
// =============================================================================

/// Sidebar width - document navigation
pub const SIDEBAR_WIDTH: f32 = 280.0;

/// Maximum content column width in the reading pane
pub const CONTENT_MAX_WIDTH: f32 = 960.0;

// =============================================================================
// TAB BAR
// =============================================================================

/// Tab item padding horizontal
pub const TAB_PADDING_X: f32 = 16.0;

/// Tab item padding vertical
pub const TAB_PADDING_Y: f32 = 8.0;

// =============================================================================
// TABLES
// =============================================================================

/// Table cell padding horizontal
pub const TABLE_CELL_PADDING_X: f32 = 12.0;

/// Table cell padding vertical
pub const TABLE_CELL_PADDING_Y: f32 = 8.0;
