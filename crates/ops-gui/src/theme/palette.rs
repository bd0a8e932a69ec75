//! Color palettes for light and dark mode.
//!
//! Colors are pre-resolved into a [`ResolvedColors`] struct once per
//! theme change and cached in the thread-local context (see
//! [`crate::theme::context`]), so view code never threads a config
//! parameter around.

use iced::Color;

use ops_model::DocumentType;

/// Builds a `Color` from 8-bit RGB components.
const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color {
        r: r as f32 / 255.0,
        g: g as f32 / 255.0,
        b: b as f32 / 255.0,
        a: 1.0,
    }
}

/// Every color the UI draws with, resolved for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedColors {
    // Surfaces
    pub background_primary: Color,
    pub background_secondary: Color,
    pub background_elevated: Color,
    pub background_inset: Color,

    // Borders
    pub border_default: Color,
    pub border_subtle: Color,
    pub border_focused: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub text_on_accent: Color,

    // Accent
    pub accent_primary: Color,
    pub accent_hover: Color,
    pub accent_pressed: Color,

    // Status
    pub status_success: Color,
    pub status_success_light: Color,
    pub status_warning: Color,
    pub status_warning_light: Color,
    pub status_error: Color,
    pub status_error_light: Color,
    pub status_info: Color,
    pub status_info_light: Color,

    // Per-document-type accents
    pub type_recipe: Color,
    pub type_sop: Color,
    pub type_checklist: Color,
    pub type_equipment: Color,
    pub type_guide: Color,
    pub type_unknown: Color,

    pub shadow: Color,
}

impl ResolvedColors {
    /// Accent color for a document type badge/icon; the neutral color
    /// for unrecognized documents.
    pub fn document_type(&self, doc_type: Option<DocumentType>) -> Color {
        match doc_type {
            Some(DocumentType::Recipe) => self.type_recipe,
            Some(DocumentType::Sop) => self.type_sop,
            Some(DocumentType::Checklist) => self.type_checklist,
            Some(DocumentType::Equipment) => self.type_equipment,
            Some(DocumentType::Guide) => self.type_guide,
            None => self.type_unknown,
        }
    }
}

impl Default for ResolvedColors {
    fn default() -> Self {
        LIGHT
    }
}

/// Light mode palette.
pub const LIGHT: ResolvedColors = ResolvedColors {
    background_primary: rgb(0xf9, 0xfa, 0xfb),
    background_secondary: rgb(0xf3, 0xf4, 0xf6),
    background_elevated: rgb(0xff, 0xff, 0xff),
    background_inset: rgb(0xe5, 0xe7, 0xeb),

    border_default: rgb(0xe5, 0xe7, 0xeb),
    border_subtle: rgb(0xf3, 0xf4, 0xf6),
    border_focused: rgb(0x63, 0x66, 0xf1),

    text_primary: rgb(0x11, 0x18, 0x27),
    text_secondary: rgb(0x37, 0x41, 0x51),
    text_muted: rgb(0x6b, 0x72, 0x80),
    text_disabled: rgb(0x9c, 0xa3, 0xaf),
    text_on_accent: rgb(0xff, 0xff, 0xff),

    accent_primary: rgb(0x4f, 0x46, 0xe5),
    accent_hover: rgb(0x43, 0x38, 0xca),
    accent_pressed: rgb(0x37, 0x30, 0xa3),

    status_success: rgb(0x16, 0xa3, 0x4a),
    status_success_light: rgb(0xdc, 0xfc, 0xe7),
    status_warning: rgb(0xd9, 0x77, 0x06),
    status_warning_light: rgb(0xfe, 0xf3, 0xc7),
    status_error: rgb(0xdc, 0x26, 0x26),
    status_error_light: rgb(0xfe, 0xe2, 0xe2),
    status_info: rgb(0x25, 0x63, 0xeb),
    status_info_light: rgb(0xdb, 0xea, 0xfe),

    type_recipe: rgb(0xea, 0x58, 0x0c),
    type_sop: rgb(0x25, 0x63, 0xeb),
    type_checklist: rgb(0x16, 0xa3, 0x4a),
    type_equipment: rgb(0x93, 0x33, 0xea),
    type_guide: rgb(0x08, 0x91, 0xb2),
    type_unknown: rgb(0x6b, 0x72, 0x80),

    shadow: Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.08,
    },
};

/// Dark mode palette.
pub const DARK: ResolvedColors = ResolvedColors {
    background_primary: rgb(0x11, 0x18, 0x27),
    background_secondary: rgb(0x1f, 0x29, 0x37),
    background_elevated: rgb(0x1f, 0x29, 0x37),
    background_inset: rgb(0x0b, 0x10, 0x1a),

    border_default: rgb(0x37, 0x41, 0x51),
    border_subtle: rgb(0x1f, 0x29, 0x37),
    border_focused: rgb(0x81, 0x8c, 0xf8),

    text_primary: rgb(0xf9, 0xfa, 0xfb),
    text_secondary: rgb(0xd1, 0xd5, 0xdb),
    text_muted: rgb(0x9c, 0xa3, 0xaf),
    text_disabled: rgb(0x6b, 0x72, 0x80),
    text_on_accent: rgb(0xff, 0xff, 0xff),

    accent_primary: rgb(0x63, 0x66, 0xf1),
    accent_hover: rgb(0x81, 0x8c, 0xf8),
    accent_pressed: rgb(0xa5, 0xb4, 0xfc),

    status_success: rgb(0x4a, 0xde, 0x80),
    status_success_light: rgb(0x14, 0x33, 0x21),
    status_warning: rgb(0xfb, 0xbf, 0x24),
    status_warning_light: rgb(0x3a, 0x2e, 0x0a),
    status_error: rgb(0xf8, 0x71, 0x71),
    status_error_light: rgb(0x3b, 0x12, 0x12),
    status_info: rgb(0x60, 0xa5, 0xfa),
    status_info_light: rgb(0x10, 0x24, 0x3e),

    type_recipe: rgb(0xfb, 0x92, 0x3c),
    type_sop: rgb(0x60, 0xa5, 0xfa),
    type_checklist: rgb(0x4a, 0xde, 0x80),
    type_equipment: rgb(0xc0, 0x84, 0xfc),
    type_guide: rgb(0x22, 0xd3, 0xee),
    type_unknown: rgb(0x9c, 0xa3, 0xaf),

    shadow: Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.35,
    },
};
