//! Brand palette
//!
//! Named colors from the SurfTrak design system. Functions rather than
//! constants because hex decoding isn't `const`.

use surftrak_core::Color;

pub fn ocean_blue() -> Color {
    Color::from_hex(0x1A73E8)
}

pub fn deep_cerulean() -> Color {
    Color::from_hex(0x0056B3)
}

pub fn lighter_azure() -> Color {
    Color::from_hex(0x2F95DC)
}

pub fn surf_blue() -> Color {
    Color::from_hex(0x4AB1FF)
}

pub fn navy() -> Color {
    Color::from_hex(0x003B7A)
}

/// App background (gray-50)
pub fn background() -> Color {
    Color::from_hex(0xF9FAFB)
}

pub fn surface() -> Color {
    Color::WHITE
}

/// Headline text (gray-800)
pub fn text_primary() -> Color {
    Color::from_hex(0x1F2937)
}

/// Secondary text (gray-500)
pub fn text_muted() -> Color {
    Color::from_hex(0x6B7280)
}

/// Icon button wells (blue-50)
pub fn accent_well() -> Color {
    Color::from_hex(0xEFF6FF)
}

pub fn tab_active() -> Color {
    ocean_blue()
}

pub fn tab_inactive() -> Color {
    Color::from_hex(0x94A3B8)
}

/// Translucent white used over gradients
pub fn frost(alpha: f32) -> Color {
    Color::WHITE.with_alpha(alpha)
}
