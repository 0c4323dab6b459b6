//! Shared color constants for the UI.

use egui::Color32;

/// Light green background for young ages.
pub const AGE_YOUNG_BG: Color32 = Color32::from_rgba_premultiplied(77, 125, 58, 125);

/// Rose background for ages over 50.
pub const AGE_OLD_BG: Color32 = Color32::from_rgb(212, 116, 131);

/// Dark blue text on coloured age cells.
pub const AGE_TEXT: Color32 = Color32::from_rgb(26, 62, 114);

/// Background of search matches.
pub const HIGHLIGHT_BG: Color32 = Color32::from_rgb(255, 192, 105);

/// Subtle gray used for table borders.
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Red for destructive actions.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Picks the background and text colours of an age cell.
pub type AgeColors = fn(u8) -> Option<(Color32, Color32)>;

/// Grid view ages: under 50 young, over 50 old, exactly 50 unstyled.
pub fn age_colors(age: u8) -> Option<(Color32, Color32)> {
    match age {
        0..50 => Some((AGE_YOUNG_BG, AGE_TEXT)),
        51.. => Some((AGE_OLD_BG, AGE_TEXT)),
        50 => None,
    }
}

/// Table view ages: over 50 old, everything else young.
pub fn table_age_colors(age: u8) -> Option<(Color32, Color32)> {
    if age > 50 {
        Some((AGE_OLD_BG, AGE_TEXT))
    } else {
        Some((AGE_YOUNG_BG, AGE_TEXT))
    }
}
