//! Shared color constants and `#RRGGBB` helpers for the UI.

use egui::Color32;

/// Forest green color for healthy/available/success status.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red color for error/unavailable/failed status.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber color for checking/pending status.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Preset swatches offered by the color picker.
pub const PRESET_PALETTE: [&str; 12] = [
    "#000000", "#FFFFFF", "#DC3545", "#FD7E14", "#FFC107", "#28A745", "#20C997", "#17A2B8",
    "#007BFF", "#6610F2", "#6F42C1", "#E83E8C",
];

/// Parses a `#RRGGBB` string. Shorthand (`#RGB`) and alpha channels are not
/// part of the backend's color format and are rejected.
pub fn parse_hex_color(value: &str) -> Option<[u8; 3]> {
    let hex = value.strip_prefix('#')?;
    // Byte-length gate plus ASCII check, so the digit slices below always
    // land on char boundaries of the user-typed string.
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}

/// Formats an RGB triple as `#RRGGBB` (uppercase, as the backend expects).
pub fn format_hex_color(rgb: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}
