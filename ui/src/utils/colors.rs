//! Shared color constants for the UI.

use egui::Color32;

/// Subtle gray around the overview table.
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Amber arrow next to the header the table is sorted by.
pub const SORT_INDICATOR_COLOR: Color32 = Color32::from_rgb(255, 193, 7);

/// Forest green for cities celebrating We Love The King Day.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red for cities in resistance or being razed.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);
