//! Table column sizing from the descriptors' layout hints.

use cityview_business::ColumnDescriptor;
use egui_extras::Column;

/// Minimum width of the column that fills its cells (the city names).
pub const FILL_MIN_WIDTH: f32 = 110.0;
/// Minimum width of the column that takes the leftover space.
pub const EXPAND_MIN_WIDTH: f32 = 140.0;
pub const HEADER_PADDING: f32 = 8.0;
pub const ROW_PADDING: f32 = 6.0;

/// Rows grow to two lines when any visible column equalizes heights.
const EQUALIZED_LINES: f32 = 2.0;
const LINE_HEIGHT: f32 = 16.0;

/// Sizing for one descriptor's column.
#[inline]
pub fn table_column(column: &ColumnDescriptor, icon_size: f32) -> Column {
    if column.expand_x {
        Column::remainder().at_least(EXPAND_MIN_WIDTH)
    } else if column.fill_x {
        Column::auto().at_least(FILL_MIN_WIDTH)
    } else {
        Column::auto().at_least(icon_size + ROW_PADDING)
    }
}

pub fn header_height(icon_size: f32) -> f32 {
    icon_size + HEADER_PADDING
}

pub fn row_height(columns: &[&ColumnDescriptor], icon_size: f32) -> f32 {
    let single = icon_size + ROW_PADDING;
    if columns.iter().any(|column| column.equalize_height) {
        single.max(EQUALIZED_LINES * LINE_HEIGHT + ROW_PADDING)
    } else {
        single
    }
}
