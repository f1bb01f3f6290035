//! Body and totals rows of the overview table.

use cityview_business::{CellAction, City, ColumnDescriptor};
use egui::{Stroke, Ui};
use egui_extras::TableRow;

use super::cells::render_element;
use crate::icons::IconCatalog;

/// Renders the cells of one city. Columns without an element for this city
/// stay empty.
#[inline]
pub fn render_city_row(
    row: &mut TableRow<'_, '_>,
    columns: &[&'static ColumnDescriptor],
    city: &City,
    icon_size: f32,
    icons: &IconCatalog,
) -> Option<CellAction> {
    let mut action = None;

    for column in columns {
        row.col(|ui| {
            if let Some(element) = column.entry_element(city, icon_size, icons)
                && let Some(clicked) = render_element(ui, &element, column.align, icons)
            {
                action = Some(clicked);
            }
            draw_cell_bottom_border(ui);
        });
    }

    action
}

/// Renders the aggregate of every column over `cities`.
#[inline]
pub fn render_totals_row(
    row: &mut TableRow<'_, '_>,
    columns: &[&'static ColumnDescriptor],
    cities: &[&City],
    icons: &IconCatalog,
) -> Option<CellAction> {
    let mut action = None;

    for column in columns {
        row.col(|ui| {
            if let Some(element) = column.totals_element(cities.iter().copied())
                && let Some(clicked) = render_element(ui, &element, column.align, icons)
            {
                action = Some(clicked);
            }
        });
    }

    action
}

#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.available_rect_before_wrap();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
