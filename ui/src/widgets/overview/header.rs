//! Header row of the overview table.

use cityview_business::{ColumnDescriptor, ElementKind, SortState};
use egui::{Label, Response, RichText, Sense, Ui};
use egui_extras::TableRow;

use crate::icons::{IconCatalog, paint_icon};
use crate::utils::colors::SORT_INDICATOR_COLOR;

/// Renders one header cell per column.
///
/// Returns the column whose header was clicked, if any.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    columns: &[&'static ColumnDescriptor],
    sort: SortState,
    icon_size: f32,
    icons: &IconCatalog,
) -> Option<&'static ColumnDescriptor> {
    let mut clicked = None;

    for &column in columns {
        header.col(|ui| {
            if render_header_cell(ui, column, sort, icon_size, icons).clicked() {
                clicked = Some(column);
            }
        });
    }

    clicked
}

/// Icon when the atlas knows it, otherwise the bold header label.
fn render_header_cell(
    ui: &mut Ui,
    column: &ColumnDescriptor,
    sort: SortState,
    icon_size: f32,
    icons: &IconCatalog,
) -> Response {
    ui.horizontal_centered(|ui| {
        let response = match column.header_icon(icon_size, icons).map(|element| element.kind) {
            Some(ElementKind::Icon(icon)) => paint_icon(ui, &icon, icons, column.header_label()),
            _ => ui.add(
                Label::new(RichText::new(column.header_label()).strong()).sense(Sense::click()),
            ),
        };

        if sort.column == column.kind {
            let arrow = if sort.descending { "⏷" } else { "⏶" };
            ui.label(RichText::new(arrow).small().color(SORT_INDICATOR_COLOR));
        }

        response.on_hover_text(column.header_tip())
    })
    .inner
}
