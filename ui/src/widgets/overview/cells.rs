//! Painting of the toolkit-neutral cell elements.

use cityview_business::{CellAction, Element, ElementKind};
use egui::{Align, Label, Layout, Response, Sense, Ui};

use crate::icons::{IconCatalog, paint_icon};

/// Lays `add` out in the cell according to `align`.
#[inline]
pub fn aligned(ui: &mut Ui, align: Align, add: impl FnOnce(&mut Ui) -> Response) -> Response {
    match align {
        Align::Min => ui.with_layout(Layout::left_to_right(Align::Center), add).inner,
        Align::Center => ui.centered_and_justified(add).inner,
        Align::Max => ui.with_layout(Layout::right_to_left(Align::Center), add).inner,
    }
}

/// Renders one element and returns its action if it was clicked.
///
/// Labels use their own alignment; buttons and icons follow the column.
pub fn render_element(
    ui: &mut Ui,
    element: &Element,
    column_align: Align,
    icons: &IconCatalog,
) -> Option<CellAction> {
    let sense = if element.on_click.is_some() {
        Sense::click()
    } else {
        Sense::hover()
    };

    let response = match &element.kind {
        ElementKind::Label { text, align } => {
            aligned(ui, *align, |ui| ui.add(Label::new(text.as_str()).sense(sense)))
        }
        ElementKind::Button { text } => aligned(ui, column_align, |ui| ui.button(text.as_str())),
        ElementKind::Icon(icon) => {
            let label = element.tooltip.as_deref().unwrap_or(icon.path.as_str());
            aligned(ui, column_align, |ui| paint_icon(ui, icon, icons, label))
        }
    };

    let response = match &element.tooltip {
        Some(tooltip) => response.on_hover_text(tooltip),
        None => response,
    };

    if response.clicked() {
        element.on_click.clone()
    } else {
        None
    }
}
