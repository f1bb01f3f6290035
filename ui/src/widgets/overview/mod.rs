//! The sortable city overview table.
//!
//! Split the same way as the other tables of the app:
//! - `columns`: sizing from the descriptors' layout hints
//! - `header`: clickable, sortable headers
//! - `row`: city rows and the totals row
//! - `cells`: painting of a single cell element

mod cells;
pub mod columns;
pub mod header;
pub mod row;

pub use cells::render_element;

use cityview_business::{CellAction, ColumnDescriptor};
use egui::{Frame, Margin, ScrollArea, Stroke, Ui};
use egui_extras::TableBuilder;

use crate::state::State;
use crate::utils::colors::TABLE_BORDER_COLOR;
use columns::{header_height, row_height, table_column};
use header::render_table_header;
use row::{render_city_row, render_totals_row};

/// Shows the overview of every city of the player's civilization.
///
/// Header clicks re-sort the table in place. A clicked cell's action is
/// returned so the caller can dispatch it once the table is done borrowing
/// the state.
pub fn overview_table(ui: &mut Ui, state: &mut State) -> Option<CellAction> {
    let State {
        game,
        config,
        registry,
        icons,
        sort,
        ..
    } = state;

    sort.reset_if_hidden(registry, game);

    let icon_size = config.icon_size();
    let collator = config.collator();
    let columns: Vec<&'static ColumnDescriptor> = registry.visible(game).collect();
    let cities = sort.sort(&game.cities, registry, &collator);
    let current_sort = *sort;

    let mut action = None;
    let mut selected = None;

    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::ZERO)
        .show(ui, |ui| {
            ScrollArea::horizontal().show(ui, |ui| {
                let mut table = TableBuilder::new(ui)
                    .id_salt("city_overview")
                    .striped(true)
                    .resizable(false)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center));

                for column in &columns {
                    table = table.column(table_column(column, icon_size));
                }

                let body_height = row_height(&columns, icon_size);

                table
                    .header(header_height(icon_size), |mut header| {
                        selected = render_table_header(
                            &mut header,
                            &columns,
                            current_sort,
                            icon_size,
                            icons,
                        );
                    })
                    .body(|mut body| {
                        for city in &cities {
                            body.row(body_height, |mut row| {
                                if let Some(clicked) =
                                    render_city_row(&mut row, &columns, city, icon_size, icons)
                                {
                                    action = Some(clicked);
                                }
                            });
                        }

                        body.row(body_height, |mut row| {
                            if let Some(clicked) =
                                render_totals_row(&mut row, &columns, &cities, icons)
                            {
                                action = Some(clicked);
                            }
                        });
                    });
            });
        });

    if let Some(column) = selected {
        sort.select(column);
    }

    action
}
