use cityview_business::SortState;

use crate::{state::State, widgets};

/// Storage key of the persisted sort order.
const SORT_KEY: &str = "city_overview_sort";

pub struct CityViewApp {
    state: State,
}

impl CityViewApp {
    pub fn new(state: State) -> Self {
        Self { state }
    }

    /// Called once before the first frame. Restores the sort order of the
    /// previous session when one was saved.
    pub fn with_storage(mut state: State, storage: Option<&dyn eframe::Storage>) -> Self {
        let saved = storage.and_then(|storage| eframe::get_value::<SortState>(storage, SORT_KEY));
        if let Some(sort) = saved {
            log::debug!("restored sort order {sort:?}");
            state.sort = sort;
            state.sort.reset_if_hidden(&state.registry, &state.game);
        }
        Self::new(state)
    }

    pub fn state(&self) -> &State {
        &self.state
    }
}

impl eframe::App for CityViewApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong(&self.state.game.civilization);
                ui.separator();
                ui.label(format!("{} cities", self.state.game.cities.len()));
                if let Some(unit) = &self.state.navigation.selected_unit {
                    ui.separator();
                    ui.label(format!("Selected unit: {unit}"));
                }
            });
        });

        egui::SidePanel::right("notifications_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                widgets::notifications_list(ui, &mut self.state.navigation.notifications);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            // Dispatch after the table releases the state.
            if let Some(action) = widgets::overview_table(ui, &mut self.state) {
                action.dispatch(&mut self.state.navigation, &self.state.game);
            }
        });

        widgets::city_window(
            ctx,
            &self.state.game.cities,
            &mut self.state.navigation.city_screen,
        );
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, SORT_KEY, &self.state.sort);
    }
}
