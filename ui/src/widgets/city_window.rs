//! Detail window opened by clicking a city name.

use cityview_business::{City, CityStatus, Stat};
use egui::{Context, Grid, RichText, Window};

use crate::utils::colors::{COLOR_GREEN, COLOR_RED};

/// Shows the city screen while `open` names a city. Closing the window
/// clears it.
pub fn city_window(ctx: &Context, cities: &[City], open: &mut Option<String>) {
    let Some(name) = open.clone() else {
        return;
    };
    let Some(city) = cities.iter().find(|city| city.name == name) else {
        log::warn!("city screen requested for unknown city {name}");
        *open = None;
        return;
    };

    let mut is_open = true;
    Window::new(&city.name)
        .id(egui::Id::new("city_screen"))
        .open(&mut is_open)
        .resizable(false)
        .show(ctx, |ui| city_details(ui, city));

    if !is_open {
        *open = None;
    }
}

fn city_details(ui: &mut egui::Ui, city: &City) {
    match city.status() {
        CityStatus::Normal => {}
        CityStatus::Puppet => {
            ui.label("Puppet");
        }
        CityStatus::Resistance => {
            ui.colored_label(
                COLOR_RED,
                format!("In resistance for {} turns", city.resistance_turns),
            );
        }
        CityStatus::BeingRazed => {
            ui.colored_label(COLOR_RED, "Being razed");
        }
    }
    if city.is_we_love_the_king_day_active() {
        ui.colored_label(
            COLOR_GREEN,
            format!("We Love The King Day: {} turns", city.we_love_the_king_turns),
        );
    }

    Grid::new("city_stats").num_columns(2).show(ui, |ui| {
        ui.label("Population");
        ui.label(city.population.to_string());
        ui.end_row();

        for stat in Stat::ALL {
            let value = if stat == Stat::Happiness {
                city.total_happiness()
            } else {
                cityview_business::stat::round_to_int(city.stats[stat])
            };
            ui.label(stat.name());
            ui.label(value.to_string());
            ui.end_row();
        }
    });

    ui.separator();
    let production = city.production_text();
    if production.is_empty() {
        ui.label(RichText::new("Producing nothing").italics());
    } else {
        ui.label(production);
    }
    if let Some(garrison) = &city.garrison {
        ui.label(format!("Garrison: {}", garrison.display_name()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui_kittest::Harness;
    use kittest::Queryable;

    #[test]
    fn closing_unknown_city_clears_the_selection() {
        let ctx = Context::default();
        let mut open = Some("Atlantis".to_owned());
        let _output = ctx.run(egui::RawInput::default(), |ctx| {
            city_window(ctx, &[City::new("Rome")], &mut open);
        });
        assert_eq!(open, None);
    }

    #[test]
    fn window_shows_production() {
        let mut rome = City::new("Rome");
        rome.construction = Some(cityview_business::Construction {
            name: "Library".to_owned(),
            turns: Some(4),
        });
        let cities = vec![rome];

        let mut harness = Harness::new_state(
            |ctx, open: &mut Option<String>| city_window(ctx, &cities, open),
            Some("Rome".to_owned()),
        );
        harness.run();

        assert!(harness.query_by_label_contains("Library").is_some());
        assert_eq!(harness.state().as_deref(), Some("Rome"));
    }
}
