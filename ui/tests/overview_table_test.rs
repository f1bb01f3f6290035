use crate::common::{cell_harness, demo_element, demo_game, demo_state};

mod common;

use cityview_business::{CityColumn, OverviewConfig, SortState};
use cityview_ui::CityViewApp;
use cityview_ui::state::State;
use cityview_ui::widgets::overview_table;
use egui_kittest::Harness;
use kittest::Queryable;

fn table_harness<'a>(state: State) -> Harness<'a, State> {
    let mut harness = Harness::new_ui_state(
        |ui, state: &mut State| {
            overview_table(ui, state);
        },
        state,
    );
    harness.run();
    harness
}

#[test]
fn test_demo_game_loads() {
    let game = demo_game();

    assert_eq!(game.civilization, "Rome");
    assert_eq!(game.cities.len(), 5);
    assert!(game.is_religion_enabled());
}

#[test]
fn test_table_shows_every_city_and_totals() {
    let harness = table_harness(demo_state());

    for city in ["Rome", "Antium", "Cumae", "Carthage", "Syracuse"] {
        assert!(
            harness.query_by_label(city).is_some(),
            "{city} should have a row"
        );
    }
    assert!(harness.query_by_label("Total").is_some());
    // population 12 + 7 + 5 + 9 + 3
    assert!(harness.query_all_by_label("36").next().is_some());
}

#[test]
fn test_table_labels_icons_by_tooltip() {
    let harness = table_harness(demo_state());

    assert!(harness.query_by_label("Demanding Silk").is_some());
    assert!(harness.query_by_label("Legio X (Legion)").is_some());
    assert!(harness.query_by_label("7 turns").is_some());
}

#[test]
fn test_faith_column_follows_religion() {
    let mut game = demo_game();
    game.religion_enabled = false;
    let harness = table_harness(State::test(game));
    assert!(harness.query_by_label("Faith").is_none());
    assert!(harness.query_by_label("Population").is_some());

    let harness = table_harness(demo_state());
    assert!(harness.query_by_label("Faith").is_some());
}

#[test]
fn test_city_name_click_opens_city_screen() {
    let state = demo_state();
    let element = demo_element(&state, CityColumn::Name, "Carthage");

    let mut harness = cell_harness(element, state);
    harness.run();
    harness.get_by_label("Carthage").click();
    harness.run();

    assert_eq!(
        harness.state().navigation.city_screen.as_deref(),
        Some("Carthage")
    );
}

#[test]
fn test_garrison_click_selects_unit() {
    let state = demo_state();
    let element = demo_element(&state, CityColumn::Garrison, "Carthage");

    let mut harness = cell_harness(element, state);
    harness.run();
    harness.get_by_label("Archer").click();
    harness.run();

    assert_eq!(
        harness.state().navigation.selected_unit.as_deref(),
        Some("Archer@12,-7")
    );
}

#[test]
fn test_demand_click_lists_explored_resources() {
    let state = demo_state();
    let element = demo_element(&state, CityColumn::WeLoveTheKing, "Antium");

    let mut harness = cell_harness(element, state);
    harness.run();
    harness.get_by_label("Demanding Silk").click();
    harness.run();

    let notifications = &harness.state().navigation.notifications;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].text, "[Silk] found at 2 locations");
    assert_eq!(notifications[0].locations, vec!["4,2", "7,-3"]);
}

#[test]
fn test_unexplored_demand_notifies_nothing_found() {
    let state = demo_state();
    let element = demo_element(&state, CityColumn::WeLoveTheKing, "Cumae");

    let mut harness = cell_harness(element, state);
    harness.run();
    harness.get_by_label("Demanding Incense").click();
    harness.run();

    let notifications = &harness.state().navigation.notifications;
    assert_eq!(notifications.len(), 1);
    assert_eq!(
        notifications[0].text,
        "No [Incense] found in explored territory"
    );
}

#[test]
fn test_app_renders_panels() {
    let mut harness = Harness::new_eframe(|_| CityViewApp::new(demo_state()));
    harness.run();

    assert!(harness.query_by_label("5 cities").is_some());
    assert!(harness.query_by_label("Notifications").is_some());
    assert!(harness.query_by_label("Nothing new").is_some());
    assert_eq!(harness.state().state().sort, SortState::default());
}

#[test]
fn test_app_without_storage_keeps_configured_sort() {
    let app = CityViewApp::with_storage(demo_state(), None);

    assert_eq!(app.state().sort, SortState::default());
}

#[test]
fn test_configured_sort_on_hidden_faith_is_ignored() {
    let config = OverviewConfig::from_vars(vec![("CITYVIEW_SORT_COLUMN", "Faith")])
        .expect("config should build");
    let mut game = demo_game();
    game.religion_enabled = false;

    let state = State::new(game, config).expect("built-in columns must validate");

    assert_eq!(state.sort, SortState::default());
}
