use cityview_business::{CityColumn, Element, GameInfo};
use cityview_ui::state::State;
use cityview_ui::widgets::overview::render_element;
use egui::Align;
use egui_kittest::Harness;

pub const DEMO_GAME: &str = include_str!("../../assets/demo_game.json");

pub fn demo_game() -> GameInfo {
    GameInfo::from_json(DEMO_GAME).expect("bundled demo game should parse")
}

pub fn demo_state() -> State {
    State::test(demo_game())
}

/// The element `column` renders for `city` in the demo game.
#[allow(unused)]
pub fn demo_element(state: &State, column: CityColumn, city: &str) -> Element {
    let city = state.game.city(city).expect("demo city should exist");
    state
        .registry
        .get(column)
        .entry_element(city, state.config.icon_size(), &state.icons)
        .expect("demo cell should not be empty")
}

/// Renders a single cell element on its own and dispatches whatever it
/// returns when clicked.
///
/// Clicks inside egui_extras table rows do not reach the widgets under
/// kittest, so clickable cells are exercised outside the table.
#[allow(unused)]
pub fn cell_harness<'a>(element: Element, state: State) -> Harness<'a, State> {
    Harness::new_ui_state(
        move |ui, state: &mut State| {
            if let Some(action) = render_element(ui, &element, Align::Center, &state.icons) {
                action.dispatch(&mut state.navigation, &state.game);
            }
        },
        state,
    )
}
