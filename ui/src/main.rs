#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context as _;
use cityview_business::{GameInfo, OverviewConfig};
use cityview_ui::state::State;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

const DEMO_GAME: &str = include_str!("../assets/demo_game.json");

/// Reads the game named on the command line, or the bundled demo game.
fn load_game() -> anyhow::Result<GameInfo> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading game from {path}");
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read game file {path}"))?;
            GameInfo::from_json(&json).with_context(|| format!("failed to parse game file {path}"))
        }
        None => GameInfo::from_json(DEMO_GAME).context("failed to parse the bundled demo game"),
    }
}

fn main() -> anyhow::Result<()> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    let config = OverviewConfig::init().unwrap_or_else(|err| {
        log::warn!("ignoring invalid configuration: {err:#}");
        OverviewConfig::default()
    });
    let game = load_game()?;
    let state = State::new(game, config)?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 520.0])
            .with_min_inner_size([480.0, 240.0]),
        ..Default::default()
    };

    eframe::run_native(
        "City overview",
        native_options,
        Box::new(move |cc| {
            let app = cityview_ui::CityViewApp::with_storage(state, cc.storage);
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to run the overview window: {err}"))
}
