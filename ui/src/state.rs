use cityview_business::{
    ActionContext, ColumnError, ColumnRegistry, GameInfo, Notification, OverviewConfig, SortState,
};

use crate::icons::IconCatalog;

/// Where cell clicks have taken the player.
#[derive(Debug, Default)]
pub struct Navigation {
    /// City whose detail window is open.
    pub city_screen: Option<String>,
    /// Unit selected in the units overview.
    pub selected_unit: Option<String>,
    pub notifications: Vec<Notification>,
}

impl ActionContext for Navigation {
    fn open_city(&mut self, city: &str) {
        log::info!("opening city screen for {city}");
        self.city_screen = Some(city.to_owned());
    }

    fn select_unit(&mut self, identifier: &str) {
        log::info!("selecting unit {identifier} in the units overview");
        self.selected_unit = Some(identifier.to_owned());
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

/// The main application state.
pub struct State {
    pub game: GameInfo,
    pub config: OverviewConfig,
    pub registry: ColumnRegistry,
    pub icons: IconCatalog,
    pub sort: SortState,
    pub navigation: Navigation,
}

impl State {
    pub fn new(game: GameInfo, config: OverviewConfig) -> Result<Self, ColumnError> {
        let registry = ColumnRegistry::new()?;
        let sort = config.initial_sort(&registry, &game);

        Ok(Self {
            game,
            config,
            registry,
            icons: IconCatalog::default(),
            sort,
            navigation: Navigation::default(),
        })
    }

    /// State with default configuration, for tests.
    pub fn test(game: GameInfo) -> Self {
        Self::new(game, OverviewConfig::default()).expect("built-in columns must validate")
    }
}
