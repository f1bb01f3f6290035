use std::env::vars;

use serde::Deserialize;

use crate::collator::{CollationStrength, LocaleCollator};
use crate::column::{CityColumn, ColumnRegistry};
use crate::game::GameInfo;
use crate::sort::SortState;

/// Prefix of the environment variables read by [`OverviewConfig::init`].
pub const ENV_PREFIX: &str = "CITYVIEW_";

const DEFAULT_ICON_SIZE: f32 = 30.0;

#[derive(Debug, Clone, Deserialize)]
struct RawConfig {
    icon_size: Option<f32>,
    collation: Option<CollationStrength>,
    sort_column: Option<CityColumn>,
    sort_descending: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewConfig {
    icon_size: f32,
    collation: CollationStrength,
    sort_column: Option<CityColumn>,
    sort_descending: Option<bool>,
}

impl Default for OverviewConfig {
    fn default() -> Self {
        Self {
            icon_size: DEFAULT_ICON_SIZE,
            collation: CollationStrength::default(),
            sort_column: None,
            sort_descending: None,
        }
    }
}

impl OverviewConfig {
    /// Reads `CITYVIEW_*` environment variables, falling back to defaults.
    pub fn init() -> anyhow::Result<Self> {
        log::info!("Loading overview configuration from environment variables");
        Self::from_vars(vars())
    }

    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> anyhow::Result<Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let prefixed: Vec<(String, String)> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                key.as_ref()
                    .strip_prefix(ENV_PREFIX)
                    .map(|key| (key.to_owned(), value.as_ref().to_owned()))
            })
            .collect();
        let raw: RawConfig = serde_env::from_iter(prefixed)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            icon_size,
            collation,
            sort_column,
            sort_descending,
        } = raw;

        let icon_size = icon_size.unwrap_or(DEFAULT_ICON_SIZE);
        if !icon_size.is_finite() || icon_size <= 0.0 {
            anyhow::bail!("ICON_SIZE must be a positive number, got {icon_size}");
        }

        Ok(Self {
            icon_size,
            collation: collation.unwrap_or_default(),
            sort_column,
            sort_descending,
        })
    }

    pub fn icon_size(&self) -> f32 {
        self.icon_size
    }

    pub fn collator(&self) -> LocaleCollator {
        LocaleCollator::new(self.collation)
    }

    /// The initial sort; a configured column without a direction uses the
    /// column's own default. A column hidden in `game` is ignored.
    pub fn initial_sort(&self, registry: &ColumnRegistry, game: &GameInfo) -> SortState {
        let Some(kind) = self.sort_column else {
            return SortState::default();
        };
        let mut state = SortState::for_column(registry.get(kind));
        if let Some(descending) = self.sort_descending {
            state.descending = descending;
        }
        state.reset_if_hidden(registry, game);
        state
    }
}
