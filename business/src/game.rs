//! Collection-level game state consumed by the overview.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::city::City;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameInfo {
    pub civilization: String,
    /// Ruleset toggle; when off there is no faith yield worth showing.
    pub religion_enabled: bool,
    pub cities: Vec<City>,
    /// Explored locations per resource name.
    pub explored_resources: BTreeMap<String, Vec<String>>,
}

/// A one-time message shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    /// Places the player can jump to from the notification.
    pub locations: Vec<String>,
}

impl GameInfo {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_religion_enabled(&self) -> bool {
        self.religion_enabled
    }

    pub fn city(&self, name: &str) -> Option<&City> {
        self.cities.iter().find(|city| city.name == name)
    }

    /// Lists where a resource has been found in explored territory.
    pub fn explored_resources_notification(&self, resource: &str) -> Notification {
        let locations = self
            .explored_resources
            .get(resource)
            .cloned()
            .unwrap_or_default();

        let text = match locations.len() {
            0 => format!("No [{resource}] found in explored territory"),
            1 => format!("[{resource}] found at 1 location"),
            n => format!("[{resource}] found at {n} locations"),
        };

        Notification { text, locations }
    }
}
