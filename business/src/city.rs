//! The per-city record the overview table reads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::stat::{Stats, round_to_int};

/// Constructions taking this many turns or more are shown without a turn count.
const UNREACHABLE_TURNS: u32 = 999;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct City {
    pub name: String,
    pub population: u32,
    /// Current per-turn yields.
    pub stats: Stats,
    /// Itemized happiness by source, e.g. `"Buildings" -> 3.0`.
    pub happiness: BTreeMap<String, f32>,
    pub puppet: bool,
    pub resistance_turns: u32,
    pub being_razed: bool,
    pub construction: Option<Construction>,
    pub we_love_the_king_turns: u32,
    pub demanded_resource: Option<String>,
    pub garrison: Option<Garrison>,
}

/// How far a city is from being under normal control, least severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CityStatus {
    Normal,
    Puppet,
    Resistance,
    BeingRazed,
}

/// The item at the head of a city's build queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Construction {
    pub name: String,
    /// `None` for perpetual constructions that convert production and never finish.
    #[serde(default)]
    pub turns: Option<u32>,
}

/// A military unit stationed in the city center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Garrison {
    /// Base unit name, also the icon key.
    pub name: String,
    #[serde(default)]
    pub instance_name: Option<String>,
    pub position: (i32, i32),
}

impl Garrison {
    pub fn display_name(&self) -> String {
        match &self.instance_name {
            Some(instance) => format!("{instance} ({})", self.name),
            None => self.name.clone(),
        }
    }

    /// Key the units overview selects a unit by.
    pub fn identifier(&self) -> String {
        let (x, y) = self.position;
        format!("{}@{x},{y}", self.name)
    }
}

impl City {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            population: 1,
            ..Self::default()
        }
    }

    /// The most severe condition applies when several hold at once.
    pub fn status(&self) -> CityStatus {
        if self.being_razed {
            CityStatus::BeingRazed
        } else if self.is_in_resistance() {
            CityStatus::Resistance
        } else if self.puppet {
            CityStatus::Puppet
        } else {
            CityStatus::Normal
        }
    }

    pub fn is_in_resistance(&self) -> bool {
        self.resistance_turns > 0
    }

    pub fn is_we_love_the_king_day_active(&self) -> bool {
        self.we_love_the_king_turns > 0
    }

    /// Sum of all happiness sources, rounded half-up.
    pub fn total_happiness(&self) -> i64 {
        round_to_int(self.happiness.values().sum())
    }

    pub fn construction_name(&self) -> &str {
        self.construction
            .as_ref()
            .map(|construction| construction.name.as_str())
            .unwrap_or_default()
    }

    /// Turns until the current construction completes; 0 when idle or perpetual.
    pub fn turns_to_construction(&self) -> u32 {
        self.construction
            .as_ref()
            .and_then(|construction| construction.turns)
            .unwrap_or(0)
    }

    /// The text a city button shows for its production.
    pub fn production_text(&self) -> String {
        let Some(construction) = &self.construction else {
            return String::new();
        };
        match construction.turns {
            Some(turns) if turns < UNREACHABLE_TURNS => {
                format!("{}\n{turns} turns", construction.name)
            }
            _ => construction.name.clone(),
        }
    }

    pub fn demanded_resource(&self) -> Option<&str> {
        self.demanded_resource
            .as_deref()
            .filter(|resource| !resource.is_empty())
    }
}
