//! Per-turn city yields.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// The closed set of yields a city produces each turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stat {
    Production,
    Food,
    Gold,
    Science,
    Culture,
    Happiness,
    Faith,
}

impl Stat {
    pub const ALL: [Self; 7] = [
        Self::Production,
        Self::Food,
        Self::Gold,
        Self::Science,
        Self::Culture,
        Self::Happiness,
        Self::Faith,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Production => "Production",
            Self::Food => "Food",
            Self::Gold => "Gold",
            Self::Science => "Science",
            Self::Culture => "Culture",
            Self::Happiness => "Happiness",
            Self::Faith => "Faith",
        }
    }

    /// Looks a stat up by its exact name, `None` for anything else.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stat| stat.name() == name)
    }
}

/// One value per [`Stat`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub production: f32,
    pub food: f32,
    pub gold: f32,
    pub science: f32,
    pub culture: f32,
    pub happiness: f32,
    pub faith: f32,
}

impl Index<Stat> for Stats {
    type Output = f32;

    fn index(&self, stat: Stat) -> &f32 {
        match stat {
            Stat::Production => &self.production,
            Stat::Food => &self.food,
            Stat::Gold => &self.gold,
            Stat::Science => &self.science,
            Stat::Culture => &self.culture,
            Stat::Happiness => &self.happiness,
            Stat::Faith => &self.faith,
        }
    }
}

impl IndexMut<Stat> for Stats {
    fn index_mut(&mut self, stat: Stat) -> &mut f32 {
        match stat {
            Stat::Production => &mut self.production,
            Stat::Food => &mut self.food,
            Stat::Gold => &mut self.gold,
            Stat::Science => &mut self.science,
            Stat::Culture => &mut self.culture,
            Stat::Happiness => &mut self.happiness,
            Stat::Faith => &mut self.faith,
        }
    }
}

/// Rounds half-up, so `-2.5` becomes `-2` and `2.5` becomes `3`. Values past
/// the `i64` range saturate.
pub fn round_to_int(value: f32) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_matches_every_stat() {
        for stat in Stat::ALL {
            assert_eq!(Stat::from_name(stat.name()), Some(stat));
        }
        assert_eq!(Stat::from_name("Population"), None);
        assert_eq!(Stat::from_name("food"), None);
    }

    #[test]
    fn index_reads_back_what_was_written() {
        let mut stats = Stats::default();
        stats[Stat::Science] = 12.5;
        assert_eq!(stats.science, 12.5);
        assert_eq!(stats[Stat::Gold], 0.0);
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_to_int(2.5), 3);
        assert_eq!(round_to_int(2.4), 2);
        assert_eq!(round_to_int(-2.5), -2);
        assert_eq!(round_to_int(-2.6), -3);
    }
}
