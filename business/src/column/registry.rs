//! The ordered set of overview columns.

use super::variants::{
    CONSTRUCTION, CONSTRUCTION_ICON_COLUMN, CULTURE, FAITH, FOOD, GARRISON, GOLD, HAPPINESS,
    NAME, POPULATION, PRODUCTION, SCIENCE, STATUS, WE_LOVE_THE_KING,
};
use super::{CityColumn, ColumnDescriptor};
use crate::error::ColumnError;
use crate::game::GameInfo;
use crate::stat::Stat;

/// Every overview column, in default display order.
pub const CITY_COLUMNS: [ColumnDescriptor; 14] = [
    NAME,
    STATUS,
    CONSTRUCTION_ICON_COLUMN,
    CONSTRUCTION,
    POPULATION,
    FOOD,
    GOLD,
    SCIENCE,
    PRODUCTION,
    CULTURE,
    HAPPINESS,
    FAITH,
    WE_LOVE_THE_KING,
    GARRISON,
];

/// Validated view over a static column table.
#[derive(Debug, Clone, Copy)]
pub struct ColumnRegistry {
    columns: &'static [ColumnDescriptor],
}

impl ColumnRegistry {
    pub fn new() -> Result<Self, ColumnError> {
        Self::from_columns(&CITY_COLUMNS)
    }

    /// Checks that each [`CityColumn`] appears exactly once, in declaration
    /// order, and that stat-backed columns are named after their stat.
    pub fn from_columns(columns: &'static [ColumnDescriptor]) -> Result<Self, ColumnError> {
        for (position, column) in columns.iter().enumerate() {
            if columns[..position].iter().any(|seen| seen.kind == column.kind) {
                return Err(ColumnError::DuplicateColumn { column: column.kind });
            }
            if CityColumn::ALL.get(position) != Some(&column.kind) {
                return Err(ColumnError::OutOfOrder {
                    column: column.kind,
                    position,
                });
            }
            if let Some(stat) = column.stat()
                && Stat::from_name(column.name()) != Some(stat)
            {
                return Err(ColumnError::StatMismatch {
                    column: column.kind,
                    stat,
                });
            }
        }

        if let Some(missing) = CityColumn::ALL.get(columns.len()) {
            return Err(ColumnError::MissingColumn { column: *missing });
        }

        log::debug!("registered {} overview columns", columns.len());
        Ok(Self { columns })
    }

    pub fn get(&self, kind: CityColumn) -> &'static ColumnDescriptor {
        // Validation pins every kind to its declaration index.
        &self.columns[kind as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static ColumnDescriptor> {
        self.columns.iter()
    }

    pub fn visible<'g>(
        &self,
        game: &'g GameInfo,
    ) -> impl Iterator<Item = &'static ColumnDescriptor> + 'g {
        self.columns.iter().filter(move |column| column.is_visible(game))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
