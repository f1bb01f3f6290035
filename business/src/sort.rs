//! Which column the table is sorted by, and in which direction.

use serde::{Deserialize, Serialize};

use crate::city::City;
use crate::collator::Collator;
use crate::column::{CityColumn, ColumnDescriptor, ColumnRegistry};
use crate::game::GameInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: CityColumn,
    pub descending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: CityColumn::Name,
            descending: false,
        }
    }
}

impl SortState {
    /// Sorting by `column` in its initial direction.
    pub fn for_column(column: &ColumnDescriptor) -> Self {
        Self {
            column: column.kind,
            descending: column.default_descending,
        }
    }

    /// Header click: flips the direction on the current column, otherwise
    /// switches to `column` in its initial direction.
    pub fn select(&mut self, column: &ColumnDescriptor) {
        if self.column == column.kind {
            self.descending = !self.descending;
        } else {
            *self = Self::for_column(column);
        }
        log::debug!(
            "sorting cities by {} ({})",
            self.column,
            if self.descending { "descending" } else { "ascending" }
        );
    }

    /// Falls back to the default order when the sorted column is hidden in
    /// `game`, since a hidden header cannot show or flip the sort.
    pub fn reset_if_hidden(&mut self, registry: &ColumnRegistry, game: &GameInfo) {
        if !registry.get(self.column).is_visible(game) {
            log::debug!("{} is hidden, sorting by the default column", self.column);
            *self = Self::default();
        }
    }

    /// Returns the cities in table order. Equal rows keep their input order
    /// in both directions.
    pub fn sort<'a>(
        &self,
        cities: impl IntoIterator<Item = &'a City>,
        registry: &ColumnRegistry,
        collator: &dyn Collator,
    ) -> Vec<&'a City> {
        let column = registry.get(self.column);
        let mut sorted: Vec<&City> = cities.into_iter().collect();
        if self.descending {
            sorted.sort_by(|a, b| column.compare(b, a, collator));
        } else {
            sorted.sort_by(|a, b| column.compare(a, b, collator));
        }
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collator::LocaleCollator;

    fn registry() -> ColumnRegistry {
        ColumnRegistry::new().expect("built-in columns must validate")
    }

    fn names<'a>(cities: &[&'a City]) -> Vec<&'a str> {
        cities.iter().map(|city| city.name.as_str()).collect()
    }

    #[test]
    fn selecting_a_new_column_uses_its_default_direction() {
        let registry = registry();
        let mut state = SortState::default();

        state.select(registry.get(CityColumn::Population));
        assert_eq!(state.column, CityColumn::Population);
        assert!(state.descending);

        state.select(registry.get(CityColumn::Garrison));
        assert_eq!(state.column, CityColumn::Garrison);
        assert!(!state.descending);
    }

    #[test]
    fn selecting_the_same_column_flips_direction() {
        let registry = registry();
        let mut state = SortState::for_column(registry.get(CityColumn::Gold));
        assert!(state.descending);
        state.select(registry.get(CityColumn::Gold));
        assert!(!state.descending);
        state.select(registry.get(CityColumn::Gold));
        assert!(state.descending);
    }

    #[test]
    fn hidden_column_falls_back_to_default() {
        let registry = registry();
        let mut game = GameInfo::default();
        let mut state = SortState::for_column(registry.get(CityColumn::Faith));

        game.religion_enabled = true;
        state.reset_if_hidden(&registry, &game);
        assert_eq!(state.column, CityColumn::Faith);

        game.religion_enabled = false;
        state.reset_if_hidden(&registry, &game);
        assert_eq!(state, SortState::default());
    }

    #[test]
    fn descending_keeps_ties_in_input_order() {
        let registry = registry();
        let collator = LocaleCollator::default();
        let mut cities = Vec::new();
        for (name, population) in [("A", 3), ("B", 5), ("C", 3), ("D", 1)] {
            let mut city = City::new(name);
            city.population = population;
            cities.push(city);
        }

        let state = SortState::for_column(registry.get(CityColumn::Population));
        assert_eq!(names(&state.sort(&cities, &registry, &collator)), ["B", "A", "C", "D"]);

        let ascending = SortState {
            descending: false,
            ..state
        };
        assert_eq!(
            names(&ascending.sort(&cities, &registry, &collator)),
            ["D", "A", "C", "B"]
        );
    }
}
