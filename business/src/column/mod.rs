//! Column descriptors for the city overview table.
//!
//! A [`ColumnDescriptor`] is a record of layout hints plus a handful of
//! function fields. [`ColumnDescriptor::new`] binds every function field to a
//! shared default; each concrete column replaces only the fields that differ.
//! The numeric [`EntryValue`] is the pivot the defaults share: it feeds the
//! default sort order, the default cell label and the default total.

mod registry;
mod variants;

use std::cmp::Ordering;
use std::fmt;

use egui::Align;
use serde::{Deserialize, Serialize};

use crate::city::City;
use crate::collator::Collator;
use crate::element::{Element, Icon, IconAtlas};
use crate::game::GameInfo;
use crate::stat::{Stat, round_to_int};

pub use registry::{CITY_COLUMNS, ColumnRegistry};

/// Stable identifiers of the overview columns, in default display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CityColumn {
    Name,
    Status,
    ConstructionIcon,
    Construction,
    Population,
    Food,
    Gold,
    Science,
    Production,
    Culture,
    Happiness,
    Faith,
    WeLoveTheKing,
    Garrison,
}

impl CityColumn {
    pub const ALL: [Self; 14] = [
        Self::Name,
        Self::Status,
        Self::ConstructionIcon,
        Self::Construction,
        Self::Population,
        Self::Food,
        Self::Gold,
        Self::Science,
        Self::Production,
        Self::Culture,
        Self::Happiness,
        Self::Faith,
        Self::WeLoveTheKing,
        Self::Garrison,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "City",
            Self::Status => "Status",
            Self::ConstructionIcon => "ConstructionIcon",
            Self::Construction => "Construction",
            Self::Population => "Population",
            Self::Food => "Food",
            Self::Gold => "Gold",
            Self::Science => "Science",
            Self::Production => "Production",
            Self::Culture => "Culture",
            Self::Happiness => "Happiness",
            Self::Faith => "Faith",
            Self::WeLoveTheKing => "WLTK",
            Self::Garrison => "Garrison",
        }
    }
}

impl fmt::Display for CityColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a column's numeric value comes from.
#[derive(Debug, Clone, Copy)]
pub enum EntryValue {
    /// The city's current yield of this stat, rounded half-up.
    Stat(Stat),
    Derived(fn(&City) -> i64),
}

impl EntryValue {
    pub fn stat(self) -> Option<Stat> {
        match self {
            Self::Stat(stat) => Some(stat),
            Self::Derived(_) => None,
        }
    }

    fn read(self, city: &City) -> i64 {
        match self {
            Self::Stat(stat) => round_to_int(city.stats[stat]),
            Self::Derived(value) => value(city),
        }
    }
}

type HeaderIconFn = fn(&ColumnDescriptor, f32) -> Option<Element>;
type EntryElementFn = fn(&ColumnDescriptor, &City, f32) -> Option<Element>;
type TotalsElementFn = fn(&ColumnDescriptor, &[&City]) -> Option<Element>;
type CompareFn = fn(&ColumnDescriptor, &City, &City, &dyn Collator) -> Ordering;
type VisibleFn = fn(&GameInfo) -> bool;

#[derive(Clone, Copy)]
pub struct ColumnDescriptor {
    pub kind: CityColumn,
    /// Header tooltip; the column name when unset.
    pub header_tip: Option<&'static str>,
    pub align: Align,
    pub fill_x: bool,
    pub expand_x: bool,
    pub equalize_height: bool,
    /// Direction used when the column is first picked for sorting.
    pub default_descending: bool,
    pub value: EntryValue,
    header_icon: HeaderIconFn,
    entry_element: EntryElementFn,
    totals_element: TotalsElementFn,
    comparator: CompareFn,
    is_visible: VisibleFn,
}

impl fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("kind", &self.kind)
            .field("value", &self.value)
            .field("default_descending", &self.default_descending)
            .finish_non_exhaustive()
    }
}

impl ColumnDescriptor {
    /// A centered numeric column: stat icon header, value label, summed total.
    pub const fn new(kind: CityColumn, value: EntryValue) -> Self {
        Self {
            kind,
            header_tip: None,
            align: Align::Center,
            fill_x: false,
            expand_x: false,
            equalize_height: false,
            default_descending: true,
            value,
            header_icon: stat_header_icon,
            entry_element: numeric_entry,
            totals_element: summed_totals,
            comparator: by_entry_value,
            is_visible: always_visible,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn header_tip(&self) -> &'static str {
        self.header_tip.unwrap_or(self.kind.name())
    }

    /// Text shown in the header when there is no icon.
    pub fn header_label(&self) -> &'static str {
        self.header_tip().lines().next().unwrap_or_default()
    }

    pub fn stat(&self) -> Option<Stat> {
        self.value.stat()
    }

    pub fn header_icon(&self, icon_size: f32, atlas: &dyn IconAtlas) -> Option<Element> {
        (self.header_icon)(self, icon_size).and_then(|element| element.resolved(atlas))
    }

    pub fn entry_value(&self, city: &City) -> i64 {
        self.value.read(city)
    }

    /// `None` leaves the cell empty for this city.
    pub fn entry_element(
        &self,
        city: &City,
        icon_size: f32,
        atlas: &dyn IconAtlas,
    ) -> Option<Element> {
        (self.entry_element)(self, city, icon_size).and_then(|element| element.resolved(atlas))
    }

    /// `None` when the column has no meaningful aggregate.
    pub fn totals_element<'a>(&self, cities: impl IntoIterator<Item = &'a City>) -> Option<Element> {
        let cities: Vec<&City> = cities.into_iter().collect();
        (self.totals_element)(self, &cities)
    }

    pub fn compare(&self, a: &City, b: &City, collator: &dyn Collator) -> Ordering {
        (self.comparator)(self, a, b, collator)
    }

    /// Ascending order of this column, ready for `sort_by`.
    pub fn comparator<'c>(
        &'c self,
        collator: &'c dyn Collator,
    ) -> impl Fn(&City, &City) -> Ordering + 'c {
        move |a: &City, b: &City| self.compare(a, b, collator)
    }

    pub fn is_visible(&self, game: &GameInfo) -> bool {
        (self.is_visible)(game)
    }
}

fn stat_header_icon(column: &ColumnDescriptor, icon_size: f32) -> Option<Element> {
    let path = format!("StatIcons/{}", column.name());
    Some(Element::icon(Icon::new(&path, icon_size)))
}

fn numeric_entry(column: &ColumnDescriptor, city: &City, _icon_size: f32) -> Option<Element> {
    Some(Element::centered_number(column.entry_value(city)))
}

fn summed_totals(column: &ColumnDescriptor, cities: &[&City]) -> Option<Element> {
    let total = cities
        .iter()
        .map(|city| column.entry_value(city))
        .fold(0_i64, i64::saturating_add);
    Some(Element::centered_number(total))
}

fn no_totals(_column: &ColumnDescriptor, _cities: &[&City]) -> Option<Element> {
    None
}

fn by_entry_value(column: &ColumnDescriptor, a: &City, b: &City, _collator: &dyn Collator) -> Ordering {
    column.entry_value(a).cmp(&column.entry_value(b))
}

fn always_visible(_game: &GameInfo) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOLD: ColumnDescriptor = ColumnDescriptor::new(CityColumn::Gold, EntryValue::Stat(Stat::Gold));

    fn city(name: &str, gold: f32) -> City {
        let mut city = City::new(name);
        city.stats.gold = gold;
        city
    }

    #[test]
    fn defaults_derive_from_the_stat() {
        let rome = city("Rome", 4.6);
        let atlas = |_: &str| true;

        assert_eq!(GOLD.stat(), Some(Stat::Gold));
        assert_eq!(GOLD.entry_value(&rome), 5);
        assert_eq!(
            GOLD.entry_element(&rome, 20.0, &atlas)
                .as_ref()
                .and_then(Element::text),
            Some("5")
        );
        assert_eq!(
            GOLD.header_icon(20.0, &atlas)
                .as_ref()
                .and_then(Element::icon_path),
            Some("StatIcons/Gold")
        );
        assert_eq!(GOLD.header_tip(), "Gold");
        assert!(GOLD.is_visible(&GameInfo::default()));
    }

    #[test]
    fn header_icon_falls_back_when_missing() {
        let atlas = |_: &str| false;
        assert!(GOLD.header_icon(20.0, &atlas).is_none());
        assert_eq!(GOLD.header_label(), "Gold");
    }

    #[test]
    fn default_total_sums_entry_values() {
        let cities = [city("A", 10.0), city("B", 0.0), city("C", 5.0)];
        let total = GOLD.totals_element(&cities);
        assert_eq!(total.as_ref().and_then(Element::text), Some("15"));

        let empty = GOLD.totals_element(std::iter::empty());
        assert_eq!(empty.as_ref().and_then(Element::text), Some("0"));
    }

    #[test]
    fn default_comparator_is_ascending_by_value() {
        let collator = |a: &str, b: &str| a.cmp(b);
        let mut cities = [city("A", 10.0), city("B", 0.0), city("C", 5.0)];
        cities.sort_by(GOLD.comparator(&collator));
        let names: Vec<&str> = cities.iter().map(|city| city.name.as_str()).collect();
        assert_eq!(names, ["B", "C", "A"]);
    }
}
