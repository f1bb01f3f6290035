//! The concrete overview columns.

use std::cmp::Ordering;

use egui::{Align, Color32};

use super::{CityColumn, ColumnDescriptor, EntryValue, no_totals};
use crate::action::CellAction;
use crate::city::{City, CityStatus};
use crate::collator::Collator;
use crate::element::{Element, Icon};
use crate::game::GameInfo;
use crate::stat::Stat;

const TAN: Color32 = Color32::from_rgb(210, 180, 140);

/// Status, resource and unit icons are drawn smaller than the cell.
const SMALL_ICON: f32 = 0.7;
const CONSTRUCTION_ICON: f32 = 0.8;

fn circled_icon(path: &str, icon_size: f32, circle: Color32) -> Element {
    Element::icon(
        Icon::new(path, icon_size)
            .tinted(Color32::BLACK)
            .surround_with_circle(circle),
    )
}

fn zero(_city: &City) -> i64 {
    0
}

pub(crate) const NAME: ColumnDescriptor = ColumnDescriptor {
    header_tip: Some("Name"),
    align: Align::Min,
    fill_x: true,
    default_descending: false,
    header_icon: |_, icon_size| {
        let icon = Icon::new("UnitIcons/Settler", icon_size).surround_with_circle(Color32::WHITE);
        Some(Element::icon(icon))
    },
    entry_element: |_, city, _| {
        Some(Element::button(&city.name).on_click(CellAction::OpenCity {
            city: city.name.clone(),
        }))
    },
    totals_element: |_, _| Some(Element::label("Total")),
    comparator: |_, a, b, collator| collator.compare(&a.name, &b.name),
    ..ColumnDescriptor::new(CityColumn::Name, EntryValue::Derived(zero))
};

fn status_rank(city: &City) -> i64 {
    city.status() as i64
}

fn status_icon(_column: &ColumnDescriptor, city: &City, icon_size: f32) -> Option<Element> {
    let path = match city.status() {
        CityStatus::BeingRazed => "OtherIcons/Fire",
        CityStatus::Resistance => "StatIcons/Resistance",
        CityStatus::Puppet => "OtherIcons/Puppet",
        CityStatus::Normal => return None,
    };
    let icon = Icon::new(path, icon_size * SMALL_ICON).surround_with_circle(Color32::TRANSPARENT);
    Some(Element::icon(icon))
}

pub(crate) const STATUS: ColumnDescriptor = ColumnDescriptor {
    header_tip: Some("Status\n(puppet, resistance or being razed)"),
    header_icon: |_, icon_size| {
        Some(Element::icon(Icon::new("OtherIcons/CityStatus", icon_size)))
    },
    entry_element: status_icon,
    totals_element: no_totals,
    ..ColumnDescriptor::new(CityColumn::Status, EntryValue::Derived(status_rank))
};

fn turns_to_construction(city: &City) -> i64 {
    i64::from(city.turns_to_construction())
}

pub(crate) const CONSTRUCTION_ICON_COLUMN: ColumnDescriptor = ColumnDescriptor {
    header_icon: |_, _| None,
    entry_element: |_, city, icon_size| {
        let construction = city.construction.as_ref()?;
        let path = format!("Construction/{}", construction.name);
        Some(Element::icon(Icon::new(&path, icon_size * CONSTRUCTION_ICON)))
    },
    totals_element: no_totals,
    ..ColumnDescriptor::new(
        CityColumn::ConstructionIcon,
        EntryValue::Derived(turns_to_construction),
    )
};

pub(crate) const CONSTRUCTION: ColumnDescriptor = ColumnDescriptor {
    header_tip: Some("Current construction"),
    align: Align::Min,
    expand_x: true,
    equalize_height: true,
    default_descending: false,
    header_icon: |_, icon_size| {
        Some(circled_icon("OtherIcons/Settings", icon_size, Color32::LIGHT_GRAY))
    },
    entry_element: |_, city, _| Some(Element::label(city.production_text())),
    totals_element: no_totals,
    comparator: |_, a, b, collator| collator.compare(a.construction_name(), b.construction_name()),
    ..ColumnDescriptor::new(CityColumn::Construction, EntryValue::Derived(zero))
};

fn population(city: &City) -> i64 {
    i64::from(city.population)
}

pub(crate) const POPULATION: ColumnDescriptor =
    ColumnDescriptor::new(CityColumn::Population, EntryValue::Derived(population));

pub(crate) const FOOD: ColumnDescriptor = ColumnDescriptor {
    // an intended empty space
    totals_element: no_totals,
    ..ColumnDescriptor::new(CityColumn::Food, EntryValue::Stat(Stat::Food))
};

pub(crate) const GOLD: ColumnDescriptor =
    ColumnDescriptor::new(CityColumn::Gold, EntryValue::Stat(Stat::Gold));

pub(crate) const SCIENCE: ColumnDescriptor =
    ColumnDescriptor::new(CityColumn::Science, EntryValue::Stat(Stat::Science));

pub(crate) const PRODUCTION: ColumnDescriptor = ColumnDescriptor {
    // an intended empty space
    totals_element: no_totals,
    ..ColumnDescriptor::new(CityColumn::Production, EntryValue::Stat(Stat::Production))
};

pub(crate) const CULTURE: ColumnDescriptor =
    ColumnDescriptor::new(CityColumn::Culture, EntryValue::Stat(Stat::Culture));

pub(crate) const HAPPINESS: ColumnDescriptor = ColumnDescriptor::new(
    CityColumn::Happiness,
    EntryValue::Derived(City::total_happiness),
);

pub(crate) const FAITH: ColumnDescriptor = ColumnDescriptor {
    is_visible: GameInfo::is_religion_enabled,
    ..ColumnDescriptor::new(CityColumn::Faith, EntryValue::Stat(Stat::Faith))
};

fn we_love_the_king(city: &City) -> i64 {
    i64::from(city.is_we_love_the_king_day_active())
}

fn we_love_the_king_order(
    column: &ColumnDescriptor,
    a: &City,
    b: &City,
    collator: &dyn Collator,
) -> Ordering {
    column
        .entry_value(a)
        .cmp(&column.entry_value(b))
        .then_with(|| {
            collator.compare(
                a.demanded_resource().unwrap_or_default(),
                b.demanded_resource().unwrap_or_default(),
            )
        })
}

fn we_love_the_king_icon(
    _column: &ColumnDescriptor,
    city: &City,
    icon_size: f32,
) -> Option<Element> {
    if city.is_we_love_the_king_day_active() {
        let icon =
            Icon::new("OtherIcons/WLTK 1", icon_size).surround_with_circle(Color32::TRANSPARENT);
        return Some(
            Element::icon(icon).with_tooltip(format!("{} turns", city.we_love_the_king_turns)),
        );
    }

    let resource = city.demanded_resource()?;
    let path = format!("ResourceIcons/{resource}");
    Some(
        Element::icon(Icon::new(&path, icon_size * SMALL_ICON))
            .with_tooltip(format!("Demanding {resource}"))
            .on_click(CellAction::ShowResourceLocations {
                resource: resource.to_owned(),
            }),
    )
}

pub(crate) const WE_LOVE_THE_KING: ColumnDescriptor = ColumnDescriptor {
    header_tip: Some("We Love The King Day"),
    default_descending: false,
    header_icon: |_, icon_size| Some(circled_icon("OtherIcons/WLTK 2", icon_size, TAN)),
    entry_element: we_love_the_king_icon,
    comparator: we_love_the_king_order,
    ..ColumnDescriptor::new(
        CityColumn::WeLoveTheKing,
        EntryValue::Derived(we_love_the_king),
    )
};

fn garrisoned(city: &City) -> i64 {
    i64::from(city.garrison.is_some())
}

fn garrison_name(city: &City) -> &str {
    city.garrison.as_ref().map_or("", |unit| unit.name.as_str())
}

fn garrison_icon(_column: &ColumnDescriptor, city: &City, icon_size: f32) -> Option<Element> {
    let unit = city.garrison.as_ref()?;
    let path = format!("UnitIcons/{}", unit.name);
    Some(
        Element::icon(Icon::new(&path, icon_size * SMALL_ICON))
            .with_tooltip(unit.display_name())
            .on_click(CellAction::SelectUnit {
                identifier: unit.identifier(),
            }),
    )
}

pub(crate) const GARRISON: ColumnDescriptor = ColumnDescriptor {
    header_tip: Some("Garrisoned by unit"),
    default_descending: false,
    header_icon: |_, icon_size| {
        Some(circled_icon("OtherIcons/Shield", icon_size, Color32::LIGHT_GRAY))
    },
    entry_element: garrison_icon,
    comparator: |_, a, b, collator| collator.compare(garrison_name(a), garrison_name(b)),
    ..ColumnDescriptor::new(CityColumn::Garrison, EntryValue::Derived(garrisoned))
};
