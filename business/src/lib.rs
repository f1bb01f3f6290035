//! City overview table logic: the entity model, the column descriptors that
//! turn cities into header, body and totals cells, and the sort state.

pub mod action;
pub mod city;
pub mod collator;
pub mod column;
pub mod config;
pub mod element;
pub mod error;
pub mod game;
pub mod sort;
pub mod stat;

pub use action::{ActionContext, CellAction};
pub use city::{City, CityStatus, Construction, Garrison};
pub use collator::{CollationStrength, Collator, LocaleCollator};
pub use column::{CITY_COLUMNS, CityColumn, ColumnDescriptor, ColumnRegistry, EntryValue};
pub use config::OverviewConfig;
pub use element::{Element, ElementKind, Icon, IconAtlas};
pub use error::ColumnError;
pub use game::{GameInfo, Notification};
pub use sort::SortState;
pub use stat::{Stat, Stats};
