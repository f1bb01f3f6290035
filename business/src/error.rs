use thiserror::Error;

use crate::column::CityColumn;
use crate::stat::Stat;

/// Misconfigured column tables. These are programming errors: they are
/// reported once at startup and never recovered from.
#[derive(Debug, Error)]
pub enum ColumnError {
    #[error("Column {column} is registered more than once")]
    DuplicateColumn { column: CityColumn },
    #[error("Column {column} is out of order at position {position}")]
    OutOfOrder { column: CityColumn, position: usize },
    #[error("Column {column} is not registered")]
    MissingColumn { column: CityColumn },
    #[error("Column {column} reads stat {stat:?} but is not named after it")]
    StatMismatch { column: CityColumn, stat: Stat },
}
