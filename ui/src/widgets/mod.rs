mod city_window;
mod notifications;
pub mod overview;

pub use city_window::city_window;
pub use notifications::notifications_list;
pub use overview::overview_table;
