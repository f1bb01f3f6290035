//! Click actions a cell can request from the hosting screen.

use crate::game::{GameInfo, Notification};

/// What the hosting screen must be able to do in response to a cell click.
pub trait ActionContext {
    /// Pushes the detail screen of the named city.
    fn open_city(&mut self, city: &str);
    /// Switches to the units overview with the given unit selected.
    fn select_unit(&mut self, identifier: &str);
    fn notify(&mut self, notification: Notification);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellAction {
    OpenCity { city: String },
    SelectUnit { identifier: String },
    ShowResourceLocations { resource: String },
}

impl CellAction {
    pub fn dispatch(&self, ctx: &mut dyn ActionContext, game: &GameInfo) {
        log::debug!("dispatching cell action: {self:?}");
        match self {
            Self::OpenCity { city } => ctx.open_city(city),
            Self::SelectUnit { identifier } => ctx.select_unit(identifier),
            Self::ShowResourceLocations { resource } => {
                ctx.notify(game.explored_resources_notification(resource));
            }
        }
    }
}
