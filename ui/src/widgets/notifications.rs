//! Side list of notifications raised by cell clicks.

use cityview_business::Notification;
use egui::{RichText, ScrollArea, Ui};

/// Lists notifications newest first. Each one can be dismissed.
pub fn notifications_list(ui: &mut Ui, notifications: &mut Vec<Notification>) {
    ui.heading("Notifications");
    if notifications.is_empty() {
        ui.label(RichText::new("Nothing new").weak());
        return;
    }

    let mut dismissed = None;
    ScrollArea::vertical().show(ui, |ui| {
        for (index, notification) in notifications.iter().enumerate().rev() {
            ui.group(|ui| {
                ui.label(&notification.text);
                for location in &notification.locations {
                    ui.label(RichText::new(location).small().monospace());
                }
                if ui.small_button("Dismiss").clicked() {
                    dismissed = Some(index);
                }
            });
        }
    });

    if let Some(index) = dismissed {
        notifications.remove(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui_kittest::Harness;
    use kittest::Queryable;

    #[test]
    fn dismiss_removes_the_notification() {
        let notifications = vec![Notification {
            text: "[Silk] found at 1 location".to_owned(),
            locations: vec!["3,4".to_owned()],
        }];
        let mut harness = Harness::new_ui_state(notifications_list, notifications);
        harness.run();
        assert!(harness.query_by_label("[Silk] found at 1 location").is_some());

        harness.get_by_label("Dismiss").click();
        harness.run();

        assert!(harness.state().is_empty());
        assert!(harness.query_by_label("Nothing new").is_some());
    }
}
