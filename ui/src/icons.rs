//! Themed icon set, drawn from glyphs of the bundled emoji font.

use std::collections::HashMap;

use cityview_business::{Icon, IconAtlas};
use egui::{Align2, FontId, Response, Sense, Ui, Vec2, WidgetInfo, WidgetType};
use ustr::Ustr;

/// Glyph height relative to the icon box.
const GLYPH_SCALE: f32 = 0.65;

const NAMED_ICONS: &[(&str, &str)] = &[
    ("StatIcons/Food", "🍞"),
    ("StatIcons/Gold", "💰"),
    ("StatIcons/Science", "🔬"),
    ("StatIcons/Production", "🔨"),
    ("StatIcons/Culture", "🎭"),
    ("StatIcons/Happiness", "😊"),
    ("StatIcons/Faith", "🙏"),
    ("StatIcons/Population", "👥"),
    ("StatIcons/Resistance", "✊"),
    ("OtherIcons/CityStatus", "🏛"),
    ("OtherIcons/Fire", "🔥"),
    ("OtherIcons/Puppet", "🎎"),
    ("OtherIcons/Settings", "⚙"),
    ("OtherIcons/Shield", "🛡"),
    ("OtherIcons/WLTK 1", "👑"),
    ("OtherIcons/WLTK 2", "👑"),
    ("UnitIcons/Settler", "🏕"),
];

/// Portrait families: any name under the prefix shares one glyph.
const PORTRAITS: &[(&str, &str)] = &[
    ("Construction/", "🏗"),
    ("ResourceIcons/", "💎"),
    ("UnitIcons/", "⚔"),
];

#[derive(Debug, Clone)]
pub struct IconCatalog {
    glyphs: HashMap<Ustr, &'static str>,
    portraits: Vec<(&'static str, &'static str)>,
}

impl Default for IconCatalog {
    fn default() -> Self {
        Self {
            glyphs: NAMED_ICONS
                .iter()
                .map(|&(path, glyph)| (Ustr::from(path), glyph))
                .collect(),
            portraits: PORTRAITS.to_vec(),
        }
    }
}

impl IconCatalog {
    /// A catalog without any icons; every lookup misses.
    pub fn empty() -> Self {
        Self {
            glyphs: HashMap::new(),
            portraits: Vec::new(),
        }
    }

    pub fn glyph(&self, path: Ustr) -> Option<&'static str> {
        self.glyphs.get(&path).copied().or_else(|| {
            self.portraits
                .iter()
                .find(|(prefix, _)| path.as_str().starts_with(prefix))
                .map(|(_, glyph)| *glyph)
        })
    }
}

impl IconAtlas for IconCatalog {
    fn contains(&self, path: &str) -> bool {
        self.glyph(Ustr::from(path)).is_some()
    }
}

/// Paints an icon into an exactly sized, clickable box.
pub fn paint_icon(ui: &mut Ui, icon: &Icon, catalog: &IconCatalog, label: &str) -> Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(icon.size), Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        if let Some(circle) = icon.circle {
            painter.circle_filled(rect.center(), icon.size / 2.0, circle);
        }
        if let Some(glyph) = catalog.glyph(icon.path) {
            let color = icon.tint.unwrap_or_else(|| ui.visuals().text_color());
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                glyph,
                FontId::proportional(icon.size * GLYPH_SCALE),
                color,
            );
        }
    }

    let enabled = ui.is_enabled();
    response.widget_info(|| WidgetInfo::labeled(WidgetType::Image, enabled, label));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_icons_and_portraits_resolve() {
        let catalog = IconCatalog::default();
        assert!(catalog.contains("StatIcons/Gold"));
        assert!(catalog.contains("Construction/Library"));
        assert!(catalog.contains("UnitIcons/Archer"));
        assert_eq!(catalog.glyph(Ustr::from("UnitIcons/Settler")), Some("🏕"));
        assert!(!catalog.contains("StatIcons/Nonexistent"));
    }

    #[test]
    fn empty_catalog_misses_everything() {
        let catalog = IconCatalog::empty();
        assert!(!catalog.contains("StatIcons/Gold"));
        assert!(!catalog.contains("Construction/Library"));
    }
}
