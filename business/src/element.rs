//! Toolkit-neutral description of what a table cell shows.
//!
//! Columns build [`Element`]s; the UI crate paints them. Keeping the
//! description as plain data lets the column logic be tested without a
//! rendering context.

use egui::{Align, Color32};
use ustr::Ustr;

use crate::action::CellAction;

/// Resolves icon paths against the themed image set.
pub trait IconAtlas {
    fn contains(&self, path: &str) -> bool;
}

impl<F> IconAtlas for F
where
    F: Fn(&str) -> bool,
{
    fn contains(&self, path: &str) -> bool {
        self(path)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    pub path: Ustr,
    pub size: f32,
    /// Tint applied to the glyph itself.
    pub tint: Option<Color32>,
    /// Fill of a circular frame drawn behind the glyph.
    pub circle: Option<Color32>,
}

impl Icon {
    pub fn new(path: &str, size: f32) -> Self {
        Self {
            path: Ustr::from(path),
            size,
            tint: None,
            circle: None,
        }
    }

    pub fn surround_with_circle(mut self, color: Color32) -> Self {
        self.circle = Some(color);
        self
    }

    pub fn tinted(mut self, color: Color32) -> Self {
        self.tint = Some(color);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    Label { text: String, align: Align },
    Button { text: String },
    Icon(Icon),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub kind: ElementKind,
    pub tooltip: Option<String>,
    pub on_click: Option<CellAction>,
}

impl Element {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            tooltip: None,
            on_click: None,
        }
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::new(ElementKind::Label {
            text: text.into(),
            align: Align::Min,
        })
    }

    pub fn centered_number(value: i64) -> Self {
        Self::new(ElementKind::Label {
            text: value.to_string(),
            align: Align::Center,
        })
    }

    pub fn button(text: impl Into<String>) -> Self {
        Self::new(ElementKind::Button { text: text.into() })
    }

    pub fn icon(icon: Icon) -> Self {
        Self::new(ElementKind::Icon(icon))
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn on_click(mut self, action: CellAction) -> Self {
        self.on_click = Some(action);
        self
    }

    /// Text of a label or button element.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Label { text, .. } | ElementKind::Button { text } => Some(text),
            ElementKind::Icon(_) => None,
        }
    }

    pub fn icon_path(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Icon(icon) => Some(icon.path.as_str()),
            _ => None,
        }
    }

    /// Drops the element if it is an icon the atlas cannot resolve.
    pub fn resolved(self, atlas: &dyn IconAtlas) -> Option<Self> {
        if let Some(path) = self.icon_path()
            && !atlas.contains(path)
        {
            log::warn!("no icon for {path}, leaving the cell empty");
            return None;
        }
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_icons_resolve_to_nothing() {
        let atlas = |path: &str| path.starts_with("StatIcons/");

        let known = Element::icon(Icon::new("StatIcons/Food", 20.0));
        assert!(known.clone().resolved(&atlas).is_some());

        let unknown = Element::icon(Icon::new("OtherIcons/Missing", 20.0));
        assert!(unknown.resolved(&atlas).is_none());

        let text = Element::label("Total");
        let resolved = text.resolved(&atlas).expect("labels are never dropped");
        assert_eq!(resolved.text(), Some("Total"));
    }

    #[test]
    fn centered_numbers_render_as_text() {
        let element = Element::centered_number(-7);
        assert_eq!(element.text(), Some("-7"));
        assert!(matches!(
            element.kind,
            ElementKind::Label {
                align: Align::Center,
                ..
            }
        ));
    }
}
