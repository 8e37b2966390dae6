//! Core domain types for the documentation browser.

use serde::{Deserialize, Serialize};

/// Icon key used when a navigation entry does not name one.
pub const DEFAULT_ICON: &str = "file";

// ---------------------------------------------------------------------------
// Navigation tree
// ---------------------------------------------------------------------------

/// A single selectable documentation topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    /// Stable identifier, also the key into the content map.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Icon key, resolved to a glyph by the rendering layer.
    #[serde(default = "default_icon")]
    pub icon: String,
}

impl NavigationItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: icon.into(),
        }
    }
}

/// A labeled group of navigation items. One level of nesting only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationSection {
    /// Unique section identifier, the key into the expanded-section map.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Icon key, resolved to a glyph by the rendering layer.
    #[serde(default = "default_icon")]
    pub icon: String,
    /// Items in display order.
    #[serde(default)]
    pub items: Vec<NavigationItem>,
}

impl NavigationSection {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        icon: impl Into<String>,
        items: Vec<NavigationItem>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: icon.into(),
            items,
        }
    }
}

/// Root structure of a navigation file (`nav.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavTree {
    /// Top-level sections in display order.
    #[serde(default)]
    pub sections: Vec<NavigationSection>,
}

fn default_icon() -> String {
    DEFAULT_ICON.into()
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

/// A renderable documentation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// Item id this content is registered under.
    pub id: String,
    /// Page heading.
    pub title: String,
    /// Markdown body.
    pub body: String,
}

impl Content {
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}
