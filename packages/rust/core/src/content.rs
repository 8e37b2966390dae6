//! String-keyed content lookup with a fallback page.

use std::collections::BTreeMap;

use docbrowser_shared::Content;

/// Id under which the fallback page reports itself.
const FALLBACK_CONTENT_ID: &str = "";

/// Content registered per item id. Partial maps are fine: lookups that miss
/// resolve to a "pick a topic" fallback page.
#[derive(Debug, Clone)]
pub struct ContentMap {
    entries: BTreeMap<String, Content>,
    fallback: Content,
}

impl ContentMap {
    /// An empty map with the standard "pick a topic" fallback.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            fallback: default_fallback(),
        }
    }

    /// Register `content` under its own id, replacing any previous entry.
    pub fn insert(&mut self, content: Content) -> Option<Content> {
        self.entries.insert(content.id.clone(), content)
    }

    /// Look up `id`, falling back to the default page on a miss.
    pub fn resolve(&self, id: &str) -> &Content {
        self.entries.get(id).unwrap_or(&self.fallback)
    }

    /// Whether `content` is this map's fallback page.
    pub fn is_fallback(&self, content: &Content) -> bool {
        std::ptr::eq(content, &self.fallback)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overlay `other`'s entries onto this map. Entries in `other` win.
    pub fn extend(&mut self, other: ContentMap) {
        self.entries.extend(other.entries);
    }
}

impl Default for ContentMap {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Content> for ContentMap {
    fn from_iter<I: IntoIterator<Item = Content>>(iter: I) -> Self {
        let mut map = Self::new();
        for content in iter {
            map.insert(content);
        }
        map
    }
}

fn default_fallback() -> Content {
    Content::new(
        FALLBACK_CONTENT_ID,
        "Select a topic",
        "Pick a topic from the sidebar to start reading.\n\n\
         Press `/` to search, or use the arrow keys to move through sections.",
    )
}
