//! Documentation browser state.
//!
//! [`Browser`] owns one session's worth of state: the search term, the
//! active item, which sections are expanded, and the filtered view derived
//! from the search term. None of its operations can fail; unknown ids leave
//! harmless state behind and resolve to the fallback page.

use std::borrow::Cow;
use std::collections::BTreeMap;

use tracing::{debug, trace};

use docbrowser_shared::{
    Content, DEFAULT_EXPANDED_SECTIONS, DEFAULT_START_SECTION, NavigationItem, NavigationSection,
};

use crate::content::ContentMap;
use crate::filter::compute_filtered_sections;

pub struct Browser {
    tree: Vec<NavigationSection>,
    content: ContentMap,
    search_term: String,
    active_section_id: String,
    expanded_sections: BTreeMap<String, bool>,
    /// `None` while the search term is empty, meaning the full tree.
    filtered: Option<Vec<NavigationSection>>,
}

impl Browser {
    /// Start a session on `tree`, showing the getting-started page with the
    /// default sections expanded.
    pub fn new(tree: Vec<NavigationSection>, content: ContentMap) -> Self {
        Self {
            tree,
            content,
            search_term: String::new(),
            active_section_id: DEFAULT_START_SECTION.to_string(),
            expanded_sections: DEFAULT_EXPANDED_SECTIONS
                .iter()
                .map(|id| (id.to_string(), true))
                .collect(),
            filtered: None,
        }
    }

    /// Set the item shown at start.
    pub fn with_start_section(mut self, item_id: impl Into<String>) -> Self {
        self.active_section_id = item_id.into();
        self
    }

    /// Expand exactly `section_ids` at start, replacing the defaults.
    pub fn with_expanded<I, S>(mut self, section_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expanded_sections = section_ids
            .into_iter()
            .map(|id| (id.into(), true))
            .collect();
        self
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Store `term` verbatim and recompute the filtered view.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.filtered = match compute_filtered_sections(&self.search_term, &self.tree) {
            Cow::Borrowed(_) => None,
            Cow::Owned(sections) => Some(sections),
        };
    }

    pub fn clear_search(&mut self) {
        self.set_search_term(String::new());
    }

    /// Flip a section between expanded and collapsed. A section never seen
    /// before counts as collapsed.
    pub fn toggle_section(&mut self, section_id: &str) {
        let expanded = self
            .expanded_sections
            .entry(section_id.to_string())
            .or_insert(false);
        *expanded = !*expanded;
        trace!(section_id, expanded = *expanded, "toggled section");
    }

    /// Show `item_id` in the content pane. The id is not checked against the
    /// tree; an unknown id renders the fallback page.
    pub fn select_section(&mut self, item_id: impl Into<String>) {
        self.active_section_id = item_id.into();
        debug!(item_id = %self.active_section_id, "selected section");
    }

    /// Content for `section_id`, or the fallback page when none is registered.
    pub fn resolve_content(&self, section_id: &str) -> &Content {
        self.content.resolve(section_id)
    }

    // -----------------------------------------------------------------------
    // State accessors
    // -----------------------------------------------------------------------

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn active_section_id(&self) -> &str {
        &self.active_section_id
    }

    pub fn expanded_sections(&self) -> &BTreeMap<String, bool> {
        &self.expanded_sections
    }

    pub fn is_expanded(&self, section_id: &str) -> bool {
        self.expanded_sections
            .get(section_id)
            .copied()
            .unwrap_or(false)
    }

    /// Sections visible under the current search term.
    pub fn filtered_sections(&self) -> &[NavigationSection] {
        self.filtered.as_deref().unwrap_or(&self.tree)
    }

    /// The unfiltered navigation tree.
    pub fn tree(&self) -> &[NavigationSection] {
        &self.tree
    }

    pub fn content(&self) -> &ContentMap {
        &self.content
    }

    pub fn active_content(&self) -> &Content {
        self.resolve_content(&self.active_section_id)
    }

    /// Whether the active item has no registered content.
    pub fn showing_fallback(&self) -> bool {
        self.content.is_fallback(self.active_content())
    }

    /// Number of items in the filtered view.
    pub fn match_count(&self) -> usize {
        self.filtered_sections().iter().map(|s| s.items.len()).sum()
    }

    // -----------------------------------------------------------------------
    // Tree navigation
    // -----------------------------------------------------------------------

    /// Locate an item and its parent section in the full tree.
    pub fn find_item(&self, item_id: &str) -> Option<(&NavigationSection, &NavigationItem)> {
        self.tree.iter().find_map(|section| {
            section
                .items
                .iter()
                .find(|item| item.id == item_id)
                .map(|item| (section, item))
        })
    }

    /// Previous and next items around `item_id` in full-tree reading order.
    /// Both are `None` when `item_id` is not in the tree.
    pub fn adjacent_items(
        &self,
        item_id: &str,
    ) -> (Option<&NavigationItem>, Option<&NavigationItem>) {
        let items: Vec<&NavigationItem> = self.tree.iter().flat_map(|s| &s.items).collect();
        match items.iter().position(|item| item.id == item_id) {
            Some(pos) => (
                pos.checked_sub(1).map(|p| items[p]),
                items.get(pos + 1).copied(),
            ),
            None => (None, None),
        }
    }
}
