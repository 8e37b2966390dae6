//! Live search filter over the navigation tree.
//!
//! Matching is a case-insensitive substring test on an item's title or id.
//! Results keep the tree's order; there is no ranking.

use std::borrow::Cow;

use tracing::debug;

use docbrowser_shared::{NavigationItem, NavigationSection};

/// Derive the sections visible for `term`.
///
/// Each section keeps only its matching items and is dropped when none
/// remain. An empty `term` borrows `tree` as-is.
pub fn compute_filtered_sections<'a>(
    term: &str,
    tree: &'a [NavigationSection],
) -> Cow<'a, [NavigationSection]> {
    if term.is_empty() {
        return Cow::Borrowed(tree);
    }

    let needle = term.to_lowercase();
    let filtered: Vec<NavigationSection> = tree
        .iter()
        .filter_map(|section| {
            let items: Vec<NavigationItem> = section
                .items
                .iter()
                .filter(|item| item_matches(item, &needle))
                .cloned()
                .collect();

            if items.is_empty() {
                None
            } else {
                Some(NavigationSection {
                    items,
                    ..section.clone()
                })
            }
        })
        .collect();

    debug!(
        term,
        sections = filtered.len(),
        "recomputed filtered sections"
    );

    Cow::Owned(filtered)
}

/// Whether `item` matches an already-lowercased needle.
pub fn item_matches(item: &NavigationItem, needle: &str) -> bool {
    item.title.to_lowercase().contains(needle) || item.id.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_start_tree() -> Vec<NavigationSection> {
        vec![NavigationSection::new(
            "quick-start",
            "Quick Start",
            "rocket",
            vec![
                NavigationItem::new("getting-started", "Getting Started", "play"),
                NavigationItem::new("installation", "Installation", "download"),
            ],
        )]
    }

    fn two_section_tree() -> Vec<NavigationSection> {
        let mut tree = quick_start_tree();
        tree.push(NavigationSection::new(
            "ai-services",
            "AI Services",
            "sparkles",
            vec![
                NavigationItem::new("chatgpt", "ChatGPT", "chat"),
                NavigationItem::new("gemini", "Google Gemini", "star"),
                NavigationItem::new("whisper", "Speech to Text", "mic"),
            ],
        ));
        tree
    }

    /// Asserts `sub` is an order-preserving structural subset of `tree`.
    fn assert_subset(sub: &[NavigationSection], tree: &[NavigationSection]) {
        let mut cursor = 0;
        for section in sub {
            let pos = tree[cursor..]
                .iter()
                .position(|s| s.id == section.id)
                .expect("section present in source tree, in order");
            let source = &tree[cursor + pos];
            cursor += pos + 1;

            assert_eq!(section.title, source.title);
            let mut item_cursor = 0;
            for item in &section.items {
                let ipos = source.items[item_cursor..]
                    .iter()
                    .position(|i| i == item)
                    .expect("item present in source section, in order");
                item_cursor += ipos + 1;
            }
        }
    }

    #[test]
    fn install_keeps_only_matching_item() {
        let tree = quick_start_tree();
        let filtered = compute_filtered_sections("install", &tree);
        assert_eq!(
            &*filtered,
            &[NavigationSection::new(
                "quick-start",
                "Quick Start",
                "rocket",
                vec![NavigationItem::new("installation", "Installation", "download")],
            )]
        );
    }

    #[test]
    fn no_match_yields_empty() {
        let tree = quick_start_tree();
        assert!(compute_filtered_sections("zzz", &tree).is_empty());
    }

    #[test]
    fn empty_term_borrows_tree() {
        let tree = two_section_tree();
        let filtered = compute_filtered_sections("", &tree);
        assert!(matches!(filtered, Cow::Borrowed(_)));
        assert_eq!(&*filtered, tree.as_slice());
    }

    #[test]
    fn whitespace_term_is_not_trimmed() {
        let tree = two_section_tree();
        // "Speech to Text" contains a space; "ChatGPT" does not.
        let filtered = compute_filtered_sections(" ", &tree);
        let ids: Vec<&str> = filtered
            .iter()
            .flat_map(|s| s.items.iter().map(|i| i.id.as_str()))
            .collect();
        assert_eq!(ids, vec!["getting-started", "gemini", "whisper"]);
    }

    #[test]
    fn matching_is_case_insensitive_on_title_and_id() {
        let tree = two_section_tree();

        let by_title = compute_filtered_sections("SPEECH", &tree);
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].items[0].id, "whisper");

        let by_id = compute_filtered_sections("WhIsP", &tree);
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].items[0].id, "whisper");
    }

    #[test]
    fn section_title_alone_does_not_match() {
        let tree = two_section_tree();
        // "Services" only appears in a section title.
        assert!(compute_filtered_sections("services", &tree).is_empty());
    }

    #[test]
    fn results_preserve_tree_order() {
        let tree = two_section_tree();
        let filtered = compute_filtered_sections("t", &tree);
        let section_ids: Vec<&str> = filtered.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(section_ids, vec!["quick-start", "ai-services"]);
        assert_subset(&filtered, &tree);
    }

    #[test]
    fn every_retained_section_has_a_match() {
        let tree = two_section_tree();
        for term in ["a", "in", "GPT", "-", "o", "started", "xyz", "Gem"] {
            let filtered = compute_filtered_sections(term, &tree);
            assert_subset(&filtered, &tree);
            let needle = term.to_lowercase();
            for section in filtered.iter() {
                assert!(!section.items.is_empty(), "empty section kept for {term:?}");
                assert!(
                    section.items.iter().all(|i| item_matches(i, &needle)),
                    "non-matching item kept for {term:?}"
                );
            }
        }
    }
}
