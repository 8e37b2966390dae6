//! Flattening the filtered tree into sidebar rows.

use docbrowser_shared::{NavigationItem, NavigationSection};

/// One drawable line of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarRow<'a> {
    Section {
        section: &'a NavigationSection,
        expanded: bool,
    },
    Item {
        section: &'a NavigationSection,
        item: &'a NavigationItem,
    },
}

impl<'a> SidebarRow<'a> {
    /// Id of the section or item this row stands for.
    pub fn id(&self) -> &'a str {
        match self {
            Self::Section { section, .. } => &section.id,
            Self::Item { item, .. } => &item.id,
        }
    }
}

/// Rows for `sections`: each section header followed by its items when it
/// is expanded. `reveal_all` shows items under collapsed sections too.
pub fn sidebar_rows<'a>(
    sections: &'a [NavigationSection],
    is_expanded: impl Fn(&str) -> bool,
    reveal_all: bool,
) -> Vec<SidebarRow<'a>> {
    let mut rows = Vec::new();
    for section in sections {
        let expanded = is_expanded(&section.id);
        rows.push(SidebarRow::Section { section, expanded });
        if expanded || reveal_all {
            rows.extend(
                section
                    .items
                    .iter()
                    .map(|item| SidebarRow::Item { section, item }),
            );
        }
    }
    rows
}
