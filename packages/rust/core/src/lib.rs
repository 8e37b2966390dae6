//! Documentation browser core for docbrowser.
//!
//! This crate holds the browser state ([`Browser`]) and everything it is
//! built from: the search filter, the content map with its fallback page,
//! sidebar projection, loaders for on-disk documentation, and the built-in
//! catalog. It renders nothing; the TUI and CLI sit on top of it.

pub mod browser;
pub mod catalog;
pub mod content;
pub mod filter;
pub mod icons;
pub mod loader;
pub mod sidebar;

pub use browser::Browser;
pub use content::ContentMap;
pub use filter::compute_filtered_sections;
pub use sidebar::{SidebarRow, sidebar_rows};

use docbrowser_shared::{Result, SessionConfig};
use tracing::info;

/// Build a browser session from resolved configuration.
///
/// The navigation file replaces the built-in tree. A content directory is
/// overlaid onto the built-in pages, so its files win on id clashes.
pub fn open_session(config: &SessionConfig) -> Result<Browser> {
    let tree = match &config.nav_file {
        Some(path) => loader::load_tree_from(path)?,
        None => catalog::navigation_tree(),
    };

    let mut content = catalog::content_map();
    if let Some(dir) = &config.content_dir {
        content.extend(loader::load_content_dir(dir)?);
    }

    info!(
        sections = tree.len(),
        pages = content.len(),
        start = %config.start_section,
        "opened documentation session"
    );

    Ok(Browser::new(tree, content)
        .with_start_section(config.start_section.clone())
        .with_expanded(config.expanded_sections.iter().cloned()))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use docbrowser_shared::AppConfig;

    use super::*;

    #[test]
    fn default_session_uses_builtin_catalog() {
        let config = SessionConfig::from(&AppConfig::default());
        let browser = open_session(&config).expect("open session");
        assert_eq!(browser.tree(), catalog::navigation_tree().as_slice());
        assert!(browser.is_expanded("quick-start"));
        assert!(browser.is_expanded("ai-services"));
        assert!(!browser.is_expanded("advanced"));
        assert_eq!(browser.active_content().title, "Getting Started");
    }

    #[test]
    fn chatgpt_selection_resolves_its_page() {
        let config = SessionConfig::from(&AppConfig::default());
        let mut browser = open_session(&config).expect("open session");
        browser.select_section("chatgpt");
        let content = browser.resolve_content("chatgpt");
        assert_eq!(content.title, "ChatGPT");
        assert!(!browser.content().is_fallback(content));
    }

    #[test]
    fn fixture_session_overlays_content() {
        let config = SessionConfig {
            start_section: "installation".into(),
            expanded_sections: vec![],
            nav_file: Some(PathBuf::from("../../../fixtures/nav.fixture.toml")),
            content_dir: Some(PathBuf::from("../../../fixtures/docs")),
        };
        let browser = open_session(&config).expect("open session");
        assert_eq!(browser.tree().len(), 2);
        assert!(browser.expanded_sections().is_empty());
        let installation = browser.active_content();
        assert!(installation.body.contains("npm install"));
        assert!(!installation.body.contains("registry"));
        // Fixture chatgpt.md has no heading, so its title comes from the id.
        assert_eq!(browser.resolve_content("chatgpt").title, "Chatgpt");
    }

    #[test]
    fn missing_nav_file_is_an_error() {
        let config = SessionConfig {
            start_section: "getting-started".into(),
            expanded_sections: vec![],
            nav_file: Some(PathBuf::from("/nonexistent/nav.toml")),
            content_dir: None,
        };
        assert!(open_session(&config).is_err());
    }
}
