//! Built-in documentation for the API-wrapper library.
//!
//! Used whenever no navigation file or content directory is configured.
//! Not every item has a page; those render the fallback.

use docbrowser_shared::{NavigationItem, NavigationSection};

use crate::content::ContentMap;
use crate::loader::content_from_markdown;

const PAGES: &[(&str, &str)] = &[
    ("getting-started", include_str!("../content/getting-started.md")),
    ("installation", include_str!("../content/installation.md")),
    ("configuration", include_str!("../content/configuration.md")),
    ("authentication", include_str!("../content/authentication.md")),
    ("chatgpt", include_str!("../content/chatgpt.md")),
    ("claude", include_str!("../content/claude.md")),
    ("gemini", include_str!("../content/gemini.md")),
    ("image-generation", include_str!("../content/image-generation.md")),
    ("whisper", include_str!("../content/whisper.md")),
    ("youtube", include_str!("../content/youtube.md")),
    ("spotify", include_str!("../content/spotify.md")),
    ("translation", include_str!("../content/translation.md")),
    ("weather", include_str!("../content/weather.md")),
    ("error-handling", include_str!("../content/error-handling.md")),
    ("rate-limiting", include_str!("../content/rate-limiting.md")),
];

/// The built-in navigation tree.
pub fn navigation_tree() -> Vec<NavigationSection> {
    vec![
        NavigationSection::new(
            "quick-start",
            "Quick Start",
            "rocket",
            vec![
                NavigationItem::new("getting-started", "Getting Started", "play"),
                NavigationItem::new("installation", "Installation", "download"),
                NavigationItem::new("configuration", "Configuration", "settings"),
                NavigationItem::new("authentication", "Authentication", "key"),
            ],
        ),
        NavigationSection::new(
            "ai-services",
            "AI Services",
            "sparkles",
            vec![
                NavigationItem::new("chatgpt", "ChatGPT", "chat"),
                NavigationItem::new("claude", "Claude", "chat"),
                NavigationItem::new("gemini", "Google Gemini", "star"),
                NavigationItem::new("image-generation", "Image Generation", "image"),
                NavigationItem::new("whisper", "Speech to Text", "mic"),
            ],
        ),
        NavigationSection::new(
            "media-services",
            "Media Services",
            "video",
            vec![
                NavigationItem::new("youtube", "YouTube", "video"),
                NavigationItem::new("spotify", "Spotify", "music"),
            ],
        ),
        NavigationSection::new(
            "utilities",
            "Utilities",
            "tools",
            vec![
                NavigationItem::new("translation", "Translation", "book"),
                NavigationItem::new("weather", "Weather", "star"),
                NavigationItem::new("url-shortener", "URL Shortener", "code"),
            ],
        ),
        NavigationSection::new(
            "advanced",
            "Advanced",
            "shield",
            vec![
                NavigationItem::new("error-handling", "Error Handling", "warning"),
                NavigationItem::new("rate-limiting", "Rate Limiting", "timer"),
                NavigationItem::new("timeouts", "Timeouts & Retries", "timer"),
            ],
        ),
    ]
}

/// The built-in content pages.
pub fn content_map() -> ContentMap {
    PAGES
        .iter()
        .map(|(id, text)| content_from_markdown(id, text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::validate_tree;

    #[test]
    fn builtin_tree_is_valid() {
        validate_tree(&navigation_tree()).expect("built-in tree validates");
    }

    #[test]
    fn every_page_belongs_to_an_item() {
        let tree = navigation_tree();
        let content = content_map();
        assert_eq!(content.len(), PAGES.len());
        for (id, _) in PAGES {
            assert!(
                tree.iter().any(|s| s.items.iter().any(|i| i.id == *id)),
                "page '{id}' has no navigation item"
            );
        }
    }

    #[test]
    fn chatgpt_page_has_heading_title() {
        let content = content_map();
        let page = content.resolve("chatgpt");
        assert_eq!(page.title, "ChatGPT");
        assert!(page.body.contains("client.chatgpt.ask"));
    }

    #[test]
    fn default_expanded_sections_exist() {
        let tree = navigation_tree();
        for id in docbrowser_shared::DEFAULT_EXPANDED_SECTIONS {
            assert!(tree.iter().any(|s| s.id == *id));
        }
    }

    #[test]
    fn items_without_pages_fall_back() {
        let content = content_map();
        assert!(content.is_fallback(content.resolve("timeouts")));
        assert!(content.is_fallback(content.resolve("url-shortener")));
    }
}
