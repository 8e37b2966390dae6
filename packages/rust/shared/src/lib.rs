//! Shared types, error model, and configuration for docbrowser.
//!
//! This crate is the foundation depended on by all other docbrowser crates.
//! It provides:
//! - [`DocBrowserError`] — the unified error type
//! - Domain types ([`NavigationSection`], [`NavigationItem`], [`Content`])
//! - Configuration ([`AppConfig`], [`SessionConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DEFAULT_EXPANDED_SECTIONS, DEFAULT_START_SECTION, DefaultsConfig, SessionConfig,
    SiteConfig, config_dir, config_file_path, init_config, load_config, load_config_from,
};
pub use error::{DocBrowserError, Result};
pub use types::{Content, DEFAULT_ICON, NavTree, NavigationItem, NavigationSection};
