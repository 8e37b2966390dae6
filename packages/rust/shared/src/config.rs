//! Application configuration for docbrowser.
//!
//! User config lives at `~/.docbrowser/docbrowser.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DocBrowserError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "docbrowser.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".docbrowser";

/// Item shown when a session starts.
pub const DEFAULT_START_SECTION: &str = "getting-started";

/// Sections expanded when a session starts.
pub const DEFAULT_EXPANDED_SECTIONS: &[&str] = &["quick-start", "ai-services"];

// ---------------------------------------------------------------------------
// Config structs (matching docbrowser.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Initial browser state.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Where documentation comes from.
    #[serde(default)]
    pub site: SiteConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Item id selected when a session starts.
    #[serde(default = "default_start_section")]
    pub start_section: String,

    /// Section ids expanded when a session starts.
    #[serde(default = "default_expanded_sections")]
    pub expanded_sections: Vec<String>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            start_section: default_start_section(),
            expanded_sections: default_expanded_sections(),
        }
    }
}

fn default_start_section() -> String {
    DEFAULT_START_SECTION.into()
}
fn default_expanded_sections() -> Vec<String> {
    DEFAULT_EXPANDED_SECTIONS
        .iter()
        .map(|id| id.to_string())
        .collect()
}

/// `[site]` section. Both fields fall back to the built-in catalog when unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Path to a navigation TOML file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav_file: Option<String>,

    /// Directory of Markdown content files, one per item id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_dir: Option<String>,
}

// ---------------------------------------------------------------------------
// Session config (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime session configuration — merged from config file + CLI flags.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Item id selected at start.
    pub start_section: String,
    /// Section ids expanded at start.
    pub expanded_sections: Vec<String>,
    /// Navigation file override; `None` means the built-in tree.
    pub nav_file: Option<PathBuf>,
    /// Content directory override; `None` means the built-in content.
    pub content_dir: Option<PathBuf>,
}

impl From<&AppConfig> for SessionConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            start_section: config.defaults.start_section.clone(),
            expanded_sections: config.defaults.expanded_sections.clone(),
            nav_file: config.site.nav_file.as_ref().map(PathBuf::from),
            content_dir: config.site.content_dir.as_ref().map(PathBuf::from),
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.docbrowser/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| DocBrowserError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.docbrowser/docbrowser.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| DocBrowserError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        DocBrowserError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| DocBrowserError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| DocBrowserError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| DocBrowserError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
