//! CLI command definitions, routing, and tracing setup.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use docbrowser_core::{Browser, icons, open_session};
use docbrowser_shared::{
    AppConfig, Content, NavigationSection, SessionConfig, init_config, load_config,
};
use tracing::{info, warn};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// docbrowser — read the API-wrapper documentation offline.
#[derive(Parser)]
#[command(
    name = "docbrowser",
    version,
    about = "Browse and search the API-wrapper documentation from the terminal.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Navigation TOML file replacing the built-in tree.
    #[arg(long, env = "DOCBROWSER_NAV", global = true)]
    pub nav: Option<PathBuf>,

    /// Directory of Markdown pages overlaid on the built-in content.
    #[arg(long, env = "DOCBROWSER_CONTENT", global = true)]
    pub content: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Print the navigation tree.
    Tree {
        /// Only show topics matching this text.
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Search topic titles and ids.
    Search {
        /// Text to look for (case-insensitive substring).
        term: String,

        /// Emit matching sections as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print a documentation page.
    Show {
        /// Topic id, e.g. `chatgpt`.
        id: String,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr so command
/// output on stdout stays pipeable.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "docbrowser=warn",
        1 => "docbrowser=info",
        2 => "docbrowser=debug",
        _ => "docbrowser=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Command::Tree { filter } => cmd_tree(&session(&cli)?, filter.as_deref()),
        Command::Search { term, json } => cmd_search(&session(&cli)?, term, *json),
        Command::Show { id } => cmd_show(&session(&cli)?, id),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(&cli),
        },
    }
}

/// Config file merged with CLI overrides.
fn session_config(cli: &Cli) -> Result<SessionConfig> {
    let config = load_config()?;
    let mut session = SessionConfig::from(&config);
    if let Some(nav) = &cli.nav {
        session.nav_file = Some(nav.clone());
    }
    if let Some(content) = &cli.content {
        session.content_dir = Some(content.clone());
    }
    Ok(session)
}

fn session(cli: &Cli) -> Result<Browser> {
    Ok(open_session(&session_config(cli)?)?)
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_tree(browser: &Browser, filter: Option<&str>) -> Result<()> {
    let sections =
        docbrowser_core::compute_filtered_sections(filter.unwrap_or_default(), browser.tree());
    info!(sections = sections.len(), "printing navigation tree");
    print!("{}", render_tree(&sections));
    Ok(())
}

fn cmd_search(browser: &Browser, term: &str, json: bool) -> Result<()> {
    let matches = docbrowser_core::compute_filtered_sections(term, browser.tree());
    info!(term, sections = matches.len(), "search complete");

    if json {
        println!("{}", serde_json::to_string_pretty(&*matches)?);
    } else if matches.is_empty() {
        println!("No topics match \"{term}\".");
    } else {
        print!("{}", render_tree(&matches));
    }
    Ok(())
}

fn cmd_show(browser: &Browser, id: &str) -> Result<()> {
    let content = browser.resolve_content(id);
    if browser.content().is_fallback(content) {
        warn!(id, "no page registered for topic, showing fallback");
    }

    let section = browser.find_item(id).map(|(section, _)| section.title.as_str());
    let (prev, next) = browser.adjacent_items(id);
    print!(
        "{}",
        render_page(
            content,
            section,
            prev.map(|i| i.title.as_str()),
            next.map(|i| i.title.as_str())
        )
    );
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show(cli: &Cli) -> Result<()> {
    let mut config: AppConfig = load_config()?;
    if let Some(nav) = &cli.nav {
        config.site.nav_file = Some(nav.display().to_string());
    }
    if let Some(content) = &cli.content {
        config.site.content_dir = Some(content.display().to_string());
    }
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Indented tree listing with icons and ids.
fn render_tree(sections: &[NavigationSection]) -> String {
    let mut out = String::new();
    for section in sections {
        let _ = writeln!(
            out,
            "{} {}  ({})",
            icons::glyph(&section.icon),
            section.title,
            section.id
        );
        for item in &section.items {
            let _ = writeln!(
                out,
                "    {} {}  ({})",
                icons::glyph(&item.icon),
                item.title,
                item.id
            );
        }
    }
    out
}

/// Plain-text page: breadcrumb, underlined title, body, prev/next footer.
fn render_page(
    content: &Content,
    section: Option<&str>,
    prev: Option<&str>,
    next: Option<&str>,
) -> String {
    let mut out = String::new();
    if let Some(section) = section {
        let _ = writeln!(out, "{section} ›");
    }
    let _ = writeln!(out, "{}", content.title);
    let _ = writeln!(out, "{}", "=".repeat(content.title.chars().count()));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", content.body);

    if prev.is_some() || next.is_some() {
        let _ = writeln!(out);
        if let Some(prev) = prev {
            let _ = writeln!(out, "Previous: {prev}");
        }
        if let Some(next) = next {
            let _ = writeln!(out, "Next:     {next}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use docbrowser_shared::NavigationItem;

    use super::*;

    #[test]
    fn cli_parses_global_overrides() {
        let cli = Cli::try_parse_from([
            "docbrowser",
            "search",
            "gpt",
            "--json",
            "--nav",
            "nav.toml",
            "-vv",
        ])
        .expect("parse args");
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.nav, Some(PathBuf::from("nav.toml")));
        assert!(matches!(cli.command, Command::Search { ref term, json: true } if term == "gpt"));
    }

    #[test]
    fn render_tree_lists_sections_and_items() {
        let sections = vec![NavigationSection::new(
            "quick-start",
            "Quick Start",
            "rocket",
            vec![NavigationItem::new("installation", "Installation", "download")],
        )];
        let out = render_tree(&sections);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("Quick Start  (quick-start)"));
        assert!(lines[1].starts_with("    "));
        assert!(lines[1].ends_with("Installation  (installation)"));
    }

    #[test]
    fn render_page_includes_breadcrumb_and_footer() {
        let content = Content::new("chatgpt", "ChatGPT", "Body text.");
        let out = render_page(&content, Some("AI Services"), None, Some("Claude"));
        assert!(out.starts_with("AI Services ›\nChatGPT\n=======\n"));
        assert!(out.contains("Body text."));
        assert!(out.contains("Next:     Claude"));
        assert!(!out.contains("Previous:"));
    }
}
