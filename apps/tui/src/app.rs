//! Core TUI application state and event loop.

use std::io;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use docbrowser_core::Browser;

use crate::screens::DocsScreen;
use crate::widgets::status_bar;

/// Application state.
pub(crate) struct App {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Whether help overlay is visible.
    pub show_help: bool,
    pub docs: DocsScreen,
}

impl App {
    pub(crate) fn new(browser: Browser) -> Self {
        Self {
            should_quit: false,
            show_help: false,
            docs: DocsScreen::new(browser),
        }
    }
}

/// Entry point — sets up terminal, runs event loop, restores terminal.
pub(crate) fn run(browser: Browser) -> Result<()> {
    // Setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, App::new(browser));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &app))?;

        // Poll for events with 100ms timeout for responsive UI
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key.code, key.modifiers);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    // Global keybindings (always active)
    match code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('q') if !app.docs.is_editing() => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') if !app.docs.is_editing() => {
            app.show_help = !app.show_help;
            return;
        }
        _ => {}
    }

    // If help is showing, consume any key to dismiss
    if app.show_help {
        app.show_help = false;
        return;
    }

    app.docs.handle_key(code, modifiers);
}

fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    app.docs.draw(f, chunks[0]);

    let status = app.docs.status();
    f.render_widget(status_bar(&status), chunks[1]);

    // Help overlay
    if app.show_help {
        draw_help_overlay(f);
    }
}

fn draw_help_overlay(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());

    let help_text = vec![
        Line::from("Keybindings").style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("  /            Search topics"),
        Line::from("  Esc          Leave search box / clear search"),
        Line::from("  Ctrl-U       Clear search text"),
        Line::from("  ↑/↓ or k/j   Move through the sidebar"),
        Line::from("  Enter/Space  Toggle section / open topic"),
        Line::from("  [ / ]        Previous / next topic"),
        Line::from("  PgUp/PgDn    Scroll the page"),
        Line::from("  ?            Toggle this help"),
        Line::from("  q / Ctrl-C   Quit"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help — press any key to close ")
                .style(Style::default().bg(Color::DarkGray)),
        )
        .style(Style::default().fg(Color::White).bg(Color::DarkGray));

    // Clear background
    f.render_widget(ratatui::widgets::Clear, area);
    f.render_widget(help, area);
}

/// Create a centered rectangle with percentage width and height.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use docbrowser_core::catalog;

    use super::*;

    fn app() -> App {
        App::new(Browser::new(catalog::navigation_tree(), catalog::content_map()))
    }

    #[test]
    fn q_quits_outside_search_only() {
        let mut a = app();
        a.docs.handle_key(KeyCode::Char('/'), KeyModifiers::NONE);
        handle_key(&mut a, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(!a.should_quit);

        handle_key(&mut a, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(a.should_quit);
    }

    #[test]
    fn help_overlay_swallows_next_key() {
        let mut a = app();
        handle_key(&mut a, KeyCode::Char('?'), KeyModifiers::NONE);
        assert!(a.show_help);
        handle_key(&mut a, KeyCode::Char('/'), KeyModifiers::NONE);
        assert!(!a.show_help);
        assert!(!a.docs.is_editing());
    }

    #[test]
    fn centered_rect_is_inside_parent() {
        let parent = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 60, parent);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 30);
        assert_eq!(inner.x, 20);
    }
}
