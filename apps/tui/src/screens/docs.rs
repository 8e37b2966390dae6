//! Documentation screen — search box and sidebar on the left, content pane
//! on the right.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use docbrowser_core::{Browser, SidebarRow, icons, sidebar_rows};

use crate::widgets::{markdown_lines, search_box};

/// Which pane receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Sidebar,
    Search,
}

pub(crate) struct DocsScreen {
    browser: Browser,
    focus: Focus,
    /// Index into the current sidebar rows.
    cursor: usize,
    /// Vertical scroll of the content pane.
    scroll: u16,
}

impl DocsScreen {
    pub(crate) fn new(browser: Browser) -> Self {
        let mut screen = Self {
            browser,
            focus: Focus::Sidebar,
            cursor: 0,
            scroll: 0,
        };
        screen.cursor_to_active();
        screen
    }

    pub(crate) fn is_editing(&self) -> bool {
        self.focus == Focus::Search
    }

    /// One-line summary for the status bar.
    pub(crate) fn status(&self) -> String {
        let active = self.browser.active_section_id();
        match self.browser.find_item(active) {
            Some((section, item)) if !self.browser.showing_fallback() => {
                format!("{} › {}", section.title, item.title)
            }
            Some((section, item)) => format!("{} › {} (no page yet)", section.title, item.title),
            None => "Select a topic — press ? for help".to_string(),
        }
    }

    fn rows(&self) -> Vec<SidebarRow<'_>> {
        let browser = &self.browser;
        sidebar_rows(
            browser.filtered_sections(),
            |id| browser.is_expanded(id),
            !browser.search_term().is_empty(),
        )
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    pub(crate) fn draw(&self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(34), // Sidebar
                Constraint::Min(1),    // Content
            ])
            .split(area);

        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search box
                Constraint::Min(1),   // Navigation
            ])
            .split(columns[0]);

        f.render_widget(
            search_box(
                self.browser.search_term(),
                self.focus == Focus::Search,
                self.browser.match_count(),
            ),
            sidebar[0],
        );
        self.draw_navigation(f, sidebar[1]);
        self.draw_content(f, columns[1]);
    }

    fn draw_navigation(&self, f: &mut Frame, area: Rect) {
        let rows = self.rows();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Documentation ")
            .border_style(if self.focus == Focus::Sidebar {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            });

        if rows.is_empty() {
            let empty = Paragraph::new(format!(
                "No topics match \"{}\".\n\nEsc clears the search.",
                self.browser.search_term()
            ))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
            f.render_widget(empty, area);
            return;
        }

        let active = self.browser.active_section_id();
        let items: Vec<ListItem> = rows
            .iter()
            .map(|row| match row {
                SidebarRow::Section { section, expanded } => {
                    let arrow = if *expanded { "▾" } else { "▸" };
                    ListItem::new(format!(
                        "{arrow} {} {}",
                        icons::glyph(&section.icon),
                        section.title
                    ))
                    .style(Style::default().add_modifier(Modifier::BOLD))
                }
                SidebarRow::Item { item, .. } => {
                    let style = if item.id == active {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default()
                    };
                    ListItem::new(format!("    {} {}", icons::glyph(&item.icon), item.title))
                        .style(style)
                }
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::REVERSED),
            );

        let mut state = ListState::default().with_selected(Some(self.cursor.min(rows.len() - 1)));
        f.render_stateful_widget(list, area, &mut state);
    }

    fn draw_content(&self, f: &mut Frame, area: Rect) {
        let content = self.browser.active_content();
        let active = self.browser.active_section_id();

        let mut lines: Vec<Line> = Vec::new();
        if let Some((section, _)) = self.browser.find_item(active) {
            lines.push(
                Line::from(format!("{} ›", section.title))
                    .style(Style::default().fg(Color::DarkGray)),
            );
            lines.push(Line::from(""));
        }
        lines.extend(markdown_lines(&content.body));

        let (prev, next) = self.browser.adjacent_items(active);
        if prev.is_some() || next.is_some() {
            lines.push(Line::from(""));
            let mut footer = Vec::new();
            if let Some(prev) = prev {
                footer.push(Span::raw(format!("[ ‹ {}", prev.title)));
            }
            if let Some(next) = next {
                if !footer.is_empty() {
                    footer.push(Span::raw("    "));
                }
                footer.push(Span::raw(format!("{} › ]", next.title)));
            }
            lines.push(Line::from(footer).style(Style::default().fg(Color::DarkGray)));
        }

        let page = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", content.title)),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        f.render_widget(page, area);
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    pub(crate) fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match self.focus {
            Focus::Search => self.handle_search_key(code, modifiers),
            Focus::Sidebar => self.handle_sidebar_key(code),
        }
    }

    fn handle_search_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Esc => self.focus = Focus::Sidebar,
            KeyCode::Enter => {
                self.focus = Focus::Sidebar;
                self.cursor = self
                    .rows()
                    .iter()
                    .position(|row| matches!(row, SidebarRow::Item { .. }))
                    .unwrap_or(0);
            }
            KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.update_search(String::new());
            }
            KeyCode::Backspace => {
                let mut term = self.browser.search_term().to_string();
                term.pop();
                self.update_search(term);
            }
            KeyCode::Char(c) => {
                let mut term = self.browser.search_term().to_string();
                term.push(c);
                self.update_search(term);
            }
            _ => {}
        }
    }

    fn handle_sidebar_key(&mut self, code: KeyCode) {
        let row_count = self.rows().len();
        match code {
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Esc if !self.browser.search_term().is_empty() => {
                self.update_search(String::new());
                self.cursor_to_active();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < row_count {
                    self.cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_row(),
            KeyCode::Char('[') => self.step_topic(false),
            KeyCode::Char(']') => self.step_topic(true),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            _ => {}
        }
    }

    fn update_search(&mut self, term: String) {
        self.browser.set_search_term(term);
        let row_count = self.rows().len();
        self.cursor = self.cursor.min(row_count.saturating_sub(1));
    }

    /// Toggle the section under the cursor, or open the item under it.
    fn activate_row(&mut self) {
        let target = self.rows().get(self.cursor).map(|row| match row {
            SidebarRow::Section { section, .. } => (true, section.id.clone()),
            SidebarRow::Item { item, .. } => (false, item.id.clone()),
        });

        match target {
            Some((true, section_id)) => self.browser.toggle_section(&section_id),
            Some((false, item_id)) => self.open(item_id),
            None => {}
        }
    }

    fn step_topic(&mut self, forward: bool) {
        let (prev, next) = self.browser.adjacent_items(self.browser.active_section_id());
        let target = if forward { next } else { prev };
        if let Some(item) = target.map(|item| item.id.clone()) {
            self.open(item);
            self.cursor_to_active();
        }
    }

    fn open(&mut self, item_id: String) {
        self.browser.select_section(item_id);
        self.scroll = 0;
    }

    /// Put the cursor on the active item if it is visible.
    fn cursor_to_active(&mut self) {
        let active = self.browser.active_section_id();
        let pos = self
            .rows()
            .iter()
            .position(|row| matches!(row, SidebarRow::Item { item, .. } if item.id == active));
        if let Some(pos) = pos {
            self.cursor = pos;
        }
    }
}
