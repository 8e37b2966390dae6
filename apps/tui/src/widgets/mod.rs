//! Reusable TUI widgets.

mod markdown;

pub(crate) use markdown::markdown_lines;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Bottom status bar.
pub(crate) fn status_bar(msg: &str) -> Paragraph<'_> {
    Paragraph::new(format!(" {msg}"))
        .style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White),
        )
}

/// Single-line search input. Yellow border while focused.
pub(crate) fn search_box(term: &str, focused: bool, matches: usize) -> Paragraph<'_> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let title = if term.is_empty() {
        " Search (/) ".to_string()
    } else {
        format!(" Search — {matches} match(es) ")
    };
    let text = if term.is_empty() && !focused {
        Line::from("type / to search").style(Style::default().fg(Color::DarkGray))
    } else if focused {
        Line::from(format!("{term}▏"))
    } else {
        Line::from(term)
    };

    Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border),
    )
}
