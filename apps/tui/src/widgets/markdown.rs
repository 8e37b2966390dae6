//! Markdown styling for the content pane.
//!
//! The body is parsed with comrak and the AST is walked block by block.
//! Headings, code blocks, lists, emphasis, code spans and links choose their
//! own styles. Tables and raw HTML pass through as plain text.

use std::cell::RefCell;

use comrak::arena_tree::Node;
use comrak::nodes::{Ast, ListType, NodeValue};
use comrak::{Arena, Options, parse_document};
use ratatui::prelude::*;

type AstNode<'a> = Node<'a, RefCell<Ast>>;

pub(crate) fn markdown_lines(body: &str) -> Vec<Line<'static>> {
    let arena = Arena::new();
    let root = parse_document(&arena, body, &Options::default());

    let mut writer = LineWriter::default();
    for (i, block) in root.children().enumerate() {
        if i > 0 {
            writer.lines.push(Line::default());
        }
        writer.block(block);
    }
    writer.lines
}

fn heading_style(level: u8) -> Style {
    let style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    if level == 1 {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

#[derive(Default)]
struct LineWriter {
    lines: Vec<Line<'static>>,
    /// Spans of the line being built.
    spans: Vec<Span<'static>>,
    /// Lead for continuation lines inside a list item.
    indent: String,
    /// Bullet or number for the next line only.
    marker: Option<String>,
}

impl LineWriter {
    fn flush(&mut self) {
        let lead = self.marker.take().unwrap_or_else(|| self.indent.clone());
        let mut spans = Vec::with_capacity(self.spans.len() + 1);
        if !lead.is_empty() {
            spans.push(Span::raw(lead));
        }
        spans.append(&mut self.spans);
        self.lines.push(Line::from(spans));
    }

    fn block<'a>(&mut self, node: &'a AstNode<'a>) {
        let ast = node.data.borrow();
        match &ast.value {
            NodeValue::Heading(heading) => {
                self.inlines(node, heading_style(heading.level));
                self.flush();
            }
            NodeValue::Paragraph => {
                self.inlines(node, Style::default());
                self.flush();
            }
            NodeValue::CodeBlock(code) => {
                for line in code.literal.lines() {
                    self.spans.push(Span::styled(
                        format!("  {line}"),
                        Style::default().fg(Color::Yellow),
                    ));
                    self.flush();
                }
            }
            NodeValue::List(list) => {
                let mut number = list.start;
                for item in node.children() {
                    let marker = match list.list_type {
                        ListType::Bullet => "• ".to_string(),
                        ListType::Ordered => format!("{number}. "),
                    };
                    number += 1;
                    self.item(item, &marker);
                }
            }
            NodeValue::ThematicBreak => {
                self.spans.push(Span::styled(
                    "─".repeat(24),
                    Style::default().fg(Color::DarkGray),
                ));
                self.flush();
            }
            NodeValue::HtmlBlock(html) => {
                for line in html.literal.lines() {
                    self.spans.push(Span::raw(line.to_string()));
                    self.flush();
                }
            }
            _ => {
                for child in node.children() {
                    self.block(child);
                }
            }
        }
    }

    /// Render one list item; its first line carries `marker`, the rest align
    /// under the item text.
    fn item<'a>(&mut self, item: &'a AstNode<'a>, marker: &str) {
        let outer = std::mem::take(&mut self.indent);
        let lead = format!("{outer}  {marker}");
        self.indent = " ".repeat(lead.chars().count());
        self.marker = Some(lead);

        for child in item.children() {
            self.block(child);
        }
        if self.marker.is_some() {
            self.flush();
        }

        self.indent = outer;
    }

    fn inlines<'a>(&mut self, node: &'a AstNode<'a>, style: Style) {
        for child in node.children() {
            self.inline(child, style);
        }
    }

    fn inline<'a>(&mut self, node: &'a AstNode<'a>, style: Style) {
        let ast = node.data.borrow();
        match &ast.value {
            NodeValue::Text(text) => self.spans.push(Span::styled(text.to_string(), style)),
            NodeValue::Code(code) => self
                .spans
                .push(Span::styled(code.literal.to_string(), style.fg(Color::Yellow))),
            NodeValue::Emph => self.inlines(node, style.add_modifier(Modifier::ITALIC)),
            NodeValue::Strong => self.inlines(node, style.add_modifier(Modifier::BOLD)),
            NodeValue::Link(link) => {
                let start = self.spans.len();
                self.inlines(node, style.fg(Color::Blue).add_modifier(Modifier::UNDERLINED));
                let label: String = self
                    .spans
                    .get(start..)
                    .unwrap_or_default()
                    .iter()
                    .map(|span| &*span.content)
                    .collect();
                let url = link.url.to_string();
                // Autolinks already show their target.
                if !url.is_empty() && label != url {
                    self.spans.push(Span::styled(
                        format!(" ({url})"),
                        style.fg(Color::DarkGray),
                    ));
                }
            }
            NodeValue::Image(_) => self.inlines(node, style.add_modifier(Modifier::ITALIC)),
            NodeValue::HtmlInline(html) => self.spans.push(Span::styled(html.to_string(), style)),
            NodeValue::SoftBreak | NodeValue::LineBreak => self.flush(),
            _ => self.inlines(node, style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| &*span.content).collect()
    }

    fn span_with<'a>(line: &'a Line<'static>, content: &str) -> &'a Span<'static> {
        line.spans
            .iter()
            .find(|span| span.content == content)
            .unwrap_or_else(|| panic!("no span {content:?} in {:?}", text(line)))
    }

    #[test]
    fn fences_are_dropped_and_code_indented() {
        let lines = markdown_lines("Intro\n```js\nlet x = 1;\n```\nOutro");
        let texts: Vec<String> = lines.iter().map(text).collect();
        assert_eq!(texts, vec!["Intro", "", "  let x = 1;", "", "Outro"]);
        assert_eq!(lines[2].spans[0].style.fg, Some(Color::Yellow));
    }

    #[test]
    fn inline_code_and_bold_are_styled() {
        let lines = markdown_lines("Use `ask` for **one** prompt");
        assert_eq!(lines.len(), 1);
        assert_eq!(text(&lines[0]), "Use ask for one prompt");
        assert_eq!(span_with(&lines[0], "ask").style.fg, Some(Color::Yellow));
        assert!(
            span_with(&lines[0], "one")
                .style
                .add_modifier
                .contains(Modifier::BOLD)
        );
    }

    #[test]
    fn spaced_double_asterisks_stay_literal() {
        let lines = markdown_lines("Compute 2 ** 3 and 4 ** 5 here");
        assert_eq!(text(&lines[0]), "Compute 2 ** 3 and 4 ** 5 here");
        assert!(
            lines[0]
                .spans
                .iter()
                .all(|span| !span.style.add_modifier.contains(Modifier::BOLD))
        );
    }

    #[test]
    fn unclosed_backtick_is_not_code() {
        let lines = markdown_lines("Use `ask here and more");
        assert_eq!(text(&lines[0]), "Use `ask here and more");
        assert!(lines[0].spans.iter().all(|span| span.style.fg.is_none()));
    }

    #[test]
    fn deep_headings_are_styled() {
        let lines = markdown_lines("#### Deep heading\n\n# Top *level*");
        assert_eq!(text(&lines[0]), "Deep heading");
        let deep = span_with(&lines[0], "Deep heading");
        assert_eq!(deep.style.fg, Some(Color::Cyan));
        assert!(deep.style.add_modifier.contains(Modifier::BOLD));
        assert!(!deep.style.add_modifier.contains(Modifier::UNDERLINED));

        let emphasized = span_with(&lines[2], "level");
        assert!(
            emphasized
                .style
                .add_modifier
                .contains(Modifier::UNDERLINED | Modifier::ITALIC)
        );
    }

    #[test]
    fn bullets_of_either_kind_get_a_marker() {
        let dash = markdown_lines("- first");
        assert_eq!(dash[0].spans[0].content, "  • ");
        assert_eq!(text(&dash[0]), "  • first");

        let star = markdown_lines("* star bullet");
        assert_eq!(text(&star[0]), "  • star bullet");
    }

    #[test]
    fn ordered_lists_keep_their_numbers() {
        let lines = markdown_lines("1. first\n2. second");
        let texts: Vec<String> = lines.iter().map(text).collect();
        assert_eq!(texts, vec!["  1. first", "  2. second"]);

        let from_three = markdown_lines("3. third\n4. fourth");
        assert_eq!(text(&from_three[1]), "  4. fourth");
    }

    #[test]
    fn nested_lists_indent_under_their_parent() {
        let lines = markdown_lines("- outer\n  - inner");
        let texts: Vec<String> = lines.iter().map(text).collect();
        assert_eq!(texts, vec!["  • outer", "      • inner"]);
    }

    #[test]
    fn links_show_text_then_target() {
        let lines = markdown_lines("See [docs](https://x.y).");
        assert_eq!(text(&lines[0]), "See docs (https://x.y).");
        assert!(
            span_with(&lines[0], "docs")
                .style
                .add_modifier
                .contains(Modifier::UNDERLINED)
        );

        let auto = markdown_lines("<https://x.y>");
        assert_eq!(text(&auto[0]), "https://x.y");
    }

    #[test]
    fn mixed_blocks_each_get_their_own_styling() {
        let body = "Compute 2 ** 3 here\n#### Deep heading\n* star bullet\n1. first\nSee [docs](https://x.y)";
        let texts: Vec<String> = markdown_lines(body).iter().map(text).collect();
        assert_eq!(
            texts,
            vec![
                "Compute 2 ** 3 here",
                "",
                "Deep heading",
                "",
                "  • star bullet",
                "",
                "  1. first",
                "     See docs (https://x.y)",
            ]
        );
    }

    #[test]
    fn built_in_pages_render_without_fence_markers() {
        let content = docbrowser_core::catalog::content_map();
        for id in ["getting-started", "installation", "chatgpt", "error-handling"] {
            let lines = markdown_lines(&content.resolve(id).body);
            assert!(!lines.is_empty(), "{id} rendered nothing");
            assert!(
                lines
                    .iter()
                    .all(|line| !text(line).trim_start().starts_with("```")),
                "{id} leaked a fence marker"
            );
        }
    }
}
