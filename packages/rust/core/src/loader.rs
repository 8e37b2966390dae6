//! Loading navigation trees and content from disk.
//!
//! A navigation file is TOML with `[[sections]]` tables, each holding
//! `[[sections.items]]`. A content directory holds one Markdown file per
//! item id (`chatgpt.md` → `chatgpt`).

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::Path;

use comrak::arena_tree::Node;
use comrak::nodes::{Ast, NodeValue};
use comrak::{Arena, Options, parse_document};
use tracing::{debug, instrument, warn};

use docbrowser_shared::{Content, DocBrowserError, NavTree, NavigationSection, Result};

use crate::content::ContentMap;

/// Read and validate a navigation file.
#[instrument]
pub fn load_tree_from(path: &Path) -> Result<Vec<NavigationSection>> {
    let text = std::fs::read_to_string(path).map_err(|e| DocBrowserError::io(path, e))?;
    let sections = parse_tree(&text)?;
    debug!(sections = sections.len(), "loaded navigation tree");
    Ok(sections)
}

/// Parse and validate a navigation tree from TOML text.
pub fn parse_tree(text: &str) -> Result<Vec<NavigationSection>> {
    let tree: NavTree = toml::from_str(text).map_err(|e| DocBrowserError::parse(e.to_string()))?;
    validate_tree(&tree.sections)?;
    Ok(tree.sections)
}

/// Reject empty trees and duplicate section or item ids.
///
/// Item ids must be unique across the whole tree since they key the
/// content map.
pub fn validate_tree(sections: &[NavigationSection]) -> Result<()> {
    if sections.is_empty() {
        return Err(DocBrowserError::validation(
            "navigation tree has no sections",
        ));
    }

    let mut section_ids = HashSet::new();
    let mut item_ids = HashSet::new();

    for section in sections {
        if !section_ids.insert(section.id.as_str()) {
            return Err(DocBrowserError::validation(format!(
                "duplicate section id '{}'",
                section.id
            )));
        }
        if section.items.is_empty() {
            warn!(section = %section.id, "section has no items and will never be shown");
        }
        for item in &section.items {
            if !item_ids.insert(item.id.as_str()) {
                return Err(DocBrowserError::validation(format!(
                    "duplicate item id '{}' in section '{}'",
                    item.id, section.id
                )));
            }
        }
    }

    Ok(())
}

/// Load every `*.md` file in `dir` as a content entry keyed by file stem.
#[instrument]
pub fn load_content_dir(dir: &Path) -> Result<ContentMap> {
    let entries = std::fs::read_dir(dir).map_err(|e| DocBrowserError::io(dir, e))?;

    let mut map = ContentMap::new();
    for entry in entries {
        let entry = entry.map_err(|e| DocBrowserError::io(dir, e))?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("md") || !path.is_file() {
            continue;
        }
        let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
            warn!(?path, "skipping content file with non-UTF-8 name");
            continue;
        };

        let text = std::fs::read_to_string(&path).map_err(|e| DocBrowserError::io(&path, e))?;
        map.insert(content_from_markdown(id, &text));
    }

    debug!(entries = map.len(), "loaded content directory");
    Ok(map)
}

/// Build a content entry from a Markdown document.
///
/// The first level-1 heading becomes the title and its source lines are
/// removed from the body. Without one, the title is derived from `id`.
pub fn content_from_markdown(id: &str, text: &str) -> Content {
    let arena = Arena::new();
    let root = parse_document(&arena, text, &Options::default());

    let title_heading = root.children().find_map(|node| {
        let ast = node.data.borrow();
        match &ast.value {
            NodeValue::Heading(heading) if heading.level == 1 => {
                let title = plain_text(node);
                let title = title.trim();
                (!title.is_empty()).then(|| {
                    (
                        title.to_string(),
                        ast.sourcepos.start.line,
                        ast.sourcepos.end.line,
                    )
                })
            }
            _ => None,
        }
    });

    match title_heading {
        Some((title, first, last)) => {
            let body = text
                .lines()
                .enumerate()
                .filter(|(i, _)| !(first..=last).contains(&(i + 1)))
                .map(|(_, line)| line)
                .collect::<Vec<_>>()
                .join("\n");
            Content::new(id, title, body.trim())
        }
        None => Content::new(id, title_from_id(id), text.trim()),
    }
}

/// Concatenated text of an inline subtree, without any markup.
fn plain_text<'a>(node: &'a Node<'a, RefCell<Ast>>) -> String {
    let mut out = String::new();
    for descendant in node.descendants() {
        match &descendant.data.borrow().value {
            NodeValue::Text(text) => out.push_str(text),
            NodeValue::Code(code) => out.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => out.push(' '),
            _ => {}
        }
    }
    out
}

/// Turn a kebab/snake id into a display title.
pub fn title_from_id(id: &str) -> String {
    id.replace(['-', '_'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(c) => {
                    let upper: String = c.to_uppercase().collect();
                    format!("{upper}{}", chars.collect::<String>())
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
