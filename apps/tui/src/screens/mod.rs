//! TUI screen definitions.
//!
//! A screen encapsulates its own state and rendering logic.

mod docs;

pub(crate) use docs::DocsScreen;
