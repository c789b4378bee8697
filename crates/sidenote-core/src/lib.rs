//! Sidenote Core Library
//!
//! Data model and scroll arithmetic for the Sidenote browser runtime:
//! command palette entries, navbar offset parsing, and active-heading
//! selection. Everything here is DOM-free and testable on the host.

pub mod command;
pub mod error;
pub mod offset;
pub mod toc;

pub use command::{
    CommandAction, CommandEntry, CommandSection, NavLink, PostLink, SiteManifest, ThemeMode,
    build_entries, slug, theme_entries,
};
pub use error::{CoreError, Result};
pub use offset::{
    ANCHOR_SCROLL_MARGIN, DEFAULT_NAVBAR_HEIGHT, NAVBAR_HEIGHT_VAR, SCROLL_DEBOUNCE_MS,
    TOC_SCROLL_MARGIN, anchor_scroll_top, format_px, parse_px, toc_scroll_position,
};
pub use toc::{Heading, select_active_heading};
