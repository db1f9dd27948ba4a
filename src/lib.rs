//! Topix - a terminal-based catalog browser for data-structure topics.
//!
//! Topix renders a fixed catalog of eight data-structure topics as
//! searchable, expandable cards in the terminal, with vim-style keyboard
//! navigation, light/dark theming and a decorative particle burst when a
//! card expands.
//!
//! # Features
//!
//! - Case-insensitive live filtering on topic titles
//! - Expand/collapse cards, one at a time
//! - Vim-style keyboard shortcuts
//! - Purple light and dark themes
//! - Decorative particle burst on expand (can be disabled)
//!
//! # Example
//!
//! ```
//! use topix::catalog::Catalog;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let hits = catalog.filter("array");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].title, "Arrays");
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod catalog;
pub mod effects;
pub mod error;
pub mod search;
pub mod ui;

pub use error::{Result, TopixError};
