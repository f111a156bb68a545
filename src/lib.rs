//! tmenu - a dmenu-style menu for the terminal.
//!
//! Items are read from standard input, one per line. The menu is drawn as a
//! strip anchored to the top or bottom edge of the terminal; typing filters
//! the items, navigation keys move the text cursor and the selection, and
//! confirming prints the chosen line to standard output.
//!
//! The crate splits into a core that owns all menu state and a thin terminal
//! adapter around it:
//!
//! - [`item`]: the store of candidate lines and their display widths
//! - [`matcher`]: rebuilds the ranked match list on every edit
//! - [`pager`]: partitions the match list into screen-sized pages
//! - [`input`]: the bounded UTF-8 filter buffer and its cursor
//! - [`menu`]: the input/selection state machine tying the above together
//! - [`binds`]: logical key symbols and the Emacs/vi chord tables
//! - [`tui`]: crossterm/ratatui presentation and the event loop
//!
//! The core never touches the terminal; it communicates through
//! [`menu::Feedback`] values which the adapter turns into renders, emitted
//! lines and clipboard requests.

#[macro_use]
extern crate log;

use thiserror::Error;

pub mod binds;
pub mod input;
pub mod item;
pub mod matcher;
pub mod menu;
pub mod options;
pub mod pager;
pub mod theme;
pub mod tui;

pub use crate::binds::{Keysym, Mods};
pub use crate::item::{CellMeasure, Item, ItemId, ItemStore, Measure};
pub use crate::matcher::{Comparator, MatchList};
pub use crate::menu::{Feedback, Menu, SessionState};
pub use crate::options::Options;
pub use crate::pager::{Geometry, Page, PageList};
pub use crate::theme::Theme;

/// Errors surfaced by the menu session.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The device given with `-o` could not be opened or is not a terminal.
    #[error("output {0} not found")]
    OutputNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
