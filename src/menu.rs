//! The input/selection state machine.
//!
//! [`Menu`] owns every piece of session state: the item store, the filter
//! buffer, the current match list, its pages and the selection. Key events
//! come in as logical symbols; the outcome of handling one is reported as a
//! [`Feedback`] value so the core stays free of any terminal I/O.

use crate::binds::{Chord, EditOp, Keysym, Mods, remap_ctrl, remap_meta};
use crate::input::InputBuffer;
use crate::item::{CellMeasure, Item, ItemStore, Measure};
use crate::matcher::{Comparator, MatchList};
use crate::options::Options;
use crate::pager::{Geometry, Page, PageList};

/// Session lifecycle. `Editing` is the only state that handles keys;
/// `Confirmed` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Editing,
    Confirmed,
    Cancelled,
}

/// What the caller must do after an event was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Feedback {
    /// Nothing changed.
    None,
    /// State changed, redraw the menu.
    Render,
    /// Write this line to standard output. The session state tells whether
    /// it was a closing confirm or a ctrl+Return multi-select emit.
    Emit(String),
    /// Ask the clipboard for its contents and feed them to [`Menu::paste`].
    /// No clipboard available means no-op.
    PasteRequest,
}

pub struct Menu {
    store: ItemStore,
    comparator: Comparator,
    input: InputBuffer,
    matches: MatchList,
    pages: PageList,
    sel: Option<usize>,
    geom: Geometry,
    lines: u16,
    prompt: String,
    prompt_width: u16,
    state: SessionState,
}

impl Menu {
    /// Builds the menu, measures the store and runs the initial match.
    ///
    /// The result has an empty geometry; call [`Menu::resize`] with the
    /// terminal size before the first render.
    pub fn with_options(options: &Options, mut store: ItemStore) -> Self {
        let measure = CellMeasure;
        store.measure(&measure);
        let prompt = options.prompt.clone().unwrap_or_default();
        let prompt_width = measure.width(&prompt);
        let mut menu = Self {
            store,
            comparator: if options.insensitive {
                Comparator::Ignore
            } else {
                Comparator::Respect
            },
            input: InputBuffer::new(),
            matches: MatchList::new(),
            pages: PageList::new(),
            sel: None,
            geom: Geometry::default(),
            lines: options.lines.clamp(0, i32::from(u16::MAX)) as u16,
            prompt,
            prompt_width,
            state: SessionState::Editing,
        };
        menu.rematch();
        menu
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn matches(&self) -> &MatchList {
        &self.matches
    }

    pub fn pages(&self) -> &PageList {
        &self.pages
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geom
    }

    /// Match position of the current selection.
    pub fn selection(&self) -> Option<usize> {
        self.sel
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.sel.map(|pos| self.store.get(self.matches.get(pos)))
    }

    /// Page holding the current selection.
    pub fn current_page(&self) -> Option<(usize, &Page)> {
        let index = self.pages.page_of(self.sel?)?;
        Some((index, self.pages.get(index)?))
    }

    /// Rows the menu strip occupies.
    pub fn strip_height(&self) -> u16 {
        1 + self.geom.lines
    }

    /// Recomputes the layout budget for a new terminal size.
    ///
    /// The match list survives a resize untouched; only the page partition
    /// is rebuilt, so the selection stays on the same item.
    pub fn resize(&mut self, width: u16, height: u16) -> Feedback {
        let padding = 1;
        self.geom = Geometry {
            width,
            lines: if self.lines > 0 {
                self.lines.min(height.saturating_sub(1))
            } else {
                0
            },
            padding,
            promptw: if self.prompt.is_empty() {
                0
            } else {
                self.prompt_width + 2 * padding
            },
            inputw: self.store.max_width() + 2 * padding,
            left_arrow: 1 + 2 * padding,
            right_arrow: 1 + 2 * padding,
        };
        self.repage();
        Feedback::Render
    }

    /// Handles one key transition.
    ///
    /// Release transitions are ignored; held keys are re-fed by the repeat
    /// timer as fresh presses. Modifier chords are remapped first, then the
    /// symbol is dispatched.
    pub fn keypress(&mut self, pressed: bool, sym: Keysym, mods: Mods) -> Feedback {
        if !pressed || self.state != SessionState::Editing {
            return Feedback::None;
        }

        let mut sym = sym;
        let mut mods = mods;
        if mods.contains(Mods::CTRL) {
            match remap_ctrl(sym, mods.contains(Mods::SHIFT)) {
                Chord::Sym(s) => sym = s,
                Chord::Bare(s) => {
                    sym = s;
                    mods.remove(Mods::CTRL);
                }
                Chord::Edit(op) => return self.edit(op),
                Chord::Swallow => return Feedback::None,
            }
        } else if mods.contains(Mods::META) {
            match remap_meta(sym, mods.contains(Mods::SHIFT)) {
                Chord::Sym(s) | Chord::Bare(s) => sym = s,
                Chord::Edit(op) => return self.edit(op),
                Chord::Swallow => return Feedback::None,
            }
        }

        self.dispatch(sym, mods)
    }

    /// Splices clipboard or bracketed-paste content in at the cursor.
    pub fn paste(&mut self, text: &str) -> Feedback {
        if text.is_empty() || !self.input.insert(text) {
            return Feedback::None;
        }
        self.rematch();
        Feedback::Render
    }

    fn dispatch(&mut self, sym: Keysym, mods: Mods) -> Feedback {
        use Keysym::*;
        match sym {
            Return => self.confirm(mods),
            Escape => {
                self.state = SessionState::Cancelled;
                Feedback::None
            }
            // Left and up prefer moving the selection; the text cursor only
            // moves once the selection hit the head of the matches.
            Left | Up => {
                if let Some(prev) = self.sel.and_then(|pos| self.matches.prev(pos)) {
                    self.sel = Some(prev);
                    Feedback::Render
                } else if self.input.move_left() {
                    Feedback::Render
                } else {
                    Feedback::None
                }
            }
            // Right and down prefer the text cursor; the selection moves
            // once the cursor sits at the end of the buffer.
            Right | Down => {
                if self.input.move_right() {
                    Feedback::Render
                } else if let Some(next) = self.sel.and_then(|pos| self.matches.next(pos)) {
                    self.sel = Some(next);
                    Feedback::Render
                } else {
                    Feedback::None
                }
            }
            PageUp => {
                let target = self
                    .current_page()
                    .and_then(|(index, _)| index.checked_sub(1))
                    .and_then(|index| self.pages.get(index))
                    .map(|page| page.first);
                match target {
                    Some(first) => {
                        self.sel = Some(first);
                        Feedback::Render
                    }
                    None => Feedback::None,
                }
            }
            PageDown => {
                let target = self
                    .current_page()
                    .and_then(|(index, _)| self.pages.get(index + 1))
                    .map(|page| page.first);
                match target {
                    Some(first) => {
                        self.sel = Some(first);
                        Feedback::Render
                    }
                    None => Feedback::None,
                }
            }
            Home => {
                if self.sel == self.matches.first() {
                    self.input.move_to_start();
                } else {
                    self.sel = self.matches.first();
                }
                Feedback::Render
            }
            End => {
                if !self.input.at_end() {
                    self.input.move_to_end();
                } else {
                    self.sel = self.matches.last();
                }
                Feedback::Render
            }
            Backspace => {
                if self.input.delete_prev() {
                    self.rematch();
                    Feedback::Render
                } else {
                    Feedback::None
                }
            }
            Delete => {
                if self.input.delete_at() {
                    self.rematch();
                    Feedback::Render
                } else {
                    Feedback::None
                }
            }
            Tab => match self.selected_item().map(|item| item.text().to_string()) {
                Some(text) => {
                    self.input.set(&text);
                    self.rematch();
                    Feedback::Render
                }
                None => Feedback::None,
            },
            Char(c) if !c.is_control() => {
                let mut utf8 = [0u8; 4];
                if self.input.insert(c.encode_utf8(&mut utf8)) {
                    self.rematch();
                    Feedback::Render
                } else {
                    Feedback::None
                }
            }
            Char(_) => Feedback::None,
        }
    }

    fn confirm(&mut self, mods: Mods) -> Feedback {
        // Shift confirms the raw typed text even when it matches nothing;
        // otherwise the selection wins over the buffer.
        let text = if mods.contains(Mods::SHIFT) {
            self.input.text().to_string()
        } else {
            self.selected_item()
                .map(|item| item.text().to_string())
                .unwrap_or_else(|| self.input.text().to_string())
        };
        if !mods.contains(Mods::CTRL) {
            self.state = SessionState::Confirmed;
        }
        Feedback::Emit(text)
    }

    fn edit(&mut self, op: EditOp) -> Feedback {
        match op {
            EditOp::DeleteToEnd => {
                self.input.delete_to_end();
                self.rematch();
            }
            EditOp::DeleteToStart => {
                self.input.delete_to_start();
                self.rematch();
            }
            EditOp::DeleteWord => {
                self.input.delete_word();
                self.rematch();
            }
            EditOp::WordLeft => self.input.move_word_left(),
            EditOp::WordRight => self.input.move_word_right(),
            EditOp::Paste => return Feedback::PasteRequest,
        }
        Feedback::Render
    }

    /// Rebuilds matches and pages for the current filter text.
    ///
    /// The old match positions are gone after this; the selection restarts
    /// at the head of the new list, or clears when nothing matches.
    fn rematch(&mut self) {
        self.matches = MatchList::rematch(&self.store, self.input.text(), self.comparator);
        self.repage();
        self.sel = self.matches.first();
    }

    fn repage(&mut self) {
        self.pages = PageList::paginate(&self.matches, &self.store, &self.geom);
    }
}
