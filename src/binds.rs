//! Logical key symbols and the chord remap tables.
//!
//! The presentation adapter translates terminal key events into a
//! [`Keysym`] plus [`Mods`]; the state machine first runs control and meta
//! chords through the tables below and only then dispatches on the symbol.
//! Both tables are fixed: ctrl carries the Emacs line-editing set, meta the
//! word-motion and vi directional set.

use bitflags::bitflags;

/// A logical key, decoupled from any terminal event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keysym {
    Char(char),
    Return,
    Escape,
    Backspace,
    Delete,
    Tab,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
}

bitflags! {
    /// Modifier state read fresh on every key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Mods: u8 {
        const CTRL = 1;
        const META = 1 << 1;
        const SHIFT = 1 << 2;
    }
}

/// Buffer edits reachable only through a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// ctrl+k
    DeleteToEnd,
    /// ctrl+u
    DeleteToStart,
    /// ctrl+w
    DeleteWord,
    /// ctrl+shift+y
    Paste,
    /// ctrl+Left, meta+b
    WordLeft,
    /// ctrl+Right, meta+f
    WordRight,
}

/// Result of running a key through a chord table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chord {
    /// Dispatch as this symbol, modifiers unchanged.
    Sym(Keysym),
    /// Dispatch as this symbol with ctrl cleared (ctrl+j and friends are a
    /// plain Return, not the multi-select one).
    Bare(Keysym),
    /// Perform a buffer edit directly.
    Edit(EditOp),
    /// Recognized chord prefix, unrecognized chord: drop the event.
    Swallow,
}

/// Emacs-style control chords.
///
/// ctrl+Return falls through unchanged so the dispatcher can keep the
/// session open on a multi-select confirm.
pub fn remap_ctrl(sym: Keysym, shift: bool) -> Chord {
    use Keysym::*;
    match sym {
        Char('a') => Chord::Sym(Home),
        Char('b') => Chord::Sym(Left),
        Char('c') | Char('g') | Char('[') => Chord::Sym(Escape),
        Char('d') => Chord::Sym(Delete),
        Char('e') => Chord::Sym(End),
        Char('f') => Chord::Sym(Right),
        Char('h') => Chord::Sym(Backspace),
        Char('i') => Chord::Sym(Tab),
        Char('j') | Char('J') | Char('m') | Char('M') => Chord::Bare(Return),
        Char('n') => Chord::Sym(Down),
        Char('p') => Chord::Sym(Up),
        Char('k') => Chord::Edit(EditOp::DeleteToEnd),
        Char('u') => Chord::Edit(EditOp::DeleteToStart),
        Char('w') => Chord::Edit(EditOp::DeleteWord),
        Char('Y') => Chord::Edit(EditOp::Paste),
        Char('y') if shift => Chord::Edit(EditOp::Paste),
        Left => Chord::Edit(EditOp::WordLeft),
        Right => Chord::Edit(EditOp::WordRight),
        Return => Chord::Sym(Return),
        _ => Chord::Swallow,
    }
}

/// Meta chords: Emacs word motion plus vi-style directions.
pub fn remap_meta(sym: Keysym, shift: bool) -> Chord {
    use Keysym::*;
    match sym {
        Char('b') => Chord::Edit(EditOp::WordLeft),
        Char('f') => Chord::Edit(EditOp::WordRight),
        Char('G') => Chord::Sym(End),
        Char('g') if shift => Chord::Sym(End),
        Char('g') => Chord::Sym(Home),
        Char('h') => Chord::Sym(Up),
        Char('j') => Chord::Sym(PageDown),
        Char('k') => Chord::Sym(PageUp),
        Char('l') => Chord::Sym(Down),
        _ => Chord::Swallow,
    }
}
