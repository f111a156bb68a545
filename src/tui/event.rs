//! Events delivered to the menu loop, and the translation from crossterm
//! key events into logical symbols.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::binds::{Keysym, Mods};

/// One occurrence the event pump hands to the session loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key transition. `pressed` is false only for release events, which
    /// only terminals with the keyboard enhancement protocol report.
    Key { pressed: bool, sym: Keysym, mods: Mods },
    /// Bracketed paste content, delivered unprompted by the terminal.
    Paste(String),
    /// New terminal dimensions.
    Resize(u16, u16),
    /// The key-repeat timer became due.
    Repeat,
}

/// Maps a crossterm key event onto a logical symbol and modifier set.
///
/// Keys the menu has no use for (function keys, media keys, ...) map to
/// `None` and are dropped by the pump.
pub fn translate_key(key: &KeyEvent) -> Option<(KeyEventKind, Keysym, Mods)> {
    let sym = match key.code {
        KeyCode::Char(c) => Keysym::Char(c),
        KeyCode::Enter => Keysym::Return,
        KeyCode::Esc => Keysym::Escape,
        KeyCode::Backspace => Keysym::Backspace,
        KeyCode::Delete => Keysym::Delete,
        KeyCode::Tab | KeyCode::BackTab => Keysym::Tab,
        KeyCode::Left => Keysym::Left,
        KeyCode::Right => Keysym::Right,
        KeyCode::Up => Keysym::Up,
        KeyCode::Down => Keysym::Down,
        KeyCode::Home => Keysym::Home,
        KeyCode::End => Keysym::End,
        KeyCode::PageUp => Keysym::PageUp,
        KeyCode::PageDown => Keysym::PageDown,
        _ => return None,
    };

    let mut mods = Mods::empty();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        mods |= Mods::CTRL;
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        mods |= Mods::META;
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        mods |= Mods::SHIFT;
    }

    Some((key.kind, sym, mods))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chars_carry_their_modifiers() {
        let key = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL);
        let (kind, sym, mods) = translate_key(&key).unwrap();
        assert_eq!(kind, KeyEventKind::Press);
        assert_eq!(sym, Keysym::Char('w'));
        assert_eq!(mods, Mods::CTRL);
    }

    #[test]
    fn navigation_keys_map_to_symbols() {
        for (code, sym) in [
            (KeyCode::Enter, Keysym::Return),
            (KeyCode::Esc, Keysym::Escape),
            (KeyCode::Home, Keysym::Home),
            (KeyCode::PageDown, Keysym::PageDown),
            (KeyCode::BackTab, Keysym::Tab),
        ] {
            let (_, got, _) = translate_key(&KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
            assert_eq!(got, sym);
        }
    }

    #[test]
    fn unused_keys_are_dropped() {
        assert!(translate_key(&KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE)).is_none());
        assert!(translate_key(&KeyEvent::new(KeyCode::Insert, KeyModifiers::NONE)).is_none());
    }
}
