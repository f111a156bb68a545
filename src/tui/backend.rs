//! Terminal lifecycle and the blocking event pump.
//!
//! One thread, one wait point: the pump blocks on the terminal event stream
//! and uses the repeat timer's deadline as its only timeout. Everything
//! handled between two waits runs to completion, so no event ever observes
//! the menu mid-rebuild.

use std::fs::OpenOptions;
use std::io::{self, IsTerminal, Write};
use std::sync::Once;

use crossterm::event::{
    self as cevent, DisableBracketedPaste, EnableBracketedPaste, Event as CEvent,
    KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::event::{Event, translate_key};
use super::repeat::RepeatTimer;
use crate::MenuError;

static PANIC_HOOK_SET: Once = Once::new();

/// The terminal session: render target plus event source.
///
/// Renders to stderr by default so stdout stays reserved for the selected
/// line; `-o` substitutes another terminal device.
pub struct Tui {
    pub terminal: Terminal<CrosstermBackend<Box<dyn Write>>>,
    enhanced: bool,
}

impl Tui {
    pub fn new(output: Option<&str>) -> Result<Self, MenuError> {
        let writer: Box<dyn Write> = match output {
            Some(path) => {
                let file = OpenOptions::new()
                    .write(true)
                    .open(path)
                    .map_err(|_| MenuError::OutputNotFound(path.to_string()))?;
                if !file.is_terminal() {
                    return Err(MenuError::OutputNotFound(path.to_string()));
                }
                Box::new(file)
            }
            None => Box::new(io::stderr()),
        };
        Ok(Self {
            terminal: Terminal::new(CrosstermBackend::new(writer))?,
            enhanced: false,
        })
    }

    /// Raw mode, alternate screen, bracketed paste, and key release
    /// reporting where the terminal supports it.
    pub fn enter(&mut self) -> Result<(), MenuError> {
        terminal::enable_raw_mode()?;
        set_panic_hook();
        let supports = terminal::supports_keyboard_enhancement().unwrap_or(false);
        let writer = self.terminal.backend_mut().writer_mut();
        crossterm::execute!(writer, EnterAlternateScreen, EnableBracketedPaste)?;
        if supports {
            crossterm::execute!(
                writer,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            self.enhanced = true;
        }
        debug!("terminal entered, key release reporting: {}", self.enhanced);
        Ok(())
    }

    pub fn exit(&mut self) -> Result<(), MenuError> {
        let enhanced = self.enhanced;
        let writer = self.terminal.backend_mut().writer_mut();
        if enhanced {
            crossterm::execute!(writer, PopKeyboardEnhancementFlags)?;
        }
        if terminal::is_raw_mode_enabled()? {
            crossterm::execute!(writer, DisableBracketedPaste, LeaveAlternateScreen)?;
            terminal::disable_raw_mode()?;
        }
        Ok(())
    }

    /// Whether the crate's own repeat timer drives held keys. When false
    /// the terminal synthesizes repeats itself and those are forwarded.
    pub fn enhanced(&self) -> bool {
        self.enhanced
    }

    pub fn size(&self) -> Result<ratatui::layout::Size, MenuError> {
        Ok(self.terminal.size()?)
    }

    /// Blocks until the next relevant event.
    ///
    /// With a repeat armed, the wait is bounded by the repeat deadline and
    /// expiry is reported as [`Event::Repeat`]; otherwise the read blocks
    /// indefinitely. Terminal-synthesized repeat events are swallowed when
    /// the crate's own timer is responsible for held keys.
    pub fn next(&mut self, repeat: &RepeatTimer) -> Result<Event, MenuError> {
        loop {
            if let Some(timeout) = repeat.timeout()
                && !cevent::poll(timeout)?
            {
                return Ok(Event::Repeat);
            }
            match cevent::read()? {
                CEvent::Key(key) => {
                    let Some((kind, sym, mods)) = translate_key(&key) else {
                        continue;
                    };
                    if kind == KeyEventKind::Repeat && self.enhanced {
                        continue;
                    }
                    return Ok(Event::Key {
                        pressed: kind != KeyEventKind::Release,
                        sym,
                        mods,
                    });
                }
                CEvent::Paste(text) => return Ok(Event::Paste(text)),
                CEvent::Resize(width, height) => return Ok(Event::Resize(width, height)),
                _ => continue,
            }
        }
    }
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = terminal::disable_raw_mode();
            let _ = ratatui::restore();
            hook(panic_info);
        }));
    });
}

/// System clipboard with lazy initialization.
///
/// A menu session is fully usable without a clipboard; every failure here
/// degrades to "no offer available" and the paste chord becomes a no-op.
#[derive(Default)]
pub struct Clipboard {
    inner: Option<arboard::Clipboard>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self) -> Option<String> {
        if self.inner.is_none() {
            self.inner = arboard::Clipboard::new()
                .map_err(|err| debug!("no clipboard: {err}"))
                .ok();
        }
        self.inner.as_mut()?.get_text().ok()
    }
}
