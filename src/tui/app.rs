//! The session loop: glue between the event pump and the state machine.

use std::io::{self, Write};

use color_eyre::eyre::Result;

use super::backend::{Clipboard, Tui};
use super::event::Event;
use super::repeat::RepeatTimer;
use super::widget::{MenuWidget, cursor_position};
use crate::menu::{Feedback, Menu, SessionState};
use crate::options::Options;
use crate::theme::Theme;
use crate::item::ItemStore;

/// Runs the menu session to completion.
///
/// Returns true when the session was cancelled (the caller exits non-zero),
/// false on a confirm. Confirmed and multi-select lines are written to
/// stdout and flushed immediately, inside the loop.
pub fn run(options: &Options, store: ItemStore) -> Result<bool> {
    let theme = Theme::from_options(options);
    let mut menu = Menu::with_options(options, store);
    let mut tui = Tui::new(options.output.as_deref())?;
    let mut repeat = RepeatTimer::new();
    let mut clipboard = Clipboard::new();

    tui.enter()?;
    let looped = event_loop(
        &mut menu,
        &mut tui,
        &mut repeat,
        &mut clipboard,
        &theme,
        options.bottom,
    );
    tui.exit()?;
    looped?;

    Ok(menu.state() == SessionState::Cancelled)
}

fn event_loop(
    menu: &mut Menu,
    tui: &mut Tui,
    repeat: &mut RepeatTimer,
    clipboard: &mut Clipboard,
    theme: &Theme,
    bottom: bool,
) -> Result<()> {
    let size = tui.size()?;
    let _ = menu.resize(size.width, size.height);
    draw(tui, menu, theme, bottom)?;

    loop {
        let event = tui.next(repeat)?;
        let feedback = match event {
            Event::Key { pressed, sym, mods } => {
                if tui.enhanced() {
                    if pressed {
                        repeat.arm(sym, mods);
                    } else {
                        repeat.disarm();
                    }
                }
                menu.keypress(pressed, sym, mods)
            }
            Event::Repeat => match repeat.fire() {
                Some((sym, mods)) => menu.keypress(true, sym, mods),
                None => Feedback::None,
            },
            Event::Paste(text) => menu.paste(&text),
            Event::Resize(width, height) => menu.resize(width, height),
        };

        match feedback {
            Feedback::None => {}
            Feedback::Render => draw(tui, menu, theme, bottom)?,
            Feedback::Emit(text) => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{text}")?;
                stdout.flush()?;
            }
            Feedback::PasteRequest => {
                // No clipboard, or nothing on it: silent no-op.
                if let Some(text) = clipboard.get()
                    && menu.paste(&text) == Feedback::Render
                {
                    draw(tui, menu, theme, bottom)?;
                }
            }
        }

        if menu.state() != SessionState::Editing {
            return Ok(());
        }
    }
}

fn draw(tui: &mut Tui, menu: &Menu, theme: &Theme, bottom: bool) -> Result<()> {
    tui.terminal.draw(|frame| {
        let area = frame.area();
        frame.render_widget(MenuWidget { menu, theme, bottom }, area);
        if let Some(position) = cursor_position(menu, area, bottom) {
            frame.set_cursor_position(position);
        }
    })?;
    Ok(())
}
