//! Key-repeat timing.
//!
//! Terminals that report key release get the same repeat model the display
//! server would provide: key-down arms a one-shot delay, each firing re-arms
//! with the shorter period, key-up (or any new key-down) replaces the armed
//! state. The timer never runs threads; the event pump derives its poll
//! timeout from [`RepeatTimer::timeout`] and reports expiry as an event.

use std::time::{Duration, Instant};

use crate::binds::{Keysym, Mods};

/// Delay before the first synthetic repeat.
pub const REPEAT_DELAY: Duration = Duration::from_millis(660);
/// Period between subsequent repeats (25 Hz).
pub const REPEAT_PERIOD: Duration = Duration::from_millis(40);

#[derive(Debug)]
struct Held {
    sym: Keysym,
    mods: Mods,
    deadline: Instant,
}

/// At most one key repeats at a time.
#[derive(Debug, Default)]
pub struct RepeatTimer {
    held: Option<Held>,
}

impl RepeatTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the repeat cycle for a freshly pressed key, replacing any
    /// previously held one.
    pub fn arm(&mut self, sym: Keysym, mods: Mods) {
        self.held = Some(Held {
            sym,
            mods,
            deadline: Instant::now() + REPEAT_DELAY,
        });
    }

    /// Stops repeating. Called on any key release.
    pub fn disarm(&mut self) {
        self.held = None;
    }

    pub fn is_armed(&self) -> bool {
        self.held.is_some()
    }

    /// Time left until the next repeat, `None` when nothing is held.
    pub fn timeout(&self) -> Option<Duration> {
        self.held
            .as_ref()
            .map(|held| held.deadline.saturating_duration_since(Instant::now()))
    }

    /// Returns the held key when its deadline has passed and re-arms for
    /// the repeat period.
    pub fn fire(&mut self) -> Option<(Keysym, Mods)> {
        let held = self.held.as_mut()?;
        if Instant::now() < held.deadline {
            return None;
        }
        held.deadline = Instant::now() + REPEAT_PERIOD;
        Some((held.sym, held.mods))
    }
}
