//! Terminal event source for the run loop

use anyhow::{Context, Result};
use ratatui::crossterm::event::{
    self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind,
};
use std::time::{Duration, Instant};

/// Something the run loop reacts to
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// Animation frame is due
    Tick,
    /// Key press or auto-repeat
    Key(KeyEvent),
    /// Wheel or button input
    Mouse(MouseEvent),
    /// New terminal size in columns and rows
    Resize(u16, u16),
}

impl Event {
    /// Translate a crossterm event, dropping the ones the page ignores
    /// (key releases, pointer motion, focus and paste)
    #[must_use]
    pub fn from_terminal(event: CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Self::Key(key)),
            CrosstermEvent::Mouse(mouse) if !matches!(mouse.kind, MouseEventKind::Moved) => {
                Some(Self::Mouse(mouse))
            }
            CrosstermEvent::Resize(width, height) => Some(Self::Resize(width, height)),
            _ => None,
        }
    }
}

/// Polls the terminal and emits a tick every `tick_rate`, even while input
/// keeps arriving
#[derive(Debug, Clone, Copy)]
pub struct Handler {
    tick_rate: Duration,
    next_tick: Instant,
}

impl Handler {
    /// Create a handler whose first tick is one `tick_rate` from now
    #[must_use]
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            next_tick: Instant::now() + tick_rate,
        }
    }

    /// Block until the next event or tick
    ///
    /// # Errors
    ///
    /// Returns an error if polling or reading the terminal fails
    pub fn next(&mut self) -> Result<Event> {
        loop {
            let now = Instant::now();
            let timeout = self.next_tick.saturating_duration_since(now);
            if timeout.is_zero() {
                self.next_tick = now + self.tick_rate;
                return Ok(Event::Tick);
            }
            if event::poll(timeout).context("Failed to poll terminal events")? {
                let raw = event::read().context("Failed to read terminal event")?;
                if let Some(event) = Event::from_terminal(raw) {
                    return Ok(event);
                }
            }
        }
    }

    /// Interval between ticks
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        self.tick_rate
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new(Duration::from_millis(33))
    }
}
