//! Terminal lifecycle
//!
//! Raw mode, alternate screen and optional mouse capture, plus event
//! polling. The terminal is restored on exit, on drop and on panic.

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    ops::{Deref, DerefMut},
    panic,
    sync::Once,
    time::Duration,
};

static PANIC_HOOK: Once = Once::new();

/// Put the terminal back into cooked mode on the main screen
fn restore(mouse: bool) -> io::Result<()> {
    terminal::disable_raw_mode()?;
    if mouse {
        crossterm::execute!(io::stdout(), DisableMouseCapture)?;
    }
    crossterm::execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
}

/// Terminal wrapper for managing the TUI lifecycle
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Polling timeout for events
    pub tick_rate: Duration,
    /// Capture mouse events (hover, clicks, wheel)
    pub mouse: bool,
    entered: bool,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self {
            terminal,
            tick_rate: Duration::from_millis(250),
            mouse: true,
            entered: false,
        })
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    /// Enter the alternate screen and enable raw mode
    pub fn enter(&mut self) -> Result<()> {
        let mouse = self.mouse;
        PANIC_HOOK.call_once(|| {
            let previous = panic::take_hook();
            panic::set_hook(Box::new(move |info| {
                let _ = restore(mouse);
                previous(info);
            }));
        });

        terminal::enable_raw_mode()?;
        crossterm::execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        if self.mouse {
            crossterm::execute!(io::stdout(), EnableMouseCapture)?;
        }
        self.entered = true;
        self.terminal.clear()?;
        Ok(())
    }

    /// Leave the alternate screen; a no-op when not entered
    pub fn exit(&mut self) -> Result<()> {
        if self.entered {
            self.entered = false;
            restore(self.mouse)?;
        }
        Ok(())
    }

    /// Wait up to one tick for the next event
    ///
    /// `None` means the tick elapsed. Key releases and repeats are dropped
    /// so each press is seen once on every platform.
    pub fn next_event(&self) -> Result<Option<Event>> {
        if !event::poll(self.tick_rate)? {
            return Ok(None);
        }

        let event = match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Press => None,
            other => Some(other),
        };
        Ok(event)
    }

    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Deref for Tui {
    type Target = Terminal<CrosstermBackend<Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for Tui {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
