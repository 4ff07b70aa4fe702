//! Terminal User Interface for folio

mod input;
pub mod render;

use crate::app::{App, Event, Handler};
use anyhow::{Context, Result};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend, TestBackend},
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use std::io;
use std::time::Instant;
use tracing::{debug, warn};

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to. The terminal
/// is restored before returning in either case.
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        restore_terminal();
        return Err(e).context("Failed to enter alternate screen");
    }

    let result = Terminal::new(CrosstermBackend::new(stdout))
        .context("Failed to create terminal")
        .and_then(|mut terminal| {
            let result = run_loop(&mut terminal, &mut app);
            if let Err(e) = terminal.show_cursor() {
                warn!("Failed to show cursor: {e}");
            }
            result
        });

    restore_terminal();
    result
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!("Failed to disable raw mode: {e}");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
        warn!("Failed to leave alternate screen: {e}");
    }
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let size = terminal.size().context("Failed to read terminal size")?;
    let now = Instant::now();
    app.resize(size.width, size.height, now);
    app.mount(now);

    let mut handler = Handler::new(app.config.tick_rate());
    let result = event_loop(terminal, app, &mut handler);
    app.unmount();
    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    handler: &mut Handler,
) -> Result<()> {
    loop {
        terminal
            .draw(|frame| render::render(frame, app, Instant::now()))
            .context("Failed to draw frame")?;

        let event = handler.next()?;
        let now = Instant::now();
        match event {
            Event::Tick => {
                app.tick(now);
            }
            Event::Key(key) => input::handle_key_event(app, key.code, key.modifiers, now),
            Event::Mouse(mouse) => input::handle_mouse_event(app, mouse, now),
            Event::Resize(width, height) => app.resize(width, height, now),
        }

        if app.should_quit {
            debug!("Leaving event loop");
            return Ok(());
        }
    }
}

/// Draw a single frame off-screen and return it as plain text, one line per row
/// with trailing spaces trimmed.
///
/// The app is resized to `width` x `height` and mounted if it is not already.
///
/// # Errors
///
/// Returns an error if the off-screen terminal cannot be drawn to
pub fn render_to_string(app: &mut App, width: u16, height: u16) -> Result<String> {
    let now = Instant::now();
    app.resize(width, height, now);
    app.mount(now);

    let mut terminal =
        Terminal::new(TestBackend::new(width, height)).context("Failed to create test terminal")?;
    terminal
        .draw(|frame| render::render(frame, app, now))
        .context("Failed to draw frame")?;

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        let line: String = (0..buffer.area.width)
            .filter_map(|x| buffer.cell((x, y)).map(ratatui::buffer::Cell::symbol))
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    Ok(out)
}
