//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates keyboard events into `core::Action` values and carries out
//! the `Effect`s the reducer returns (status file writes, ticker control).
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loop
//!
//! Single-threaded. Each iteration:
//!
//! 1. Draw if anything changed.
//! 2. Block on input for at most the ticker's time-until-due (or 500ms idle).
//! 3. Drain every pending input event through `update()`.
//! 4. Poll the ticker; a due tick goes through `update()` as
//!    `Action::Tick`, and only then is the ticker re-armed.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::status_file::StatusFile;
use crate::core::ticker::Ticker;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Longest the loop blocks on input when no tick is pending.
const IDLE_POLL_TIMEOUT: Duration = Duration::from_millis(500);

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Disambiguated escape codes make a bare Esc arrive without delay.
        // Terminals that don't support the protocol ignore it.
        execute!(
            stdout(),
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, Hide);
    }
}

/// Everything the loop owns besides the core `App`.
pub struct Runtime {
    pub status_file: StatusFile,
    pub ticker: Option<Ticker>,
}

impl Runtime {
    pub fn new(status_file: StatusFile) -> Self {
        Self {
            status_file,
            ticker: None,
        }
    }

    /// How long the loop may block waiting for input.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.ticker
            .and_then(|t| t.time_until_due(now))
            .map_or(IDLE_POLL_TIMEOUT, |d| d.min(IDLE_POLL_TIMEOUT))
    }

    /// Carry out an effect. Returns `true` when the loop should stop.
    pub fn apply(&mut self, effect: Effect, now: Instant) -> bool {
        match effect {
            Effect::None => false,
            Effect::Quit => true,
            Effect::StartCountdown(display) => {
                self.persist(&display);
                self.ticker = Some(Ticker::start(now));
                false
            }
            Effect::Persist { display, finished } => {
                self.persist(&display);
                if let Some(ticker) = self.ticker.as_mut() {
                    if finished {
                        info!("Countdown reached zero, stopping ticker");
                        ticker.stop();
                    } else {
                        ticker.rearm(now);
                    }
                }
                false
            }
        }
    }

    /// Poll the ticker; a due tick is run through the reducer and the ticker
    /// is re-armed afterwards. Returns `(redraw, quit)`.
    pub fn tick(&mut self, app: &mut App, now: Instant) -> (bool, bool) {
        let Some(elapsed) = self.ticker.as_mut().and_then(|t| t.poll(now)) else {
            return (false, false);
        };
        let effect = update(app, Action::Tick { elapsed });
        let redraw = effect != Effect::None;
        // Re-armed relative to when the handler finished, not when it was due
        let quit = self.apply(effect, Instant::now());
        (redraw, quit)
    }

    fn persist(&self, display: &str) {
        match self.status_file.write(display) {
            Ok(()) => debug!("Wrote {} to {}", display, self.status_file.path().display()),
            Err(e) => warn!("{}", e),
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut runtime = Runtime::new(StatusFile::new(&config.status_file));
    info!("Status file: {}", config.status_file.display());

    let mut terminal = ratatui::try_init()?;
    let terminal_mode_guard = TerminalModeGuard::new();
    if let Err(e) = &terminal_mode_guard {
        warn!("Could not enable terminal modes: {}", e);
    }

    let result = event_loop(&mut terminal, &mut app, &mut runtime);

    drop(terminal_mode_guard);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    runtime: &mut Runtime,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(runtime.poll_timeout(Instant::now()))?;

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        let mut pending = first_event;
        while let Some(event) = pending {
            needs_redraw = true;
            if let Some(action) = event.action() {
                debug!("Dispatching {:?}", action);
                let effect = update(app, action);
                if runtime.apply(effect, Instant::now()) {
                    should_quit = true;
                    break;
                }
            } else if event == TuiEvent::Resize {
                debug!("Terminal resized");
            }
            pending = poll_event_immediate()?;
        }

        if should_quit {
            break;
        }

        let (redraw, quit) = runtime.tick(app, Instant::now());
        needs_redraw |= redraw;
        if quit {
            break;
        }
    }

    info!("Event loop finished");
    Ok(())
}
