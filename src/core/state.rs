//! # Application State
//!
//! Core business state for sprint. No terminal types live here; presentation
//! is the `tui` module's job.
//!
//! ```text
//! App
//! ├── phase: Phase
//! │   ├── Form(FormState)          // duration entry (initial)
//! │   └── Countdown(Countdown)     // running sprint
//! └── quitting: bool               // set by esc/q, ends the event loop
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::countdown::Countdown;
use crate::core::form::FormState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Form(FormState),
    Countdown(Countdown),
}

#[derive(Debug, Clone)]
pub struct App {
    pub phase: Phase,
    pub quitting: bool,
}

impl App {
    pub fn new(form: FormState) -> Self {
        Self {
            phase: Phase::Form(form),
            quitting: false,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(FormState::duration(
            &config.label,
            &config.placeholder,
            config.char_limit,
        ))
    }

    pub fn form(&self) -> Option<&FormState> {
        match &self.phase {
            Phase::Form(form) => Some(form),
            Phase::Countdown(_) => None,
        }
    }

    pub fn countdown(&self) -> Option<&Countdown> {
        match &self.phase {
            Phase::Countdown(countdown) => Some(countdown),
            Phase::Form(_) => None,
        }
    }
}
