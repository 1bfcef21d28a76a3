//! # Actions
//!
//! Everything that can happen in sprint becomes an `Action`.
//! User presses Tab? That's `Action::FocusNext`.
//! A second passes? That's `Action::Tick { elapsed: 1 }`.
//!
//! `update()` applies an action to the state and returns an `Effect`
//! describing the I/O the event loop must perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::countdown::Countdown;
use crate::core::form::EditOp;
use crate::core::state::{App, Phase};

pub const INVALID_MINUTES_MESSAGE: &str = "Enter a whole number of minutes";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,
    /// Enter. Submits when the submit control has focus.
    Submit,
    Edit(EditOp),
    /// Whole seconds elapsed since the previous tick.
    Tick { elapsed: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Countdown began: persist the initial value and arm the ticker.
    StartCountdown(String),
    /// Persist the current value; `finished` stops the ticker.
    Persist { display: String, finished: bool },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    if app.quitting {
        return Effect::Quit;
    }

    if action == Action::Quit {
        info!("Quit requested");
        app.quitting = true;
        return Effect::Quit;
    }

    match &mut app.phase {
        Phase::Form(form) => match action {
            Action::FocusNext => {
                form.focus_next();
                Effect::None
            }
            Action::FocusPrev => {
                form.focus_prev();
                Effect::None
            }
            Action::Edit(op) => {
                form.edit(op);
                Effect::None
            }
            Action::Submit if form.submit_focused() => match form.parse_minutes() {
                Ok(minutes) => {
                    info!("Starting countdown: {} minutes", minutes);
                    let countdown = Countdown::from_minutes(minutes);
                    app.phase = Phase::Countdown(countdown);
                    Effect::StartCountdown(countdown.display())
                }
                Err(e) => {
                    debug!("Rejected duration: {}", e);
                    form.error = Some(INVALID_MINUTES_MESSAGE.to_string());
                    Effect::None
                }
            },
            // Enter on a text field, or a stray tick before the countdown exists
            Action::Submit | Action::Tick { .. } | Action::Quit => Effect::None,
        },
        Phase::Countdown(countdown) => match action {
            Action::Tick { elapsed } => {
                if countdown.is_finished() {
                    return Effect::None;
                }
                *countdown = countdown.tick(elapsed);
                debug!("Tick (+{}s): {}", elapsed, countdown);
                if countdown.is_finished() {
                    info!("Countdown finished");
                }
                Effect::Persist {
                    display: countdown.display(),
                    finished: countdown.is_finished(),
                }
            }
            _ => Effect::None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            update(app, Action::Edit(EditOp::Insert(c)));
        }
    }

    fn submit(app: &mut App) -> Effect {
        update(app, Action::FocusNext);
        update(app, Action::Submit)
    }

    #[test]
    fn test_valid_submit_starts_countdown() {
        let mut app = test_app();
        type_text(&mut app, "25");
        let effect = submit(&mut app);
        assert_eq!(effect, Effect::StartCountdown("25:00".to_string()));
        assert_eq!(app.countdown(), Some(&Countdown::from_minutes(25)));
    }

    #[test]
    fn test_zero_minutes_is_valid() {
        let mut app = test_app();
        type_text(&mut app, "0");
        assert_eq!(submit(&mut app), Effect::StartCountdown("00:00".to_string()));
    }

    #[test]
    fn test_invalid_submit_stays_in_form_with_error() {
        for input in ["", "x", "1a"] {
            let mut app = test_app();
            type_text(&mut app, input);
            assert_eq!(submit(&mut app), Effect::None);
            let form = app.form().expect("still in form entry");
            assert_eq!(form.error.as_deref(), Some(INVALID_MINUTES_MESSAGE));
        }
    }

    #[test]
    fn test_enter_on_field_does_not_submit() {
        let mut app = test_app();
        type_text(&mut app, "5");
        assert_eq!(update(&mut app, Action::Submit), Effect::None);
        assert!(app.form().is_some_and(|f| f.error.is_none()));
    }

    #[test]
    fn test_quit_from_either_phase() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
        assert!(app.quitting);
        // Further input is not processed
        assert_eq!(update(&mut app, Action::FocusNext), Effect::Quit);
        assert_eq!(app.form().map(|f| f.focus_index()), Some(0));

        let mut app = test_app();
        type_text(&mut app, "1");
        submit(&mut app);
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_tick_persists_each_second() {
        let mut app = test_app();
        type_text(&mut app, "2");
        submit(&mut app);

        let mut last = Effect::None;
        for _ in 0..61 {
            last = update(&mut app, Action::Tick { elapsed: 1 });
        }
        assert_eq!(
            last,
            Effect::Persist {
                display: "00:59".to_string(),
                finished: false,
            }
        );
    }

    #[test]
    fn test_tick_at_zero_finishes_then_noops() {
        let mut app = test_app();
        app.phase = Phase::Countdown(Countdown::new(0, 1));

        assert_eq!(
            update(&mut app, Action::Tick { elapsed: 1 }),
            Effect::Persist {
                display: "00:00".to_string(),
                finished: true,
            }
        );
        assert_eq!(update(&mut app, Action::Tick { elapsed: 1 }), Effect::None);
        assert_eq!(app.countdown(), Some(&Countdown::new(0, 0)));
    }

    #[test]
    fn test_keys_ignored_during_countdown() {
        let mut app = test_app();
        app.phase = Phase::Countdown(Countdown::from_minutes(3));
        assert_eq!(update(&mut app, Action::FocusNext), Effect::None);
        assert_eq!(update(&mut app, Action::Edit(EditOp::Insert('1'))), Effect::None);
        assert_eq!(update(&mut app, Action::Submit), Effect::None);
        assert_eq!(app.countdown(), Some(&Countdown::from_minutes(3)));
    }

    #[test]
    fn test_tick_in_form_is_ignored() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Tick { elapsed: 1 }), Effect::None);
        assert!(app.form().is_some());
    }
}
