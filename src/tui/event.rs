use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use crate::core::action::Action;
use crate::core::form::EditOp;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    FocusNext,
    FocusPrev,
    Submit,
    Edit(EditOp),

    // TUI-local events
    Resize,
}

impl TuiEvent {
    /// The core action this event maps to, if any.
    pub fn action(self) -> Option<Action> {
        match self {
            TuiEvent::Quit => Some(Action::Quit),
            TuiEvent::FocusNext => Some(Action::FocusNext),
            TuiEvent::FocusPrev => Some(Action::FocusPrev),
            TuiEvent::Submit => Some(Action::Submit),
            TuiEvent::Edit(op) => Some(Action::Edit(op)),
            TuiEvent::Resize => None,
        }
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(match event::read()? {
        Event::Key(key_event) => map_key(key_event),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    })
}

/// Translate a key press. Releases and repeats of non-editing keys are dropped.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Esc | KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::BackTab) => Some(TuiEvent::FocusPrev),
        (m, KeyCode::Tab) if m.contains(KeyModifiers::SHIFT) => Some(TuiEvent::FocusPrev),
        (_, KeyCode::Tab | KeyCode::Down) => Some(TuiEvent::FocusNext),
        (_, KeyCode::Up) => Some(TuiEvent::FocusPrev),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (m, KeyCode::Char(c)) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Some(TuiEvent::Edit(EditOp::Insert(c)))
        }
        (_, KeyCode::Backspace) => Some(TuiEvent::Edit(EditOp::Backspace)),
        (_, KeyCode::Delete) => Some(TuiEvent::Edit(EditOp::Delete)),
        (_, KeyCode::Left) => Some(TuiEvent::Edit(EditOp::Left)),
        (_, KeyCode::Right) => Some(TuiEvent::Edit(EditOp::Right)),
        (_, KeyCode::Home) => Some(TuiEvent::Edit(EditOp::Home)),
        (_, KeyCode::End) => Some(TuiEvent::Edit(EditOp::End)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(key(KeyCode::Esc)), Some(TuiEvent::Quit));
        assert_eq!(map_key(key(KeyCode::Char('q'))), Some(TuiEvent::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::Quit)
        );
    }

    #[test]
    fn test_focus_keys() {
        assert_eq!(map_key(key(KeyCode::Tab)), Some(TuiEvent::FocusNext));
        assert_eq!(map_key(key(KeyCode::Down)), Some(TuiEvent::FocusNext));
        assert_eq!(map_key(key(KeyCode::Up)), Some(TuiEvent::FocusPrev));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(TuiEvent::FocusPrev)
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT)),
            Some(TuiEvent::FocusPrev)
        );
    }

    #[test]
    fn test_editing_keys() {
        assert_eq!(
            map_key(key(KeyCode::Char('7'))),
            Some(TuiEvent::Edit(EditOp::Insert('7')))
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(TuiEvent::Edit(EditOp::Insert('A')))
        );
        assert_eq!(
            map_key(key(KeyCode::Backspace)),
            Some(TuiEvent::Edit(EditOp::Backspace))
        );
        assert_eq!(map_key(key(KeyCode::Left)), Some(TuiEvent::Edit(EditOp::Left)));
        assert_eq!(map_key(key(KeyCode::Enter)), Some(TuiEvent::Submit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)),
            None
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut release = key(KeyCode::Char('5'));
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn test_resize_has_no_action() {
        assert_eq!(TuiEvent::Resize.action(), None);
        assert_eq!(TuiEvent::Quit.action(), Some(Action::Quit));
    }
}
