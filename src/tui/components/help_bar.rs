//! # HelpBar Component
//!
//! A dimmed one-line key reference under the current view. The hints depend
//! on the phase: the form lists navigation and submit keys, the countdown
//! only lists how to quit.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;
use crate::tui::components::BLURRED_STYLE;

pub const FORM_HINTS: &str = "tab/↑↓: move • enter: submit • esc/q: quit";
pub const COUNTDOWN_HINTS: &str = "esc/q: quit";

pub struct HelpBar {
    pub hints: &'static str,
}

impl HelpBar {
    pub fn form() -> Self {
        Self { hints: FORM_HINTS }
    }

    pub fn countdown() -> Self {
        Self {
            hints: COUNTDOWN_HINTS,
        }
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::styled(self.hints, BLURRED_STYLE), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_countdown_hints() {
        let mut terminal = Terminal::new(TestBackend::new(20, 1)).unwrap();
        terminal
            .draw(|f| HelpBar::countdown().render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.starts_with("esc/q: quit"));
    }
}
