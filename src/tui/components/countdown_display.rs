//! # CountdownDisplay Component
//!
//! Renders the remaining time as a single `MM:SS` line.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::Line;

use crate::core::countdown::Countdown;
use crate::tui::component::Component;
use crate::tui::components::FOCUSED_STYLE;

pub struct CountdownDisplay {
    pub countdown: Countdown,
}

impl CountdownDisplay {
    pub fn new(countdown: Countdown) -> Self {
        Self { countdown }
    }
}

impl Component for CountdownDisplay {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.countdown.is_finished() {
            FOCUSED_STYLE.add_modifier(Modifier::BOLD)
        } else {
            Default::default()
        };
        frame.render_widget(Line::styled(self.countdown.display(), style), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_renders_mm_ss() {
        let mut terminal = Terminal::new(TestBackend::new(8, 1)).unwrap();
        terminal
            .draw(|f| CountdownDisplay::new(Countdown::new(5, 9)).render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.starts_with("05:09"));
    }
}
