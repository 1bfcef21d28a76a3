//! # SubmitButton Component
//!
//! The `[ Submit ]` control at the bottom of the form. Purely presentational:
//! pressing Enter while it has focus is handled by the core reducer.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::tui::component::Component;
use crate::tui::components::{BLURRED_STYLE, FOCUSED_STYLE};

pub const SUBMIT_LABEL: &str = "Submit";

pub struct SubmitButton {
    pub focused: bool,
}

impl SubmitButton {
    pub fn new(focused: bool) -> Self {
        Self { focused }
    }
}

impl Component for SubmitButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Focused: the whole button is highlighted. Blurred: only the label is dimmed.
        let line = if self.focused {
            Line::from(Span::styled(format!("[ {} ]", SUBMIT_LABEL), FOCUSED_STYLE))
        } else {
            Line::from(vec![
                Span::styled("[ ", Style::default()),
                Span::styled(SUBMIT_LABEL, BLURRED_STYLE),
                Span::styled(" ]", Style::default()),
            ])
        };
        frame.render_widget(line, area);
    }
}
