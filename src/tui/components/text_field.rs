//! # TextField Component
//!
//! One line of the duration form: the field label followed by its content,
//! or a dimmed placeholder while empty.
//!
//! When focused, the label and content take the focus colour and the
//! terminal cursor is placed at the field's cursor column, measured in
//! display cells so wide characters line up.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::form::Field;
use crate::tui::component::Component;
use crate::tui::components::{BLURRED_STYLE, FOCUSED_STYLE};

/// Stateless renderer for a [`Field`].
///
/// # Props
///
/// - `field`: the field to draw, including its focus flag
pub struct TextField<'a> {
    pub field: &'a Field,
}

impl<'a> TextField<'a> {
    pub fn new(field: &'a Field) -> Self {
        Self { field }
    }

    fn line(&self) -> Line<'a> {
        let style = if self.field.focused {
            FOCUSED_STYLE
        } else {
            Style::default()
        };

        let body = if self.field.content().is_empty() {
            Span::styled(self.field.placeholder.as_str(), BLURRED_STYLE)
        } else {
            Span::styled(self.field.content(), style)
        };

        Line::from(vec![Span::styled(self.field.label.as_str(), style), body])
    }

    /// Display column of the cursor, relative to the start of the line.
    pub fn cursor_column(&self) -> u16 {
        let before: String = self
            .field
            .content()
            .chars()
            .take(self.field.cursor())
            .collect();
        (self.field.label.width() + before.width()) as u16
    }
}

impl Component for TextField<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);

        if self.field.focused {
            let x = area.x + self.cursor_column().min(area.width.saturating_sub(1));
            frame.set_cursor_position((x, area.y));
        }
    }
}
