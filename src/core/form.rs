//! # Form
//!
//! The duration entry form: labelled text fields followed by a submit slot.
//!
//! ```text
//! focus index:   0        1      ...   fields.len()
//!              [field] [field]  ...   [ Submit ]
//! ```
//!
//! Focus cycles through `fields.len() + 1` slots. Editing is plain line
//! editing on the focused field, capped at the field's character limit.

use std::num::ParseIntError;

/// A single labelled text input.
///
/// `cursor` is a character index (not a byte offset) into `content`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    pub placeholder: String,
    content: String,
    cursor: usize,
    char_limit: usize,
    pub focused: bool,
}

/// Line-editing operations forwarded to the focused field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

impl Field {
    pub fn new(label: impl Into<String>, placeholder: impl Into<String>, char_limit: usize) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            content: String::new(),
            cursor: 0,
            char_limit,
            focused: false,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    fn len_chars(&self) -> usize {
        self.content.chars().count()
    }

    /// Byte offset of the character at `index` (or the end of the buffer).
    fn byte_offset(&self, index: usize) -> usize {
        self.content
            .char_indices()
            .nth(index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Apply an edit. Returns `true` if content or cursor changed.
    pub fn edit(&mut self, op: EditOp) -> bool {
        match op {
            EditOp::Insert(c) => {
                if c.is_control() || self.len_chars() >= self.char_limit {
                    return false;
                }
                let at = self.byte_offset(self.cursor);
                self.content.insert(at, c);
                self.cursor += 1;
                true
            }
            EditOp::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                let at = self.byte_offset(self.cursor - 1);
                self.content.remove(at);
                self.cursor -= 1;
                true
            }
            EditOp::Delete => {
                if self.cursor >= self.len_chars() {
                    return false;
                }
                let at = self.byte_offset(self.cursor);
                self.content.remove(at);
                true
            }
            EditOp::Left => {
                let moved = self.cursor > 0;
                self.cursor = self.cursor.saturating_sub(1);
                moved
            }
            EditOp::Right => {
                let moved = self.cursor < self.len_chars();
                if moved {
                    self.cursor += 1;
                }
                moved
            }
            EditOp::Home => std::mem::replace(&mut self.cursor, 0) != 0,
            EditOp::End => {
                let end = self.len_chars();
                std::mem::replace(&mut self.cursor, end) != end
            }
        }
    }

    /// Replace the content, truncating to the character limit.
    pub fn set_content(&mut self, value: &str) {
        self.content = value.chars().take(self.char_limit).collect();
        self.cursor = self.len_chars();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub fields: Vec<Field>,
    focus_index: usize,
    /// Validation message from the last rejected submit.
    pub error: Option<String>,
}

impl FormState {
    /// Build a form with the first field focused.
    pub fn new(mut fields: Vec<Field>) -> Self {
        if let Some(first) = fields.first_mut() {
            first.focused = true;
        }
        Self {
            fields,
            focus_index: 0,
            error: None,
        }
    }

    /// The single-field duration form.
    pub fn duration(label: &str, placeholder: &str, char_limit: usize) -> Self {
        Self::new(vec![Field::new(label, placeholder, char_limit)])
    }

    pub fn focus_index(&self) -> usize {
        self.focus_index
    }

    /// Number of focus slots: every field plus the submit control.
    fn slot_count(&self) -> usize {
        self.fields.len() + 1
    }

    pub fn submit_focused(&self) -> bool {
        self.focus_index == self.fields.len()
    }

    pub fn focus_next(&mut self) {
        self.set_focus((self.focus_index + 1) % self.slot_count());
    }

    pub fn focus_prev(&mut self) {
        let slots = self.slot_count();
        self.set_focus((self.focus_index + slots - 1) % slots);
    }

    fn set_focus(&mut self, index: usize) {
        self.focus_index = index;
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.focused = i == index;
        }
    }

    /// Forward an edit to the focused field. Edits on the submit slot are ignored.
    pub fn edit(&mut self, op: EditOp) -> bool {
        let Some(field) = self.fields.get_mut(self.focus_index) else {
            return false;
        };
        let changed = field.edit(op);
        if changed {
            self.error = None;
        }
        changed
    }

    /// Parse the first field as a whole number of minutes.
    pub fn parse_minutes(&self) -> Result<u32, ParseIntError> {
        let content = self.fields.first().map(Field::content).unwrap_or_default();
        content.parse::<u32>()
    }
}
