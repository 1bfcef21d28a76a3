//! # TUI Components
//!
//! All components here are stateless: they receive their data as props
//! built from the core `App` each frame and render into a given area.
//!
//! ```text
//! components/
//! ├── mod.rs                (this file, shared styles)
//! ├── text_field.rs         (label + content, placeholder, cursor)
//! ├── submit_button.rs      ([ Submit ])
//! ├── countdown_display.rs  (MM:SS)
//! └── help_bar.rs           (key hints)
//! ```

use ratatui::style::{Color, Style};

pub mod countdown_display;
pub mod help_bar;
pub mod submit_button;
pub mod text_field;

pub use countdown_display::CountdownDisplay;
pub use help_bar::HelpBar;
pub use submit_button::SubmitButton;
pub use text_field::TextField;

/// Highlight for the focused field or button (256-colour pink).
pub const FOCUSED_STYLE: Style = Style::new().fg(Color::Indexed(205));
/// Placeholders, the blurred button label and hints (256-colour grey).
pub const BLURRED_STYLE: Style = Style::new().fg(Color::Indexed(240));
/// Validation messages.
pub const ERROR_STYLE: Style = Style::new().fg(Color::Red);
