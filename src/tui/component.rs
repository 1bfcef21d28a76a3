use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields) and render to a
/// `Frame` within a given `Rect`. They are built fresh each frame from
/// the core `App` state and hold no state of their own.
///
/// # Mutability
///
/// The `render` method takes `&mut self` so a component may cache layout
/// calculations during the render pass, matching Ratatui's
/// `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
