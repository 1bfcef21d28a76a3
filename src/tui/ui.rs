use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;

use crate::core::countdown::Countdown;
use crate::core::form::FormState;
use crate::core::state::{App, Phase};
use crate::tui::component::Component;
use crate::tui::components::{
    CountdownDisplay, ERROR_STYLE, HelpBar, SubmitButton, TextField,
};

/// Left indent and top spacing around everything we draw.
const MARGIN_LEFT: u16 = 2;
const MARGIN_TOP: u16 = 1;

pub fn draw_ui(frame: &mut Frame, app: &App) {
    let area = view_area(frame.area());
    match &app.phase {
        Phase::Form(form) => draw_form(frame, area, form),
        Phase::Countdown(countdown) => draw_countdown(frame, area, *countdown),
    }
}

/// Inset the frame on the left and top only.
fn view_area(area: Rect) -> Rect {
    let x = area.x + MARGIN_LEFT.min(area.width);
    let y = area.y + MARGIN_TOP.min(area.height);
    Rect {
        x,
        y,
        width: area.right().saturating_sub(x),
        height: area.bottom().saturating_sub(y),
    }
}

fn draw_form(frame: &mut Frame, area: Rect, form: &FormState) {
    use Constraint::{Length, Min};

    // fields, blank, submit, blank, error, blank, help
    let mut constraints: Vec<Constraint> = form.fields.iter().map(|_| Length(1)).collect();
    constraints.extend([Length(1), Length(1), Length(1), Length(1), Length(1), Length(1), Min(0)]);
    let rows = Layout::vertical(constraints).split(area);

    let field_count = form.fields.len();
    for (field, row) in form.fields.iter().zip(rows.iter()) {
        TextField::new(field).render(frame, *row);
    }

    SubmitButton::new(form.submit_focused()).render(frame, rows[field_count + 1]);

    if let Some(error) = &form.error {
        frame.render_widget(Span::styled(error.as_str(), ERROR_STYLE), rows[field_count + 3]);
    }

    HelpBar::form().render(frame, rows[field_count + 5]);
}

fn draw_countdown(frame: &mut Frame, area: Rect, countdown: Countdown) {
    use Constraint::{Length, Min};
    let [time_area, _, help_area, _] =
        Layout::vertical([Length(1), Length(1), Length(1), Min(0)]).areas(area);

    CountdownDisplay::new(countdown).render(frame, time_area);
    HelpBar::countdown().render(frame, help_area);
}
