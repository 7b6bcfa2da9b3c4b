use pdf_library::{
    delivery::{probe::ProbeOutcome, strategy::DeliveryStrategy},
    viewer::SessionOutcome,
};
use ratatui::style::{Color, Style, Stylize};

pub fn dim_unless_focused(is_focused: bool, style: Style) -> Style {
    if is_focused { style.bold() } else { style.dim() }
}

pub fn selected(style: Style) -> Style {
    style.fg(Color::Black).bg(Color::Green).bold()
}

pub fn border() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn probe_style(outcome: &ProbeOutcome) -> Style {
    if outcome.reachable {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    }
}

pub fn outcome_style(outcome: Option<SessionOutcome>) -> Style {
    match outcome {
        None => Style::default().fg(Color::Cyan),
        Some(SessionOutcome::Delivered(DeliveryStrategy::Download)) => Style::default().fg(Color::Yellow),
        Some(SessionOutcome::Delivered(_)) => Style::default().fg(Color::Green),
        Some(_) => Style::default().fg(Color::Red),
    }
}
