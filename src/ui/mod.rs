pub mod screens;
pub mod style;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};

use crate::app::{App, AppMode};
use crate::ui::screens::{diagnostic::render_diagnostic, overview::render_overview, viewer::render_viewer};

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.mode {
            AppMode::Overview => render_overview(self, area, buf),
            AppMode::Viewer => render_viewer(self, area, buf),
            AppMode::Diagnostic => render_diagnostic(self, area, buf),
        }
    }
}

/// Standard three-row frame: header, body, controls.
pub(crate) fn frame_layout(area: Rect, header_height: u16) -> [Rect; 3] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);
    [rows[0], rows[1], rows[2]]
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
