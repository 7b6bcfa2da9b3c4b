use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Stylize},
    text::Line,
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::app::App;
use crate::ui::{frame_layout, style};

pub mod document_list;

pub fn render_overview(app: &mut App, area: Rect, buf: &mut Buffer) {
    let [header_area, list_area, footer_area] = frame_layout(area, 4);

    let mut header_lines = vec![Line::from(format!(
        "{} documents disponibles",
        app.catalog.len()
    ))];
    match app.environment().restriction() {
        Some(reason) => header_lines.push(Line::from(format!("Inline viewing disabled: {}", reason)).fg(Color::Yellow)),
        None => header_lines.push(Line::from(app.config.host.clone()).dim()),
    }

    Paragraph::new(header_lines)
        .block(
            Block::bordered()
                .title("Bibliothèque de documents")
                .title_alignment(Alignment::Center)
                .border_type(BorderType::Rounded)
                .border_style(style::border()),
        )
        .fg(Color::Green)
        .alignment(Alignment::Center)
        .render(header_area, buf);

    document_list::render_document_list(app, list_area, buf);

    let help_text = match &app.status {
        Some(status) => status.clone(),
        None => "↑/↓: Navigate • Enter: Open/Expand • d: Download • o: Open externally • p: Diagnostic • q: Quit".to_string(),
    };

    Paragraph::new(help_text)
        .block(
            Block::bordered()
                .title("Controls")
                .border_type(BorderType::Rounded),
        )
        .fg(Color::Yellow)
        .alignment(Alignment::Center)
        .render(footer_area, buf);
}
