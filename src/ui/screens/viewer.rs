use pdf_library::viewer::SessionOutcome;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::app::App;
use crate::ui::{frame_layout, style};

pub fn render_viewer(app: &mut App, area: Rect, buf: &mut Buffer) {
    let [header_area, body_area, footer_area] = frame_layout(area, 5);

    let Some(page) = &app.viewer else {
        Paragraph::new("No document open.")
            .alignment(Alignment::Center)
            .render(body_area, buf);
        return;
    };

    Paragraph::new(vec![
        Line::from(page.record.title.clone()).bold(),
        Line::from(vec![
            Span::styled(format!(" {}.pdf ", page.record.filename), Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw("  "),
            Span::raw(page.record.category.section_title()),
        ]),
        Line::from(page.url.clone()).dim(),
    ])
    .block(
        Block::bordered()
            .title("Document")
            .border_type(BorderType::Rounded)
            .border_style(style::border()),
    )
    .render(header_area, buf);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(body_area);

    let outcome = page.report.as_ref().map(|report| report.outcome);
    let mut lines = Vec::new();
    match &page.report {
        None => lines.push(Line::from("Opening...").style(style::outcome_style(None))),
        Some(report) => {
            let summary = match report.outcome {
                SessionOutcome::Delivered(strategy) => format!("Opened with the {}", strategy),
                SessionOutcome::Unreachable => "Document not found on the server".to_string(),
                SessionOutcome::Exhausted => "Every viewer failed".to_string(),
            };
            lines.push(Line::from(summary).style(style::outcome_style(outcome)).bold());

            if !report.visited.is_empty() {
                let tried: Vec<&str> = report.visited.iter().map(|s| s.label()).collect();
                lines.push(Line::from(format!("Tried: {}", tried.join(" → "))).dim());
            }
            lines.push(Line::from(""));

            for error in &report.errors {
                lines.push(Line::from(format!("! {}", error)).fg(Color::Red));
                let hints: Vec<String> = error
                    .recovery_actions()
                    .iter()
                    .map(|action| format!("[{}] {}", action.key_hint(), action.label()))
                    .collect();
                lines.push(Line::from(format!("  {}", hints.join("  "))).dim());
            }

            let actions = report.recovery_actions();
            if !actions.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from("Manual link:").bold());
                lines.push(Line::from(report.absolute_url.clone()).fg(Color::Cyan));
            }
        }
    }

    Paragraph::new(lines)
        .block(Block::bordered().title("Delivery").border_type(BorderType::Rounded))
        .wrap(Wrap { trim: false })
        .render(body[0], buf);

    let settings = &app.settings;
    Paragraph::new(vec![
        Line::from(format!("Zoom: {}%", settings.zoom_percent())),
        Line::from(format!("Rotation: {}°", settings.rotation)),
        Line::from(""),
        Line::from("Applies to the next inline view.").dim(),
    ])
    .block(Block::bordered().title("View").border_type(BorderType::Rounded))
    .render(body[1], buf);

    let help_text = match &app.status {
        Some(status) => status.clone(),
        None => "r: Retry • d: Download • o: Open externally • +/-: Zoom • R: Rotate • Esc: Back".to_string(),
    };
    Paragraph::new(help_text)
        .block(Block::bordered().title("Controls").border_type(BorderType::Rounded))
        .fg(Color::Yellow)
        .alignment(Alignment::Center)
        .render(footer_area, buf);
}
