use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Gauge, Paragraph, Widget, Wrap},
};

use crate::app::App;
use crate::ui::{centered_rect, frame_layout, style};

pub fn render_diagnostic(app: &mut App, area: Rect, buf: &mut Buffer) {
    let [header_area, body_area, footer_area] = frame_layout(area, 3);

    let (done, total) = app
        .diagnostic
        .as_ref()
        .map(|report| (report.entries.len(), report.total))
        .unwrap_or((0, app.catalog.len()));
    let ratio = if total == 0 { 0.0 } else { done as f64 / total as f64 };

    Gauge::default()
        .block(
            Block::bordered()
                .title("Diagnostic PDF")
                .border_type(BorderType::Rounded)
                .border_style(style::border()),
        )
        .gauge_style(ratatui::style::Style::default().fg(Color::Green))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{}/{}", done, total))
        .render(header_area, buf);

    let footer = if app.diagnostic_running {
        "Checking documents... • Esc: Back"
    } else {
        "Enter/r: Run check • Esc: Back • q: Quit"
    };
    Paragraph::new(footer)
        .block(Block::bordered().title("Controls").border_type(BorderType::Rounded))
        .fg(Color::Yellow)
        .alignment(Alignment::Center)
        .render(footer_area, buf);

    let Some(report) = &app.diagnostic else {
        Paragraph::new(format!(
            "Checks every document on {}.\n\nPress Enter to start.",
            app.config.host
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(centered_rect(60, 40, body_area), buf);
        return;
    };

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(body_area);

    // newest entries at the bottom; keep the tail visible
    let visible = body[0].height.saturating_sub(2) as usize;
    let skip = report.entries.len().saturating_sub(visible);
    let entries: Vec<Line> = report
        .entries
        .iter()
        .skip(skip)
        .map(|entry| {
            let mark = if entry.outcome.reachable { "✓" } else { "✗" };
            Line::from(vec![
                Span::styled(format!("{} ", mark), style::probe_style(&entry.outcome)),
                Span::raw(entry.title.clone()),
                Span::raw("  "),
                Span::styled(entry.outcome.status_label(), style::probe_style(&entry.outcome)),
            ])
        })
        .collect();

    Paragraph::new(entries)
        .block(Block::bordered().title("Results").border_type(BorderType::Rounded))
        .render(body[0], buf);

    let mut summary = vec![
        Line::from(format!("Reachable: {}", report.success_count())).fg(Color::Green),
        Line::from(format!("Unreachable: {}", report.error_count())).fg(Color::Red),
        Line::from(""),
    ];
    if report.is_complete() {
        summary.extend(report.recommendations().into_iter().map(Line::from));
    }

    Paragraph::new(summary)
        .block(Block::bordered().title("Summary").border_type(BorderType::Rounded))
        .wrap(Wrap { trim: true })
        .render(body[1], buf);
}
