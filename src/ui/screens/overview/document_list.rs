use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListItem, ListState, StatefulWidget},
};

use crate::app::{App, Row};
use crate::ui::style;

pub fn render_document_list(app: &mut App, area: Rect, buf: &mut Buffer) {
    let rows = app.catalog_view.rows(&app.catalog);

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| match row {
            Row::Section(category) => {
                let expanded = app.catalog_view.is_expanded(*category);
                let marker = if !category.is_collapsible() {
                    "•"
                } else if expanded {
                    "▾"
                } else {
                    "▸"
                };
                let header = Line::from(vec![
                    Span::raw(format!("{} ", marker)),
                    Span::styled(
                        category.section_title(),
                        style::dim_unless_focused(true, Style::default().fg(Color::Cyan)),
                    ),
                    Span::raw(format!(" ({})", app.catalog.count_in(*category))),
                ]);
                let subtitle = Line::from(format!("  {}", category.section_subtitle())).dim();
                ListItem::new(vec![header, subtitle])
            }
            Row::Document(i) => match app.catalog.records().get(*i) {
                Some(doc) => ListItem::new(Line::from(vec![
                    Span::raw("    "),
                    Span::raw(doc.title.clone()),
                    Span::raw("  "),
                    Span::styled(format!("{}.pdf", doc.filename), Style::default().dim()),
                ])),
                None => ListItem::new(""),
            },
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::bordered()
                .title("Documents")
                .border_type(BorderType::Rounded)
                .border_style(style::border()),
        )
        .highlight_style(style::selected(Style::default()));

    let mut state = ListState::default().with_selected(Some(app.catalog_view.selected()));
    StatefulWidget::render(list, area, buf, &mut state);
}
