use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

use super::theme::Palette;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme().palette();
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Loading...",
            Style::default().fg(palette.accent).bold(),
        )),
        Line::from(""),
        Line::from(app.source().fg(palette.muted)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, centered(area, 6));
}

pub fn render_failed(frame: &mut Frame, area: Rect, reason: &str, palette: &Palette) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Cannot load quiz",
            Style::default().fg(palette.incorrect).bold(),
        )),
        Line::from(""),
        Line::from(reason.fg(palette.text)),
        Line::from(""),
        Line::from("q to quit".fg(palette.muted)),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.muted),
        );
    frame.render_widget(widget, centered(area, 9));
}

fn centered(area: Rect, height: u16) -> Rect {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);
    chunks[1]
}
