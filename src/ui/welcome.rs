use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::quiz::QuizView;

use super::theme::Palette;

pub fn render(frame: &mut Frame, area: Rect, view: &QuizView, palette: &Palette) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "WELCOME TO THE QUIZ",
            Style::default().fg(palette.accent).bold(),
        )),
        Line::from(""),
        Line::from(
            format!(
                "{} questions · {}s each",
                view.total_questions, view.seconds_remaining
            )
            .fg(palette.muted),
        ),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(palette.correct).bold(),
        )),
        Line::from("to start exam".fg(palette.muted)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.muted),
    );

    frame.render_widget(widget, chunks[1]);
}
