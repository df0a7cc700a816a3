use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Padding, Paragraph},
};

use crate::quiz::{QuizSummary, QuizView};

use super::theme::Palette;

pub fn render(frame: &mut Frame, area: Rect, view: &QuizView, scroll: usize, palette: &Palette) {
    let Some(summary) = &view.summary else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[0], summary, palette);
    render_chart(frame, chunks[1], summary, palette);
    render_breakdown(frame, chunks[2], summary, scroll, palette);
    render_controls(frame, chunks[3], palette);
}

fn grade_color(percentage: f64, palette: &Palette) -> Color {
    match percentage as u32 {
        90..=100 => palette.correct,
        70..=89 => palette.accent,
        50..=69 => palette.highlight,
        _ => palette.incorrect,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, summary: &QuizSummary, palette: &Palette) {
    let percentage = summary.percentage();
    let content = vec![
        Line::from(Span::styled(
            "TEST COMPLETED!",
            Style::default().fg(palette.accent).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Your Score: {} / {}  ({:.0}%)",
                summary.score, summary.total, percentage
            ),
            Style::default().fg(grade_color(percentage, palette)).bold(),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(palette.muted),
    );
    frame.render_widget(widget, area);
}

fn render_chart(frame: &mut Frame, area: Rect, summary: &QuizSummary, palette: &Palette) {
    let bars = [
        Bar::default()
            .value(summary.score as u64)
            .label(Line::from("Correct"))
            .style(palette.correct),
        Bar::default()
            .value(summary.incorrect() as u64)
            .label(Line::from("Incorrect"))
            .style(palette.incorrect),
    ];

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(3)
        .max(summary.total.max(1) as u64)
        .value_style(Style::default().fg(palette.text).bold());

    let columns = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(24),
        Constraint::Fill(1),
    ])
    .split(area);
    frame.render_widget(chart, columns[1]);
}

fn render_breakdown(
    frame: &mut Frame,
    area: Rect,
    summary: &QuizSummary,
    scroll: usize,
    palette: &Palette,
) {
    let mut lines: Vec<Line> = Vec::new();

    for (index, result) in summary.per_question.iter().enumerate() {
        let (symbol, color) = if result.is_correct {
            ("✔", palette.correct)
        } else {
            ("✘", palette.incorrect)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("Q{}: ", index + 1), Style::default().fg(palette.text).bold()),
            Span::styled(result.question.prompt.as_str(), palette.text),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   Your Answer: {} {}", result.user_answer.join(", "), symbol),
            color,
        )));
        if !result.is_correct {
            lines.push(Line::from(Span::styled(
                format!("   Correct Answer: {}", result.correct_answer.join(", ")),
                palette.hint,
            )));
        }
        lines.push(Line::from(""));
    }

    // Scroll is counted in questions; find the first line of that question.
    let offset: usize = summary
        .per_question
        .iter()
        .take(scroll)
        .map(|result| if result.is_correct { 3 } else { 4 })
        .sum();

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(palette.muted)
                .padding(Padding::horizontal(1)),
        )
        .scroll((offset.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, palette: &Palette) {
    let widget = Paragraph::new("j/k scroll  ·  q quit")
        .alignment(Alignment::Center)
        .fg(palette.muted);
    frame.render_widget(widget, area);
}
