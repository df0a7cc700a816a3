use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::quiz::{Phase, QuizView};

use super::theme::Palette;

const EMPTY_BLANK: &str = "____";

pub fn render(frame: &mut Frame, area: Rect, view: &QuizView, cursor: usize, palette: &Palette) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], view, palette);
    render_progress(frame, chunks[1], view, palette);
    render_prompt(frame, chunks[2], &view.prompt, palette);
    render_blanks(frame, chunks[3], view, palette);
    render_options(frame, chunks[4], view, cursor, palette);
    render_status(frame, chunks[5], view, palette);
    render_controls(frame, chunks[6], view, palette);
}

fn render_header(frame: &mut Frame, area: Rect, view: &QuizView, palette: &Palette) {
    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let question = Paragraph::new(format!(
        "Question {} of {}",
        view.current_index + 1,
        view.total_questions
    ))
    .fg(palette.accent)
    .bold();

    let timer_color = if view.seconds_remaining <= 5 {
        palette.incorrect
    } else {
        palette.muted
    };
    let timer = Paragraph::new(format!("Time left: {}s", view.seconds_remaining))
        .alignment(Alignment::Right)
        .fg(timer_color);

    frame.render_widget(question, halves[0]);
    frame.render_widget(timer, halves[1]);
}

fn render_progress(frame: &mut Frame, area: Rect, view: &QuizView, palette: &Palette) {
    let widget = Gauge::default()
        .gauge_style(Style::default().fg(palette.accent))
        .ratio(view.progress.clamp(0.0, 1.0))
        .label("");
    frame.render_widget(widget, area);
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &str, palette: &Palette) {
    let widget = Paragraph::new(prompt)
        .wrap(Wrap { trim: true })
        .fg(palette.text)
        .bold();
    frame.render_widget(widget, area);
}

fn render_blanks(frame: &mut Frame, area: Rect, view: &QuizView, palette: &Palette) {
    let mut spans = Vec::with_capacity(view.blanks.len() * 2);

    for (slot, (blank, mark)) in view.blanks.iter().zip(view.blank_marks).enumerate() {
        let style = match mark {
            Some(true) => Style::default().fg(palette.correct).bold(),
            Some(false) => Style::default().fg(palette.incorrect).bold(),
            None if blank.is_some() => Style::default().fg(palette.highlight),
            None => Style::default().fg(palette.muted),
        };
        spans.push(Span::styled(format!("{}:", slot + 1), palette.muted));
        spans.push(Span::styled(
            format!("[ {} ]  ", blank.as_deref().unwrap_or(EMPTY_BLANK)),
            style,
        ));
    }

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.muted)
            .title(" Blanks ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, view: &QuizView, cursor: usize, palette: &Palette) {
    let lines: Vec<Line> = view
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let is_cursor = index == cursor && view.phase == Phase::InProgress;
            let style = if option.disabled {
                Style::default().fg(palette.muted).crossed_out()
            } else if is_cursor {
                Style::default().fg(palette.highlight).bold()
            } else {
                Style::default().fg(palette.text)
            };
            let marker = if is_cursor { ">" } else { " " };

            Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(option.text.as_str(), style),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.muted)
            .title(" Options ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_status(frame: &mut Frame, area: Rect, view: &QuizView, palette: &Palette) {
    let line = match view.phase {
        Phase::Graded if view.blank_marks.iter().all(|m| *m == Some(true)) => {
            Line::from("Correct!".fg(palette.correct).bold())
        }
        Phase::Graded => Line::from("Incorrect".fg(palette.incorrect).bold()),
        _ if view.can_submit => Line::from("All blanks filled, press s to submit".fg(palette.hint)),
        _ => Line::from(""),
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_controls(frame: &mut Frame, area: Rect, view: &QuizView, palette: &Palette) {
    let text = if view.can_advance {
        let label = if view.is_last_question { "finish" } else { "next" };
        format!("n {}  ·  d theme  ·  q quit", label)
    } else {
        "←/→ move  ·  enter pick  ·  1-4 clear blank  ·  s submit  ·  d theme  ·  q quit"
            .to_string()
    };

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(palette.muted);
    frame.render_widget(widget, area);
}
