mod loading;
mod quiz;
mod result;
mod theme;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, LoadState, Screen};

pub use theme::Theme;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = app.theme().palette();
    frame.render_widget(Block::default().bg(palette.background), area);

    match (app.screen(), app.load_state()) {
        (Screen::Loading, _) => loading::render(frame, area, app),
        (Screen::LoadFailed, LoadState::Failed(reason)) => {
            loading::render_failed(frame, area, reason, &palette)
        }
        (_, LoadState::Ready(machine)) => {
            let view = machine.view();
            match app.screen() {
                Screen::Welcome => welcome::render(frame, area, &view, &palette),
                Screen::Exam => quiz::render(frame, area, &view, app.cursor(), &palette),
                _ => result::render(frame, area, &view, app.result_scroll(), &palette),
            }
        }
        _ => {}
    }
}
