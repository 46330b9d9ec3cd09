mod celebration;
mod header;
mod history;
mod loading;
mod quiz;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let session = app.session();
    header::render(frame, chunks[0], session);

    if !session.is_ready() {
        loading::render(frame, chunks[1]);
    } else if session.history_visible() {
        history::render(frame, chunks[1], session.history());
    } else {
        quiz::render(frame, chunks[1], app);
    }

    render_controls(frame, chunks[2], app);

    if let Some(effect) = app.celebration() {
        celebration::render(frame, area, effect);
    }
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let text = if !app.session().is_ready() {
        "q quit"
    } else if app.session().history_visible() {
        "h back to quiz  ·  q quit"
    } else {
        "j/k navigate  ·  enter select  ·  h history  ·  q quit"
    };

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
