use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::models::FeedbackState;
use crate::session::{ActiveQuestion, OptionState};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.session().active_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_question_id(frame, chunks[0], question);
    render_prompt(frame, chunks[1], question.prompt());
    render_options(frame, chunks[2], app, question);

    if let Some(feedback) = app.session().feedback() {
        render_feedback(frame, chunks[3], feedback, question);
    }
}

fn render_question_id(frame: &mut Frame, area: Rect, question: &ActiveQuestion) {
    let widget = Paragraph::new(format!("#{}", question.id()))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_prompt(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn option_style(state: OptionState, highlighted: bool) -> Style {
    match state {
        OptionState::Unselected if highlighted => Style::default().fg(Color::Cyan).bold(),
        OptionState::Unselected => Style::default().fg(Color::Gray),
        OptionState::SelectedCorrect => Style::default().fg(Color::Green).bold(),
        OptionState::SelectedIncorrect => Style::default().fg(Color::Red).bold(),
        OptionState::RevealedCorrect => Style::default().fg(Color::Green),
        OptionState::Dimmed => Style::default().fg(Color::DarkGray),
    }
}

fn option_marker(state: OptionState, highlighted: bool) -> &'static str {
    match state {
        OptionState::Unselected if highlighted => ">",
        OptionState::SelectedCorrect | OptionState::RevealedCorrect => "+",
        OptionState::SelectedIncorrect => "x",
        _ => " ",
    }
}

fn render_options(frame: &mut Frame, area: Rect, app: &App, question: &ActiveQuestion) {
    let options = question.options();
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let state = app.session().option_state(index);
        let highlighted = index == app.cursor();
        let style = option_style(state, highlighted);

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", option_marker(state, highlighted)), style),
            Span::styled(format!("{}. ", index + 1), style),
            Span::styled(option.text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_feedback(frame: &mut Frame, area: Rect, feedback: &FeedbackState, question: &ActiveQuestion) {
    let line = if feedback.is_correct {
        Line::from(Span::styled(
            "Correct!",
            Style::default().fg(Color::Green).bold(),
        ))
    } else {
        let answer = feedback
            .correct_index
            .and_then(|index| question.options().get(index))
            .map(|option| option.text.as_str())
            .unwrap_or_default();
        Line::from(vec![
            Span::styled("Incorrect", Style::default().fg(Color::Red).bold()),
            Span::styled(
                format!("  ·  the answer was {}", answer),
                Style::default().fg(Color::Gray),
            ),
        ])
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
