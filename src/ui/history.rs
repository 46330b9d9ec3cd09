use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph},
};

use crate::models::AnsweredRecord;

pub fn render(frame: &mut Frame, area: Rect, history: &[AnsweredRecord]) {
    if history.is_empty() {
        let widget = Paragraph::new("No answers yet")
            .alignment(Alignment::Center)
            .fg(Color::DarkGray);
        frame.render_widget(widget, area);
        return;
    }

    let lines: Vec<Line> = history
        .iter()
        .enumerate()
        .flat_map(|(index, record)| record_lines(index, record))
        .collect();

    // keep the newest answers in view
    let scroll = lines.len().saturating_sub(area.height as usize);

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(widget, area);
}

fn record_lines(index: usize, record: &AnsweredRecord) -> [Line<'_>; 2] {
    let (symbol, color) = if record.was_correct {
        ("+", Color::Green)
    } else {
        ("-", Color::Red)
    };

    let header = Line::from(vec![
        Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
        Span::styled(
            format!("{:3}. ", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(record.question.prompt.as_str(), Style::default().fg(Color::White)),
    ]);

    let mut detail = vec![
        Span::raw("        "),
        Span::styled(
            format!("your answer: {}", record.selected_text),
            Style::default().fg(color),
        ),
    ];
    if !record.was_correct {
        if let Some(correct) = record.question.correct_option() {
            detail.push(Span::styled(
                format!("  ·  correct: {}", correct.text),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    [header, Line::from(detail)]
}
