use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::session::QuizSession;

pub fn render(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Length(24)]).split(area);

    let metadata = session.metadata();
    let title = if metadata.title.trim().is_empty() {
        "QUIZ"
    } else {
        metadata.title.as_str()
    };

    let info = vec![
        Line::from(Span::styled(title, Style::default().fg(Color::Cyan).bold())),
        Line::from(Span::styled(
            metadata.subtitle_parts().join("  ·  "),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let widget = Paragraph::new(info).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[0]);

    let stats = session.stats();
    let lines = vec![
        Line::from(Span::styled(
            format!("{}/{}", stats.total_correct(), stats.total_answered()),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(Span::styled(
            format!("{}% correct", stats.percentage()),
            Style::default().fg(grade_color(stats.percentage(), stats.total_answered())),
        )),
    ];
    let widget = Paragraph::new(lines).alignment(Alignment::Right).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}

fn grade_color(percentage: u8, answered: usize) -> Color {
    if answered == 0 {
        return Color::DarkGray;
    }
    match percentage {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}
