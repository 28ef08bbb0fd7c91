use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::models::Subject;
use crate::quiz::{Grade, QuizSession};

use super::render_controls;

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, subject: &Subject, session: &QuizSession) {
    let Some(summary) = session.summary() else {
        return;
    };
    let color = grade_color(summary.grade);

    let chunks = Layout::vertical([
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            summary.grade.headline(),
            Style::default().fg(color).bold(),
        )),
        Line::from(format!("{} Quiz", subject.name).fg(Color::DarkGray)),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}  ({}%)", summary.correct, summary.total, summary.percentage),
            Style::default().fg(color).bold(),
        )),
    ];
    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[0]);

    render_breakdown(frame, chunks[1], session);
    render_controls(frame, chunks[2], "r retake quiz  ·  esc back  ·  q quit");
}

fn grade_color(grade: Grade) -> Color {
    match grade {
        Grade::Excellent => Color::Green,
        Grade::GoodJob => Color::Yellow,
        Grade::KeepLearning => Color::Red,
    }
}

fn render_breakdown(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let lines: Vec<Line> = session
        .results()
        .iter()
        .zip(session.questions())
        .enumerate()
        .map(|(index, (result, question))| {
            let (symbol, color) = if result.is_correct {
                ("+", Color::Green)
            } else {
                ("-", Color::Red)
            };

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(truncate(&question.text), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn truncate(text: &str) -> String {
    if text.chars().count() > QUESTION_PREVIEW_LENGTH {
        let head: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
