use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{Question, Subject};
use crate::quiz::{QuestionResult, QuizSession};

use super::{render_coming_soon, render_controls};

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, app: &App, subject: &Subject, session: &QuizSession) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    let Some(question) = session.current_question() else {
        let class = app.profile().map_or(0, |p| p.class_level);
        render_coming_soon(
            frame,
            area,
            "Quiz coming soon!",
            format!("No {} questions for class {} yet.", subject.name, class),
        );
        render_controls(frame, chunks[5], "esc back  ·  q quit");
        return;
    };

    render_progress(frame, chunks[0], subject, session);

    let bar = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .label("")
        .percent(session.progress());
    frame.render_widget(bar, chunks[1]);

    let text = Paragraph::new(question.text.as_str())
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(text, chunks[2]);

    let result = session.last_result();
    render_options(frame, chunks[3], question, session.selected(), result);

    let controls = match result {
        Some(result) => {
            render_explanation(frame, chunks[4], question, result);
            "enter next question  ·  r restart  ·  esc back  ·  q quit"
        }
        None => "j/k choose  ·  enter submit  ·  r restart  ·  esc back  ·  q quit",
    };
    render_controls(frame, chunks[5], controls);
}

fn render_progress(frame: &mut Frame, area: Rect, subject: &Subject, session: &QuizSession) {
    let progress = format!(
        "{} Quiz  ·  Question {} of {}",
        subject.name,
        session.question_number(),
        session.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    selected: Option<usize>,
    result: Option<&QuestionResult>,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let is_selected = selected == Some(index);
        let style = match result {
            Some(_) if index == question.correct_answer => Style::default().fg(Color::Green).bold(),
            Some(_) if is_selected => Style::default().fg(Color::Red).bold(),
            Some(_) => Style::default().fg(Color::DarkGray),
            None if is_selected => Style::default().fg(Color::Cyan).bold(),
            None => Style::default().fg(Color::Gray),
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_explanation(frame: &mut Frame, area: Rect, question: &Question, result: &QuestionResult) {
    let (verdict, color) = if result.is_correct {
        ("Correct!", Color::Green)
    } else {
        ("Incorrect", Color::Red)
    };
    let content = vec![
        Line::from(Span::styled(verdict, Style::default().fg(color).bold())),
        Line::from(""),
        Line::from(question.explanation.as_str().fg(Color::Gray)),
    ];

    let widget = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(color)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
