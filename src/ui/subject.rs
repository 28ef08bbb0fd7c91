use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{Subject, Topic};

use super::{render_coming_soon, render_controls};

pub fn render(frame: &mut Frame, area: Rect, app: &App, subject: &Subject, cursor: usize) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_header(frame, chunks[0], subject);

    let topics = app.topics(&subject.id);
    if topics.is_empty() {
        let class = app.profile().map_or(0, |p| p.class_level);
        render_coming_soon(
            frame,
            chunks[1],
            "Topics coming soon!",
            format!("No {} topics for class {} yet.", subject.name, class),
        );
    } else {
        let lines: Vec<Line> = topics
            .iter()
            .enumerate()
            .flat_map(|(index, topic)| {
                let is_selected = index == cursor;
                let style = if is_selected {
                    Style::default().fg(Color::Cyan).bold()
                } else {
                    Style::default().fg(Color::Gray)
                };
                let marker = if is_selected { ">" } else { " " };
                [
                    Line::from(Span::styled(format!(" {} {}", marker, topic.title), style)),
                    Line::from(Span::styled(
                        format!("   {}", topic.description),
                        Style::default().fg(Color::DarkGray),
                    )),
                ]
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), chunks[1]);
    }

    render_controls(
        frame,
        chunks[2],
        "j/k navigate  ·  enter read  ·  t quiz  ·  g games  ·  esc back  ·  q quit",
    );
}

fn render_header(frame: &mut Frame, area: Rect, subject: &Subject) {
    let content = vec![
        Line::from(Span::styled(
            format!("{} {}", subject.icon, subject.name),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(subject.description.as_str().fg(Color::DarkGray)),
    ];
    let widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

pub fn render_topic(frame: &mut Frame, area: Rect, subject: &Subject, topic: &Topic, scroll: u16) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    let header = vec![
        Line::from(Span::styled(topic.title.as_str(), Style::default().fg(Color::Cyan).bold())),
        Line::from(format!("{} {} • Class {}", subject.icon, subject.name, topic.class_level).fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let mut lines = vec![
        Line::from(topic.description.as_str().fg(Color::White)),
        Line::from(""),
    ];
    lines.extend(topic.notes.lines().map(|line| Line::from(line.fg(Color::Gray))));

    let notes = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(notes, chunks[1]);

    render_controls(frame, chunks[2], "j/k scroll  ·  esc back  ·  q quit");
}
