use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;

use super::render_controls;

pub fn render(frame: &mut Frame, area: Rect, app: &App, cursor: usize) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(4),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    let (greeting, badge) = match app.profile() {
        Some(profile) => (
            format!("Welcome back, {}!", profile.name),
            format!("Class {} • Age {}", profile.class_level, profile.age),
        ),
        None => ("Welcome!".to_string(), String::new()),
    };
    let header = vec![
        Line::from(Span::styled(greeting, Style::default().fg(Color::Cyan).bold())),
        Line::from("Choose Your Subject".fg(Color::White)),
        Line::from(badge.fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let mut lines = Vec::new();
    for (index, subject) in app.subjects().iter().enumerate() {
        let is_selected = index == cursor;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} {} ", marker, subject.icon), style),
            Span::styled(subject.name.as_str(), style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     {}", subject.description),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    if let Some(profile) = app.profile() {
        render_goal(frame, chunks[2], &profile.reason);
    }

    render_controls(frame, chunks[3], "j/k navigate  ·  enter open  ·  q quit");
}

/// The reason the learner gave during onboarding.
fn render_goal(frame: &mut Frame, area: Rect, reason: &str) {
    let content = vec![
        Line::from(Span::styled("Your Learning Goal", Style::default().fg(Color::Cyan).bold())),
        Line::from(Span::styled(
            format!("\"{}\"", reason),
            Style::default().fg(Color::Gray).italic(),
        )),
    ];
    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}
