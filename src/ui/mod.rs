mod dashboard;
mod games;
mod onboarding;
mod quiz;
mod result;
mod subject;

use ratatui::{prelude::*, widgets::{Block, Paragraph}};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen() {
        Screen::Onboarding(form) => onboarding::render(frame, area, form),
        Screen::Dashboard { cursor } => dashboard::render(frame, area, app, *cursor),
        Screen::Subject { subject, cursor } => subject::render(frame, area, app, subject, *cursor),
        Screen::Topic { subject, topic, scroll, .. } => {
            subject::render_topic(frame, area, subject, topic, *scroll)
        }
        Screen::Quiz { subject, session } => {
            if session.is_completed() {
                result::render(frame, area, subject, session);
            } else {
                quiz::render(frame, area, app, subject, session);
            }
        }
        Screen::Games { subject, cursor } => games::render_list(frame, area, app, subject, *cursor),
        Screen::Game { game, session, .. } => games::render_game(frame, area, game, session),
    }
}

/// Bottom line listing the keys of the current screen.
fn render_controls(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

/// Centered placeholder for content that does not exist yet.
fn render_coming_soon(frame: &mut Frame, area: Rect, title: &str, detail: String) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(title.to_string(), Style::default().fg(Color::Yellow).bold())),
        Line::from(""),
        Line::from(detail.fg(Color::DarkGray)),
    ];
    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
