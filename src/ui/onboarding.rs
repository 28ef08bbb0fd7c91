use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use crate::models::{OnboardingForm, OnboardingStep, CLASS_LEVELS};

use super::render_controls;

pub fn render(frame: &mut Frame, area: Rect, form: &OnboardingForm) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    let title = Paragraph::new("Let's Get Started!")
        .alignment(Alignment::Center)
        .fg(Color::Cyan)
        .bold();
    frame.render_widget(title, chunks[0]);

    let step = form.step();
    let progress = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .label(format!("Step {} of {}", step.number(), OnboardingStep::COUNT))
        .percent(form.progress());
    frame.render_widget(progress, chunks[1]);

    let heading = vec![
        Line::from(Span::styled(step.title(), Style::default().fg(Color::White).bold())),
        Line::from(step.prompt().fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(heading), chunks[3]);

    match step {
        OnboardingStep::ClassLevel => render_class_choice(frame, chunks[4], form),
        _ => render_text_input(frame, chunks[4], form),
    }

    let controls = if step == OnboardingStep::ClassLevel {
        "j/k choose  ·  enter next  ·  q quit"
    } else {
        "type to answer  ·  enter next  ·  esc back  ·  ctrl-c quit"
    };
    render_controls(frame, chunks[5], controls);
}

fn render_class_choice(frame: &mut Frame, area: Rect, form: &OnboardingForm) {
    let selected = form.class_level();
    let lines: Vec<Line> = CLASS_LEVELS
        .iter()
        .map(|&level| {
            let is_selected = selected == Some(level);
            let style = if is_selected {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if is_selected { "(•)" } else { "( )" };
            Line::from(Span::styled(format!(" {} Class {}", marker, level), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_text_input(frame: &mut Frame, area: Rect, form: &OnboardingForm) {
    let border = if form.is_step_valid() {
        Color::Green
    } else {
        Color::DarkGray
    };
    let widget = Paragraph::new(format!("{}_", form.input()))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(widget, area);
}
