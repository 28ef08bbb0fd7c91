use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::games::{GameSession, MemoryGame, PatternGame, RoundStats, ScrambleGame, GRID_SIDE};
use crate::models::{Game, Subject};

use super::{render_coming_soon, render_controls};

const CARD_WIDTH: u16 = 8;
const CARD_HEIGHT: u16 = 3;

pub fn render_list(frame: &mut Frame, area: Rect, app: &App, subject: &Subject, cursor: usize) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    let title = Paragraph::new(format!("{} Games", subject.name))
        .fg(Color::Cyan)
        .bold();
    frame.render_widget(title, chunks[0]);

    let games = app.games(&subject.id);
    if games.is_empty() {
        render_coming_soon(
            frame,
            chunks[1],
            "Games coming soon!",
            format!("No games for {} yet.", subject.name),
        );
    } else {
        let mut lines = Vec::new();
        for (index, game) in games.iter().enumerate() {
            let is_selected = index == cursor;
            let style = if is_selected {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if is_selected { ">" } else { " " };

            lines.push(Line::from(vec![
                Span::styled(format!(" {} {}", marker, game.title), style),
                Span::styled(
                    format!("  [{} · {}]", game.kind.label(), game.difficulty.label()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("   {}", game.description),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(""));
        }
        frame.render_widget(Paragraph::new(lines), chunks[1]);
    }

    render_controls(frame, chunks[2], "j/k navigate  ·  enter play  ·  esc back  ·  q quit");
}

pub fn render_game(frame: &mut Frame, area: Rect, game: &Game, session: &GameSession) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    let header = vec![
        Line::from(Span::styled(session.title(), Style::default().fg(Color::Cyan).bold())),
        Line::from(game.title.as_str().fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let controls = match session {
        GameSession::Pattern(pattern) => {
            render_pattern(frame, chunks[1], pattern);
            if pattern.is_revealed() {
                "enter next pattern  ·  esc back  ·  ctrl-c quit"
            } else {
                "type a number  ·  enter check  ·  esc back  ·  ctrl-c quit"
            }
        }
        GameSession::Memory(memory) => {
            render_memory(frame, chunks[1], memory);
            "arrows/hjkl move  ·  enter flip  ·  r new game  ·  esc back  ·  q quit"
        }
        GameSession::Scramble(scramble) => {
            render_scramble(frame, chunks[1], scramble);
            if scramble.is_revealed() {
                "enter next word  ·  tab hint  ·  esc back  ·  ctrl-c quit"
            } else {
                "type the word  ·  enter check  ·  tab hint  ·  esc back  ·  ctrl-c quit"
            }
        }
    };
    render_controls(frame, chunks[2], controls);
}

fn stats_line(stats: RoundStats) -> Line<'static> {
    Line::from(
        format!(
            "Score: {}  ·  Attempts: {}  ·  Accuracy: {}%",
            stats.score,
            stats.attempts,
            stats.accuracy()
        )
        .fg(Color::DarkGray),
    )
}

fn input_box(input: &str, active: bool) -> Paragraph<'_> {
    let border = if active { Color::Cyan } else { Color::DarkGray };
    let text = if active {
        format!("{}_", input)
    } else {
        input.to_string()
    };
    Paragraph::new(text).block(Block::default().borders(Borders::ALL).border_style(border))
}

fn verdict_line(correct: bool, wrong: String) -> Line<'static> {
    if correct {
        Line::from(Span::styled("Correct!", Style::default().fg(Color::Green).bold()))
    } else {
        Line::from(Span::styled(wrong, Style::default().fg(Color::Red).bold()))
    }
}

fn render_pattern(frame: &mut Frame, area: Rect, game: &PatternGame) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .split(area);

    frame.render_widget(Paragraph::new(stats_line(game.stats())), chunks[0]);

    let Some(pattern) = game.current() else {
        return;
    };
    let sequence: Vec<String> = pattern.sequence.iter().map(|n| n.to_string()).collect();
    let widget = Paragraph::new(format!("{}, ?", sequence.join(", ")))
        .alignment(Alignment::Center)
        .fg(Color::Yellow)
        .bold();
    frame.render_widget(widget, chunks[1]);

    frame.render_widget(input_box(game.input(), !game.is_revealed()), chunks[2]);

    if let Some(correct) = game.outcome() {
        let content = vec![
            verdict_line(correct, format!("Not quite. The answer is {}.", pattern.answer)),
            Line::from(format!("Rule: {}", pattern.rule).fg(Color::Gray)),
        ];
        frame.render_widget(Paragraph::new(content).wrap(Wrap { trim: true }), chunks[3]);
    }
}

fn render_memory(frame: &mut Frame, area: Rect, game: &MemoryGame) {
    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).split(area);

    let status = if game.is_completed() {
        Line::from(Span::styled(
            format!("All pairs found in {} moves!", game.moves()),
            Style::default().fg(Color::Green).bold(),
        ))
    } else {
        Line::from(
            format!("Moves: {}  ·  Matches: {}/{}", game.moves(), game.matches(), game.cards().len() / 2)
                .fg(Color::DarkGray),
        )
    };
    frame.render_widget(Paragraph::new(status), chunks[0]);

    for card in game.cards() {
        let column = (card.position % GRID_SIDE) as u16;
        let row = (card.position / GRID_SIDE) as u16;
        let cell = Rect {
            x: chunks[1].x + column * (CARD_WIDTH + 1),
            y: chunks[1].y + row * CARD_HEIGHT,
            width: CARD_WIDTH,
            height: CARD_HEIGHT,
        };
        if cell.bottom() > chunks[1].bottom() || cell.right() > chunks[1].right() {
            continue;
        }

        let (face, color) = if card.matched {
            (card.symbol, Color::Green)
        } else if card.face_up {
            (card.symbol, Color::Yellow)
        } else {
            ("?", Color::DarkGray)
        };
        let border = if card.position == game.cursor() {
            Color::Cyan
        } else {
            color
        };
        let widget = Paragraph::new(face)
            .alignment(Alignment::Center)
            .fg(color)
            .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(widget, cell);
    }
}

fn render_scramble(frame: &mut Frame, area: Rect, game: &ScrambleGame) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .split(area);

    frame.render_widget(Paragraph::new(stats_line(game.stats())), chunks[0]);

    let Some(entry) = game.current() else {
        return;
    };
    let letters: Vec<String> = game.scrambled().chars().map(|c| c.to_string()).collect();
    let content = vec![
        Line::from(Span::styled(letters.join(" "), Style::default().fg(Color::Yellow).bold())),
        Line::from(format!("Category: {}", entry.category).fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), chunks[1]);

    frame.render_widget(input_box(game.input(), !game.is_revealed()), chunks[2]);

    let mut lines = Vec::new();
    if let Some(correct) = game.outcome() {
        lines.push(verdict_line(correct, format!("Not quite. The word is {}.", entry.word)));
    }
    if game.hint_visible() {
        lines.push(Line::from(format!("Hint: {}", entry.hint).fg(Color::Gray)));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[3]);
}
