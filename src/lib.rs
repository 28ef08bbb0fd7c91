//! # class-quest
//!
//! A terminal learning companion for students in classes 6 to 12: study
//! notes per subject, short multiple-choice quizzes and three mini-games.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use class_quest::{config::Config, AppError, ClassQuest};
//!
//! fn main() -> Result<(), AppError> {
//!     // Embedded catalog unless the config names a file
//!     let quest = ClassQuest::from_config(Config::default())?;
//!
//!     // Take over the terminal until the learner quits
//!     quest.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod config;
mod data;
mod error;
pub mod games;
mod models;
pub mod quiz;
pub mod selector;
pub mod terminal;
mod ui;

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::info;

pub use app::{App, Screen};
pub use config::Config;
pub use data::{load_catalog_from_json, Catalog, LoadError};
pub use error::AppError;
pub use models::{
    ClassBand, Difficulty, Game, GameKind, OnboardingForm, OnboardingStep, Profile, ProfileError,
    Question, Subject, Topic, CLASS_LEVELS, OPTION_COUNT,
};

/// How long the event loop waits for input before ticking.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The application, ready to run in the terminal.
pub struct ClassQuest {
    app: App,
}

impl ClassQuest {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        Self {
            app: App::new(catalog, config),
        }
    }

    /// Load the catalog named by the config, or the embedded one.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let catalog = match &config.catalog {
            Some(path) => load_catalog_from_json(path)?,
            None => Catalog::embedded()?,
        };
        Ok(Self::new(catalog, config))
    }

    /// Run in the terminal until the learner quits.
    pub fn run(mut self) -> Result<(), AppError> {
        info!("starting terminal session");
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        info!("terminal session ended");
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), AppError> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key, Instant::now());
                }
            }
        }

        app.tick(Instant::now());
    }

    Ok(())
}

/// Map a key press onto an app action.
fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.accepts_text() {
        handle_text_key(app, key.code, now);
    } else {
        handle_navigation_key(app, key.code, now);
    }
}

fn handle_text_key(app: &mut App, key: KeyCode, now: Instant) {
    match key {
        KeyCode::Enter => app.confirm(now),
        KeyCode::Esc => app.back(),
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Tab => app.toggle_hint(),
        KeyCode::Char(c) => app.type_char(c),
        _ => {}
    }
}

fn handle_navigation_key(app: &mut App, key: KeyCode, now: Instant) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Left | KeyCode::Char('h') => app.move_left(),
        KeyCode::Right | KeyCode::Char('l') => app.move_right(),
        KeyCode::Enter | KeyCode::Char(' ') => app.confirm(now),
        KeyCode::Char('t') | KeyCode::Char('T') => app.open_quiz(),
        KeyCode::Char('g') | KeyCode::Char('G') => app.open_games(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        KeyCode::Esc | KeyCode::Backspace => app.back(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE), Instant::now());
    }

    fn fresh_app() -> App {
        App::new(Catalog::embedded().unwrap(), Config::default())
    }

    #[test]
    fn test_q_quits_outside_text_fields() {
        let mut app = fresh_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_is_typed_into_name() {
        let mut app = fresh_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        match app.screen() {
            Screen::Onboarding(form) => assert_eq!(form.input(), "q"),
            _ => panic!("expected onboarding"),
        }
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut app = fresh_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Instant::now(),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_keys_open_quiz_and_games() {
        let profile = Profile::new("Ada", 15, 9, "curious").unwrap();
        let mut app = App::with_profile(Catalog::embedded().unwrap(), Config::default(), profile);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('t'));
        assert!(matches!(app.screen(), Screen::Quiz { .. }));

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('g'));
        assert!(matches!(app.screen(), Screen::Games { .. }));
    }
}
