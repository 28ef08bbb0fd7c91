use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::Config;
use crate::data::Catalog;
use crate::games::GameSession;
use crate::models::{Game, OnboardingForm, OnboardingStep, Profile, Subject, Topic};
use crate::quiz::{QuizPhase, QuizSession};
use crate::selector::SessionSelector;

/// What the learner is looking at. Child sessions live inside their screen and
/// are dropped when the learner navigates away.
pub enum Screen {
    Onboarding(OnboardingForm),
    Dashboard {
        cursor: usize,
    },
    Subject {
        subject: Subject,
        cursor: usize,
    },
    Topic {
        subject: Subject,
        topic: Topic,
        index: usize,
        scroll: u16,
    },
    Quiz {
        subject: Subject,
        session: QuizSession,
    },
    Games {
        subject: Subject,
        cursor: usize,
    },
    Game {
        subject: Subject,
        game: Game,
        index: usize,
        session: GameSession,
    },
}

pub struct App {
    catalog: Catalog,
    config: Config,
    rng: StdRng,
    profile: Option<Profile>,
    screen: Screen,
    pub should_quit: bool,
}

fn selector<'a>(catalog: &'a Catalog, config: &Config) -> SessionSelector<'a> {
    SessionSelector::new(catalog).with_quiz_length(config.quiz_length)
}

fn class_level(profile: &Option<Profile>) -> u8 {
    profile.as_ref().map_or(0, |p| p.class_level)
}

fn cycle(cursor: usize, len: usize, forward: bool) -> usize {
    match (len, forward) {
        (0, _) => 0,
        (_, true) => (cursor + 1) % len,
        (_, false) => (cursor + len - 1) % len,
    }
}

impl App {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            catalog,
            config,
            rng,
            profile: None,
            screen: Screen::Onboarding(OnboardingForm::new()),
            should_quit: false,
        }
    }

    /// Start on the dashboard with an existing profile.
    pub fn with_profile(catalog: Catalog, config: Config, profile: Profile) -> Self {
        let mut app = Self::new(catalog, config);
        app.complete_onboarding(profile);
        app
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn subjects(&self) -> Vec<&Subject> {
        selector(&self.catalog, &self.config).select_subjects(class_level(&self.profile))
    }

    pub fn topics(&self, subject_id: &str) -> Vec<&Topic> {
        selector(&self.catalog, &self.config).select_topics(subject_id, class_level(&self.profile))
    }

    pub fn games(&self, subject_id: &str) -> Vec<&Game> {
        selector(&self.catalog, &self.config).select_games(subject_id)
    }

    /// Whether typed characters go into a text field on this screen.
    pub fn accepts_text(&self) -> bool {
        match &self.screen {
            Screen::Onboarding(form) => form.step() != OnboardingStep::ClassLevel,
            Screen::Game { session, .. } => {
                matches!(session, GameSession::Pattern(_) | GameSession::Scramble(_))
            }
            _ => false,
        }
    }

    fn complete_onboarding(&mut self, profile: Profile) {
        info!(
            class_level = profile.class_level,
            band = profile.band().label(),
            "onboarding completed"
        );
        self.profile = Some(profile);
        self.screen = Screen::Dashboard { cursor: 0 };
    }

    pub fn move_up(&mut self) {
        self.move_vertical(false);
    }

    pub fn move_down(&mut self) {
        self.move_vertical(true);
    }

    fn move_vertical(&mut self, forward: bool) {
        let selector = selector(&self.catalog, &self.config);
        let class_level = class_level(&self.profile);

        match &mut self.screen {
            Screen::Onboarding(form) => {
                if form.step() == OnboardingStep::ClassLevel {
                    if forward {
                        form.select_next_class();
                    } else {
                        form.select_previous_class();
                    }
                }
            }
            Screen::Dashboard { cursor } => {
                let len = selector.select_subjects(class_level).len();
                *cursor = cycle(*cursor, len, forward);
            }
            Screen::Subject { subject, cursor } => {
                let len = selector.select_topics(&subject.id, class_level).len();
                *cursor = cycle(*cursor, len, forward);
            }
            Screen::Topic { scroll, .. } => {
                *scroll = if forward {
                    scroll.saturating_add(1)
                } else {
                    scroll.saturating_sub(1)
                };
            }
            Screen::Quiz { session, .. } => {
                if forward {
                    session.select_next_option();
                } else {
                    session.select_previous_option();
                }
            }
            Screen::Games { subject, cursor } => {
                let len = selector.select_games(&subject.id).len();
                *cursor = cycle(*cursor, len, forward);
            }
            Screen::Game { session: GameSession::Memory(game), .. } => {
                game.move_cursor(0, if forward { 1 } else { -1 });
            }
            Screen::Game { .. } => {}
        }
    }

    pub fn move_left(&mut self) {
        if let Screen::Game { session: GameSession::Memory(game), .. } = &mut self.screen {
            game.move_cursor(-1, 0);
        }
    }

    pub fn move_right(&mut self) {
        if let Screen::Game { session: GameSession::Memory(game), .. } = &mut self.screen {
            game.move_cursor(1, 0);
        }
    }

    pub fn type_char(&mut self, c: char) {
        match &mut self.screen {
            Screen::Onboarding(form) => form.push_char(c),
            Screen::Game { session: GameSession::Pattern(game), .. } => game.push_char(c),
            Screen::Game { session: GameSession::Scramble(game), .. } => game.push_char(c),
            _ => {}
        }
    }

    pub fn delete_char(&mut self) {
        match &mut self.screen {
            Screen::Onboarding(form) => form.pop_char(),
            Screen::Game { session: GameSession::Pattern(game), .. } => game.pop_char(),
            Screen::Game { session: GameSession::Scramble(game), .. } => game.pop_char(),
            _ => {}
        }
    }

    /// The primary action of the current screen (Enter).
    pub fn confirm(&mut self, now: Instant) {
        let selector = selector(&self.catalog, &self.config);
        let class_level = class_level(&self.profile);

        let mut onboarded = None;

        let next = match &mut self.screen {
            Screen::Onboarding(form) => {
                onboarded = form.next();
                None
            }
            Screen::Dashboard { cursor } => selector
                .select_subjects(class_level)
                .get(*cursor)
                .map(|subject| {
                    debug!(subject = %subject.id, "subject opened");
                    Screen::Subject {
                        subject: (*subject).clone(),
                        cursor: 0,
                    }
                }),
            Screen::Subject { subject, cursor } => selector
                .select_topics(&subject.id, class_level)
                .get(*cursor)
                .map(|topic| Screen::Topic {
                    subject: subject.clone(),
                    topic: (*topic).clone(),
                    index: *cursor,
                    scroll: 0,
                }),
            Screen::Topic { .. } => None,
            Screen::Quiz { session, .. } => {
                match session.phase() {
                    QuizPhase::Answering(_) => {
                        session.submit_selected();
                    }
                    QuizPhase::Reviewing(_) => session.next(),
                    QuizPhase::Empty | QuizPhase::Completed => {}
                }
                None
            }
            Screen::Games { subject, cursor } => selector
                .select_games(&subject.id)
                .get(*cursor)
                .map(|game| {
                    info!(game = %game.id, kind = game.kind.label(), "game opened");
                    Screen::Game {
                        subject: subject.clone(),
                        game: (*game).clone(),
                        index: *cursor,
                        session: GameSession::for_kind(
                            game.kind,
                            self.config.reveal_delay(),
                            &mut self.rng,
                        ),
                    }
                }),
            Screen::Game { session, .. } => {
                match session {
                    GameSession::Pattern(game) => {
                        if game.is_revealed() {
                            game.next(&mut self.rng);
                        } else {
                            game.submit_input();
                        }
                    }
                    GameSession::Scramble(game) => {
                        if game.is_revealed() {
                            game.next(&mut self.rng);
                        } else {
                            game.submit_input();
                        }
                    }
                    GameSession::Memory(game) => {
                        game.flip_at_cursor(now);
                    }
                }
                None
            }
        };

        if let Some(profile) = onboarded {
            self.complete_onboarding(profile);
        } else if let Some(screen) = next {
            self.screen = screen;
        }
    }

    /// Open the quiz for the subject being browsed.
    pub fn open_quiz(&mut self) {
        if let Screen::Subject { subject, .. } = &self.screen {
            let questions = selector(&self.catalog, &self.config)
                .select_questions(&subject.id, class_level(&self.profile));
            let session = QuizSession::new(questions);
            self.screen = Screen::Quiz {
                subject: subject.clone(),
                session,
            };
        }
    }

    /// Open the game list for the subject being browsed.
    pub fn open_games(&mut self) {
        if let Screen::Subject { subject, .. } = &self.screen {
            self.screen = Screen::Games {
                subject: subject.clone(),
                cursor: 0,
            };
        }
    }

    /// Start the current quiz or game over. A quiz restarts from any phase.
    pub fn restart(&mut self) {
        let selector = selector(&self.catalog, &self.config);
        let class_level = class_level(&self.profile);

        match &mut self.screen {
            Screen::Quiz { subject, session } => {
                session.restart(selector.select_questions(&subject.id, class_level));
            }
            Screen::Game { session: GameSession::Memory(game), .. } => {
                game.new_round(&mut self.rng);
            }
            _ => {}
        }
    }

    pub fn toggle_hint(&mut self) {
        if let Screen::Game { session: GameSession::Scramble(game), .. } = &mut self.screen {
            game.toggle_hint();
        }
    }

    /// Leave the current screen for its parent.
    pub fn back(&mut self) {
        let next = match &mut self.screen {
            Screen::Onboarding(form) => {
                form.back();
                None
            }
            Screen::Dashboard { .. } => None,
            Screen::Subject { .. } => Some(Screen::Dashboard { cursor: 0 }),
            Screen::Topic { subject, index, .. } => Some(Screen::Subject {
                subject: subject.clone(),
                cursor: *index,
            }),
            Screen::Quiz { subject, .. } | Screen::Games { subject, .. } => Some(Screen::Subject {
                subject: subject.clone(),
                cursor: 0,
            }),
            Screen::Game { subject, index, .. } => Some(Screen::Games {
                subject: subject.clone(),
                cursor: *index,
            }),
        };

        if let Some(screen) = next {
            self.screen = screen;
        }
    }

    /// Let time-based state catch up, such as face-up memory cards.
    pub fn tick(&mut self, now: Instant) {
        if let Screen::Game { session, .. } = &mut self.screen {
            session.tick(now);
        }
    }
}
