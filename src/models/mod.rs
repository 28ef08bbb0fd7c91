mod game;
mod profile;
mod question;
mod subject;

pub use game::{Game, GameKind};
pub use profile::{OnboardingForm, OnboardingStep, Profile, ProfileError, CLASS_LEVELS};
pub use question::{Difficulty, Question, OPTION_COUNT};
pub use subject::{ClassBand, Subject, Topic};
