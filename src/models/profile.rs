//! Learner profile and the onboarding wizard that produces it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ClassBand;

/// Class levels offered during onboarding.
pub const CLASS_LEVELS: [u8; 7] = [6, 7, 8, 9, 10, 11, 12];

const INPUT_MAX_LENGTH: usize = 120;

/// Rejected profile fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("age must be greater than zero")]
    InvalidAge,

    #[error("class level {0} is outside 6..=12")]
    InvalidClassLevel(u8),

    #[error("reason must not be empty")]
    EmptyReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub class_level: u8,
    pub reason: String,
    pub completed_onboarding: bool,
}

impl Profile {
    /// Build a completed profile, validating every field.
    pub fn new(
        name: impl Into<String>,
        age: u32,
        class_level: u8,
        reason: impl Into<String>,
    ) -> Result<Self, ProfileError> {
        let name = name.into().trim().to_string();
        let reason = reason.into().trim().to_string();

        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        if age == 0 {
            return Err(ProfileError::InvalidAge);
        }
        if !CLASS_LEVELS.contains(&class_level) {
            return Err(ProfileError::InvalidClassLevel(class_level));
        }
        if reason.is_empty() {
            return Err(ProfileError::EmptyReason);
        }

        Ok(Self {
            name,
            age,
            class_level,
            reason,
            completed_onboarding: true,
        })
    }

    pub fn band(&self) -> ClassBand {
        ClassBand::for_class(self.class_level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    ClassLevel,
    Name,
    Age,
    Reason,
}

impl OnboardingStep {
    pub const COUNT: usize = 4;

    /// 1-based position of the step.
    pub fn number(self) -> usize {
        match self {
            OnboardingStep::ClassLevel => 1,
            OnboardingStep::Name => 2,
            OnboardingStep::Age => 3,
            OnboardingStep::Reason => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            OnboardingStep::ClassLevel => "Select Your Class",
            OnboardingStep::Name => "What's Your Name?",
            OnboardingStep::Age => "How Old Are You?",
            OnboardingStep::Reason => "Why Do You Want to Learn?",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            OnboardingStep::ClassLevel => "Choose your current class level to get personalized content",
            OnboardingStep::Name => "We'd love to know what to call you!",
            OnboardingStep::Age => "This helps us customize your learning experience",
            OnboardingStep::Reason => "Tell us what motivates you to use this app",
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            OnboardingStep::ClassLevel => Some(OnboardingStep::Name),
            OnboardingStep::Name => Some(OnboardingStep::Age),
            OnboardingStep::Age => Some(OnboardingStep::Reason),
            OnboardingStep::Reason => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            OnboardingStep::ClassLevel => None,
            OnboardingStep::Name => Some(OnboardingStep::ClassLevel),
            OnboardingStep::Age => Some(OnboardingStep::Name),
            OnboardingStep::Reason => Some(OnboardingStep::Age),
        }
    }
}

/// Four-step wizard collecting the learner's answers.
#[derive(Debug, Clone)]
pub struct OnboardingForm {
    step: OnboardingStep,
    class_index: Option<usize>,
    name: String,
    age: String,
    reason: String,
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingForm {
    pub fn new() -> Self {
        Self {
            step: OnboardingStep::ClassLevel,
            class_index: None,
            name: String::new(),
            age: String::new(),
            reason: String::new(),
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn progress(&self) -> u16 {
        (self.step.number() * 100 / OnboardingStep::COUNT) as u16
    }

    pub fn class_level(&self) -> Option<u8> {
        self.class_index.map(|i| CLASS_LEVELS[i])
    }

    pub fn select_next_class(&mut self) {
        self.class_index = Some(match self.class_index {
            Some(i) => (i + 1) % CLASS_LEVELS.len(),
            None => 0,
        });
    }

    pub fn select_previous_class(&mut self) {
        self.class_index = Some(match self.class_index {
            Some(i) => (i + CLASS_LEVELS.len() - 1) % CLASS_LEVELS.len(),
            None => CLASS_LEVELS.len() - 1,
        });
    }

    /// Text typed for the current step; empty on the class step.
    pub fn input(&self) -> &str {
        match self.step {
            OnboardingStep::ClassLevel => "",
            OnboardingStep::Name => &self.name,
            OnboardingStep::Age => &self.age,
            OnboardingStep::Reason => &self.reason,
        }
    }

    pub fn push_char(&mut self, c: char) {
        let input = match self.step {
            OnboardingStep::ClassLevel => return,
            OnboardingStep::Name => &mut self.name,
            OnboardingStep::Age if !c.is_ascii_digit() => return,
            OnboardingStep::Age => &mut self.age,
            OnboardingStep::Reason => &mut self.reason,
        };
        if input.chars().count() < INPUT_MAX_LENGTH {
            input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        match self.step {
            OnboardingStep::ClassLevel => {}
            OnboardingStep::Name => {
                self.name.pop();
            }
            OnboardingStep::Age => {
                self.age.pop();
            }
            OnboardingStep::Reason => {
                self.reason.pop();
            }
        }
    }

    pub fn is_step_valid(&self) -> bool {
        match self.step {
            OnboardingStep::ClassLevel => self.class_index.is_some(),
            OnboardingStep::Name => !self.name.trim().is_empty(),
            OnboardingStep::Age => self.parsed_age().is_some_and(|age| age > 0),
            OnboardingStep::Reason => !self.reason.trim().is_empty(),
        }
    }

    /// Advance one step. Returns the finished profile after the last step.
    pub fn next(&mut self) -> Option<Profile> {
        if !self.is_step_valid() {
            return None;
        }

        match self.step.next() {
            Some(step) => {
                self.step = step;
                None
            }
            None => self.build_profile(),
        }
    }

    pub fn back(&mut self) {
        if let Some(step) = self.step.previous() {
            self.step = step;
        }
    }

    fn parsed_age(&self) -> Option<u32> {
        self.age.parse().ok()
    }

    fn build_profile(&self) -> Option<Profile> {
        let class_level = self.class_level()?;
        let age = self.parsed_age()?;
        Profile::new(self.name.as_str(), age, class_level, self.reason.as_str()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut OnboardingForm, text: &str) {
        for c in text.chars() {
            form.push_char(c);
        }
    }

    #[test]
    fn test_profile_validation() {
        assert!(Profile::new("Asha", 14, 9, "exams").is_ok());
        assert_eq!(Profile::new("  ", 14, 9, "exams"), Err(ProfileError::EmptyName));
        assert_eq!(Profile::new("Asha", 0, 9, "exams"), Err(ProfileError::InvalidAge));
        assert_eq!(
            Profile::new("Asha", 14, 5, "exams"),
            Err(ProfileError::InvalidClassLevel(5))
        );
        assert_eq!(
            Profile::new("Asha", 14, 13, "exams"),
            Err(ProfileError::InvalidClassLevel(13))
        );
        assert_eq!(Profile::new("Asha", 14, 9, ""), Err(ProfileError::EmptyReason));
    }

    #[test]
    fn test_profile_band() {
        let junior = Profile::new("A", 12, 8, "fun").unwrap();
        let senior = Profile::new("B", 15, 9, "fun").unwrap();
        assert_eq!(junior.band(), ClassBand::Middle);
        assert_eq!(senior.band(), ClassBand::Senior);
    }

    #[test]
    fn test_profile_serializes_with_camel_case() {
        let profile = Profile::new("Asha", 14, 9, "exams").unwrap();
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"classLevel\":9"));
        assert!(json.contains("\"completedOnboarding\":true"));
    }

    #[test]
    fn test_wizard_blocks_invalid_steps() {
        let mut form = OnboardingForm::new();
        assert!(form.next().is_none());
        assert_eq!(form.step(), OnboardingStep::ClassLevel);

        form.select_next_class();
        assert_eq!(form.class_level(), Some(6));
        form.next();
        assert_eq!(form.step(), OnboardingStep::Name);

        type_text(&mut form, "   ");
        form.next();
        assert_eq!(form.step(), OnboardingStep::Name);
    }

    #[test]
    fn test_wizard_completes_profile() {
        let mut form = OnboardingForm::new();
        form.select_previous_class();
        assert_eq!(form.class_level(), Some(12));
        form.select_previous_class();
        form.select_previous_class();
        form.select_previous_class();
        assert_eq!(form.class_level(), Some(9));
        assert!(form.next().is_none());

        type_text(&mut form, "Ravi");
        assert!(form.next().is_none());

        type_text(&mut form, "1a4");
        assert_eq!(form.input(), "14");
        assert!(form.next().is_none());

        type_text(&mut form, "I want better grades");
        assert_eq!(form.progress(), 100);
        let profile = form.next().expect("last step yields a profile");

        assert_eq!(profile.name, "Ravi");
        assert_eq!(profile.age, 14);
        assert_eq!(profile.class_level, 9);
        assert!(profile.completed_onboarding);
    }

    #[test]
    fn test_wizard_rejects_zero_age() {
        let mut form = OnboardingForm::new();
        form.select_next_class();
        form.next();
        type_text(&mut form, "Mia");
        form.next();
        type_text(&mut form, "0");
        assert!(!form.is_step_valid());
        form.next();
        assert_eq!(form.step(), OnboardingStep::Age);
    }

    #[test]
    fn test_wizard_back_keeps_answers() {
        let mut form = OnboardingForm::new();
        form.back();
        assert_eq!(form.step(), OnboardingStep::ClassLevel);

        form.select_next_class();
        form.next();
        type_text(&mut form, "Zoe");
        form.back();
        assert_eq!(form.step(), OnboardingStep::ClassLevel);
        form.next();
        assert_eq!(form.input(), "Zoe");
    }
}
