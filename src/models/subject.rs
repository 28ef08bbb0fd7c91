use serde::{Deserialize, Serialize};

/// Class grouping used to pick the subjects shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassBand {
    #[serde(rename = "6-8")]
    Middle,
    #[serde(rename = "9-12")]
    Senior,
}

impl ClassBand {
    pub fn for_class(class_level: u8) -> Self {
        if class_level <= 8 {
            ClassBand::Middle
        } else {
            ClassBand::Senior
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClassBand::Middle => "6-8",
            ClassBand::Senior => "9-12",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub band: ClassBand,
}

/// A unit of study notes for one subject at one class level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub title: String,
    pub description: String,
    pub notes: String,
    pub subject_id: String,
    pub class_level: u8,
}
