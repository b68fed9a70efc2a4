use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// One of the three questions asked before a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Question {
    Q1,
    Q2,
    Q3,
}

impl Question {
    /// All questions, in the order they are asked.
    pub const ALL: [Question; 3] = [Question::Q1, Question::Q2, Question::Q3];

    /// The prompt shown to the user for this question.
    pub fn prompt(&self) -> &'static str {
        match self {
            Question::Q1 => "What's your favorite movie and why?",
            Question::Q2 => "Are you in the mood for something new or a classic?",
            Question::Q3 => "Do you wanna have fun or do you want something serious?",
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Question::Q1 => write!(f, "q1"),
            Question::Q2 => write!(f, "q2"),
            Question::Q3 => write!(f, "q3"),
        }
    }
}

impl FromStr for Question {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "q1" => Ok(Question::Q1),
            "q2" => Ok(Question::Q2),
            "q3" => Ok(Question::Q3),
            other => Err(format!("invalid question: '{other}'")),
        }
    }
}

/// The user's free-text answers to the three questions.
///
/// Serializes to the wire body of a recommendation request:
/// `{"q1": "...", "q2": "...", "q3": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    pub q1: String,
    pub q2: String,
    pub q3: String,
}

impl AnswerSet {
    /// An empty answer set, as at the start of a session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one answer in place.
    pub fn update(&mut self, field: Question, value: impl Into<String>) -> &mut Self {
        *self.slot_mut(field) = value.into();
        self
    }

    /// Builder form of [`AnswerSet::update`].
    pub fn with(mut self, field: Question, value: impl Into<String>) -> Self {
        self.update(field, value);
        self
    }

    pub fn get(&self, field: Question) -> &str {
        match field {
            Question::Q1 => &self.q1,
            Question::Q2 => &self.q2,
            Question::Q3 => &self.q3,
        }
    }

    /// True iff every answer contains something other than whitespace.
    pub fn is_ready(&self) -> bool {
        Question::ALL
            .iter()
            .all(|q| !self.get(*q).trim().is_empty())
    }

    /// Questions that still lack an answer, in asking order.
    pub fn missing(&self) -> Vec<Question> {
        Question::ALL
            .into_iter()
            .filter(|q| self.get(*q).trim().is_empty())
            .collect()
    }

    fn slot_mut(&mut self, field: Question) -> &mut String {
        match field {
            Question::Q1 => &mut self.q1,
            Question::Q2 => &mut self.q2,
            Question::Q3 => &mut self.q3,
        }
    }
}
