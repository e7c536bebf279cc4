use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PayloadError {
    #[error("quiz has no questions")]
    NoQuestions,

    #[error("question {index} has an empty image reference")]
    EmptyImageRef { index: usize },

    #[error("ending image reference is empty")]
    EmptyEndingImage,

    #[error("invalid choice marker: {0}")]
    InvalidChoice(u8),
}

/// One of the two options a question offers.
///
/// Serialized as `1` (A) or `2` (B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Choice {
    A,
    B,
}

impl Choice {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl TryFrom<u8> for Choice {
    type Error = PayloadError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::A),
            2 => Ok(Self::B),
            other => Err(PayloadError::InvalidChoice(other)),
        }
    }
}

impl From<Choice> for u8 {
    fn from(choice: Choice) -> Self {
        match choice {
            Choice::A => 1,
            Choice::B => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "img1")]
    image_a: String,
    #[serde(rename = "img2")]
    image_b: String,
    #[serde(rename = "correct")]
    correct: Choice,
}

impl Question {
    #[must_use]
    pub fn new(image_a: impl Into<String>, image_b: impl Into<String>, correct: Choice) -> Self {
        Self {
            image_a: image_a.into(),
            image_b: image_b.into(),
            correct,
        }
    }

    #[must_use]
    pub fn image_a(&self) -> &str {
        &self.image_a
    }

    #[must_use]
    pub fn image_b(&self) -> &str {
        &self.image_b
    }

    #[must_use]
    pub fn image(&self, choice: Choice) -> &str {
        match choice {
            Choice::A => &self.image_a,
            Choice::B => &self.image_b,
        }
    }

    #[must_use]
    pub fn correct(&self) -> Choice {
        self.correct
    }

    #[must_use]
    pub fn is_correct(&self, selected: Choice) -> bool {
        selected == self.correct
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PayloadWire {
    questions: Vec<Question>,
    #[serde(rename = "endingPhoto", alias = "groupPhoto")]
    ending_image: String,
}

/// Quiz content fetched once per play session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PayloadWire", into = "PayloadWire")]
pub struct QuizPayload {
    questions: Vec<Question>,
    ending_image: String,
}

impl QuizPayload {
    /// Build a validated payload.
    ///
    /// # Errors
    ///
    /// Returns `PayloadError` if there are no questions or any image reference is blank.
    pub fn new(
        questions: Vec<Question>,
        ending_image: impl Into<String>,
    ) -> Result<Self, PayloadError> {
        let ending_image = ending_image.into();
        if questions.is_empty() {
            return Err(PayloadError::NoQuestions);
        }
        for (index, question) in questions.iter().enumerate() {
            if question.image_a.trim().is_empty() || question.image_b.trim().is_empty() {
                return Err(PayloadError::EmptyImageRef { index });
            }
        }
        if ending_image.trim().is_empty() {
            return Err(PayloadError::EmptyEndingImage);
        }

        Ok(Self {
            questions,
            ending_image,
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn ending_image(&self) -> &str {
        &self.ending_image
    }
}

impl TryFrom<PayloadWire> for QuizPayload {
    type Error = PayloadError;

    fn try_from(wire: PayloadWire) -> Result<Self, Self::Error> {
        Self::new(wire.questions, wire.ending_image)
    }
}

impl From<QuizPayload> for PayloadWire {
    fn from(payload: QuizPayload) -> Self {
        Self {
            questions: payload.questions,
            ending_image: payload.ending_image,
        }
    }
}
