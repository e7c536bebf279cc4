use thiserror::Error;

use crate::model::{Choice, Question, QuizPayload};

/// Named state of a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Landing,
    PasswordPrompt,
    Loading,
    Playing,
    Finished,
}

impl Phase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::PasswordPrompt => "password_prompt",
            Self::Loading => "loading",
            Self::Playing => "playing",
            Self::Finished => "finished",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("expected phase {}, session is in {}", expected.as_str(), actual.as_str())]
    InvalidPhase { expected: Phase, actual: Phase },
}

/// Proof that a fetch was started for a given submission.
///
/// A completion is only applied when its ticket still matches the session's
/// generation; anything older is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// What happened to a fetch completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadResolution {
    Playing,
    RolledBack,
    /// The session moved on while the fetch was in flight.
    Discarded,
}

/// What an answer did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Next { index: usize },
    Finished(Outcome),
}

/// Session state for one player.
///
/// Fields only change through the transition methods below.
#[derive(Debug, Clone)]
pub struct SessionState {
    phase: Phase,
    current_index: usize,
    auth_token: String,
    payload: Option<QuizPayload>,
    outcome: Option<Outcome>,
    prompt_error: bool,
    generation: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Landing,
            current_index: 0,
            auth_token: String::new(),
            payload: None,
            outcome: None,
            prompt_error: false,
            generation: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    #[must_use]
    pub fn payload(&self) -> Option<&QuizPayload> {
        self.payload.as_ref()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// True after a failed fetch until the prompt is reopened or resubmitted.
    #[must_use]
    pub fn prompt_error(&self) -> bool {
        self.prompt_error
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The question on screen, only while playing.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.phase != Phase::Playing {
            return None;
        }
        self.payload.as_ref()?.question(self.current_index)
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionError::InvalidPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    /// `Landing -> PasswordPrompt`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidPhase` outside `Landing`.
    pub fn begin(&mut self) -> Result<(), SessionError> {
        self.expect_phase(Phase::Landing)?;
        self.prompt_error = false;
        self.phase = Phase::PasswordPrompt;
        Ok(())
    }

    /// `PasswordPrompt -> Loading`, storing the token.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidPhase` outside `PasswordPrompt`, including a
    /// second submission while a fetch is already running.
    pub fn submit_token(&mut self, token: impl Into<String>) -> Result<LoadTicket, SessionError> {
        self.expect_phase(Phase::PasswordPrompt)?;
        self.auth_token = token.into();
        self.prompt_error = false;
        self.generation += 1;
        self.phase = Phase::Loading;
        Ok(LoadTicket {
            generation: self.generation,
        })
    }

    /// Whether `ticket` belongs to the fetch this session is waiting on.
    #[must_use]
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.phase == Phase::Loading && ticket.generation == self.generation
    }

    /// `Loading -> Playing` at question 0.
    ///
    /// Stale tickets are discarded without touching the session.
    pub fn load_succeeded(&mut self, ticket: LoadTicket, payload: QuizPayload) -> LoadResolution {
        if !self.is_current(ticket) {
            return LoadResolution::Discarded;
        }
        self.payload = Some(payload);
        self.current_index = 0;
        self.outcome = None;
        self.phase = Phase::Playing;
        LoadResolution::Playing
    }

    /// `Loading -> PasswordPrompt`; the token is kept, the payload stays absent.
    pub fn load_failed(&mut self, ticket: LoadTicket) -> LoadResolution {
        if !self.is_current(ticket) {
            return LoadResolution::Discarded;
        }
        self.payload = None;
        self.prompt_error = true;
        self.phase = Phase::PasswordPrompt;
        LoadResolution::RolledBack
    }

    /// Answer the current question.
    ///
    /// A correct answer advances; answering the last question correctly wins.
    /// The first wrong answer loses and freezes the index.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidPhase` outside `Playing`.
    pub fn answer(&mut self, selected: Choice) -> Result<AnswerOutcome, SessionError> {
        self.expect_phase(Phase::Playing)?;
        let (correct, total) = match self.payload.as_ref() {
            Some(payload) => match payload.question(self.current_index) {
                Some(question) => (question.is_correct(selected), payload.len()),
                None => return Err(self.finish_invalid()),
            },
            None => return Err(self.finish_invalid()),
        };

        if !correct {
            return Ok(self.finish(Outcome::Lost));
        }

        self.current_index += 1;
        if self.current_index == total {
            return Ok(self.finish(Outcome::Won));
        }
        Ok(AnswerOutcome::Next {
            index: self.current_index,
        })
    }

    fn finish(&mut self, outcome: Outcome) -> AnswerOutcome {
        self.outcome = Some(outcome);
        self.phase = Phase::Finished;
        AnswerOutcome::Finished(outcome)
    }

    // Playing always holds a payload with current_index < len; reaching this
    // means the state was corrupted, so report it as a phase error.
    fn finish_invalid(&self) -> SessionError {
        SessionError::InvalidPhase {
            expected: Phase::Playing,
            actual: self.phase,
        }
    }

    /// `Finished -> Landing`. Clears payload, index and outcome; keeps the token.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidPhase` outside `Finished`.
    pub fn play_again(&mut self) -> Result<(), SessionError> {
        self.expect_phase(Phase::Finished)?;
        self.payload = None;
        self.current_index = 0;
        self.outcome = None;
        self.prompt_error = false;
        self.generation += 1;
        self.phase = Phase::Landing;
        Ok(())
    }
}
