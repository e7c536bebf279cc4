use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use mate_core::model::{
    AnswerOutcome, Choice, GameConfig, LoadResolution, LoadTicket, Outcome, Phase, SessionError,
    SessionState,
};

use crate::messages::{IndexSource, ThreadRngSource, pick_line};
use crate::provider::QuizDataProvider;

/// Shown at the password prompt after any failed fetch.
pub const FETCH_FAILED_MESSAGE: &str = "Error loading game data. The password might be wrong!";

/// What a token submission did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A fetch was already running; the submission was dropped.
    Ignored,
    Loaded(LoadResolution),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishedScreen {
    Won {
        message: String,
        ending_image: String,
    },
    Lost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Landing,
    PasswordPrompt {
        error: Option<&'static str>,
    },
    Loading {
        message: String,
    },
    Playing {
        number: usize,
        total: usize,
        image_a: String,
        image_b: String,
    },
    Finished(FinishedScreen),
}

/// Everything the renderer needs for the current phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenSnapshot {
    pub title: String,
    pub screen: Screen,
}

struct FlowState {
    session: SessionState,
    celebration: Option<String>,
    loading_text: Option<String>,
    source: Box<dyn IndexSource>,
}

/// Drives one player's session through landing, prompt, loading, playing and
/// finished.
///
/// Clones share the same session. The state lock is never held across the
/// fetch, so a second submission while loading sees `Phase::Loading` and is
/// ignored, and a reset during the fetch makes its result stale.
#[derive(Clone)]
pub struct QuizFlowController {
    provider: Arc<dyn QuizDataProvider>,
    config: Arc<GameConfig>,
    state: Arc<Mutex<FlowState>>,
}

impl QuizFlowController {
    #[must_use]
    pub fn new(provider: Arc<dyn QuizDataProvider>, config: Arc<GameConfig>) -> Self {
        Self {
            provider,
            config,
            state: Arc::new(Mutex::new(FlowState {
                session: SessionState::new(),
                celebration: None,
                loading_text: None,
                source: Box::new(ThreadRngSource),
            })),
        }
    }

    #[must_use]
    pub fn with_index_source(self, source: impl IndexSource + 'static) -> Self {
        self.lock().source = Box::new(source);
        self
    }

    fn lock(&self) -> MutexGuard<'_, FlowState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.lock().session.phase()
    }

    /// Copy of the underlying session state.
    #[must_use]
    pub fn session(&self) -> SessionState {
        self.lock().session.clone()
    }

    /// `Landing -> PasswordPrompt`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidPhase` outside `Landing`.
    pub fn begin(&self) -> Result<(), SessionError> {
        self.lock().session.begin()?;
        debug!("password prompt opened");
        Ok(())
    }

    /// Store the token and enter `Loading`.
    ///
    /// Returns `None` when a fetch is already in flight; the submission is ignored.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidPhase` when the prompt is not showing.
    pub fn submit_token(&self, token: &str) -> Result<Option<LoadTicket>, SessionError> {
        let mut guard = self.lock();
        let state = &mut *guard;
        if state.session.phase() == Phase::Loading {
            debug!("ignoring token submission while loading");
            return Ok(None);
        }

        let ticket = state.session.submit_token(token)?;
        let line = pick_line(self.config.loading_texts(), state.source.as_mut()).to_string();
        state.loading_text = Some(line);
        Ok(Some(ticket))
    }

    /// Run the fetch for `ticket` and apply its result.
    ///
    /// A ticket the session has already moved past is not fetched at all; one
    /// that goes stale while the fetch runs has its result discarded.
    pub async fn complete_load(&self, ticket: LoadTicket) -> LoadResolution {
        let token = {
            let state = self.lock();
            if !state.session.is_current(ticket) {
                debug!(generation = ticket.generation(), "skipping fetch for stale ticket");
                return LoadResolution::Discarded;
            }
            state.session.auth_token().to_string()
        };
        let result = self.provider.fetch(&token).await;

        let mut state = self.lock();
        let resolution = match result {
            Ok(payload) => {
                let total = payload.len();
                let resolution = state.session.load_succeeded(ticket, payload);
                if resolution == LoadResolution::Playing {
                    info!(questions = total, "quiz loaded");
                }
                resolution
            }
            Err(err) => {
                warn!(error = %err, "quiz fetch failed");
                state.session.load_failed(ticket)
            }
        };

        if resolution == LoadResolution::Discarded {
            debug!(generation = ticket.generation(), "discarding stale quiz fetch");
        } else {
            state.loading_text = None;
        }
        resolution
    }

    /// Submit a token and wait for the fetch to resolve.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidPhase` when the prompt is not showing.
    pub async fn submit(&self, token: &str) -> Result<SubmitOutcome, SessionError> {
        match self.submit_token(token)? {
            Some(ticket) => Ok(SubmitOutcome::Loaded(self.complete_load(ticket).await)),
            None => Ok(SubmitOutcome::Ignored),
        }
    }

    /// Answer the question on screen.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidPhase` outside `Playing`.
    pub fn answer(&self, choice: Choice) -> Result<AnswerOutcome, SessionError> {
        let mut guard = self.lock();
        let state = &mut *guard;
        let outcome = state.session.answer(choice)?;
        match outcome {
            AnswerOutcome::Finished(Outcome::Won) => {
                let line = pick_line(self.config.wish_lines(), state.source.as_mut()).to_string();
                state.celebration = Some(line);
                info!(questions = state.session.current_index(), "quiz won");
            }
            AnswerOutcome::Finished(Outcome::Lost) => {
                info!(index = state.session.current_index(), "quiz lost");
            }
            AnswerOutcome::Next { .. } => {}
        }
        Ok(outcome)
    }

    /// `Finished -> Landing`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidPhase` outside `Finished`.
    pub fn play_again(&self) -> Result<(), SessionError> {
        let mut state = self.lock();
        state.session.play_again()?;
        state.celebration = None;
        state.loading_text = None;
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> ScreenSnapshot {
        let state = self.lock();
        let session = &state.session;
        let token = session.auth_token();

        let screen = match session.phase() {
            Phase::Landing => Screen::Landing,
            Phase::PasswordPrompt => Screen::PasswordPrompt {
                error: session.prompt_error().then_some(FETCH_FAILED_MESSAGE),
            },
            Phase::Loading => Screen::Loading {
                message: state.loading_text.clone().unwrap_or_default(),
            },
            Phase::Playing => match (session.current_question(), session.payload()) {
                (Some(question), Some(payload)) => Screen::Playing {
                    number: session.current_index() + 1,
                    total: payload.len(),
                    image_a: self.provider.asset_url(question.image_a(), token),
                    image_b: self.provider.asset_url(question.image_b(), token),
                },
                _ => Screen::Landing,
            },
            Phase::Finished => match (session.outcome(), session.payload()) {
                (Some(Outcome::Won), Some(payload)) => Screen::Finished(FinishedScreen::Won {
                    message: state.celebration.clone().unwrap_or_default(),
                    ending_image: self.provider.asset_url(payload.ending_image(), token),
                }),
                _ => Screen::Finished(FinishedScreen::Lost),
            },
        };

        let title = match &screen {
            Screen::Finished(FinishedScreen::Won { .. }) => self.config.won_title(),
            Screen::Finished(FinishedScreen::Lost) => self.config.lost_title(),
            _ => self.config.app_title(),
        };

        ScreenSnapshot {
            title: title.to_string(),
            screen,
        }
    }
}
