mod game_config;
mod quiz;
mod session;

pub use game_config::{GameConfig, GameConfigDraft, GameConfigError, MessageSet};
pub use quiz::{Choice, PayloadError, Question, QuizPayload};
pub use session::{
    AnswerOutcome, LoadResolution, LoadTicket, Outcome, Phase, SessionError, SessionState,
};
