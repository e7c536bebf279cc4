#![forbid(unsafe_code)]

pub mod countdown;
pub mod error;
pub mod flow;
pub mod game_config_service;
pub mod messages;
pub mod provider;

pub use mate_core::Clock;

pub use countdown::{CountdownSink, CountdownTicker};
pub use error::{ConfigError, FetchError};
pub use flow::{
    FETCH_FAILED_MESSAGE, FinishedScreen, QuizFlowController, Screen, ScreenSnapshot,
    SubmitOutcome,
};
pub use game_config_service::load_game_config;
pub use messages::{IndexSource, SeededSource, ThreadRngSource, pick_line};
pub use provider::{HttpQuizProvider, ProviderConfig, QuizDataProvider, TokenPlacement};
