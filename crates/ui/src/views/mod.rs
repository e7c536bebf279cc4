mod finished;
mod footer;
mod landing;
mod loading;
mod prompt;
mod quiz;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use finished::FinishedView;
pub use footer::Footer;
pub use landing::LandingView;
pub use loading::LoadingView;
pub use prompt::PromptView;
pub use quiz::QuizView;
pub use state::{ScreenIntent, apply_intent};

#[cfg(test)]
pub(crate) use state::ScreenTestHandles;
