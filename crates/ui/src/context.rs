use std::sync::Arc;

use mate_core::model::GameConfig;
use services::{Clock, QuizFlowController};

pub trait UiApp: Send + Sync {
    fn flow(&self) -> QuizFlowController;

    /// Time source for the countdown; `Clock::Default` outside tests.
    fn clock(&self) -> Clock {
        Clock::Default
    }
}

#[derive(Clone)]
pub struct AppContext {
    flow: QuizFlowController,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            flow: app.flow(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn flow(&self) -> &QuizFlowController {
        &self.flow
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.flow.config()
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}

/// Context the desktop binary hands to `LaunchBuilder::with_context`.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
