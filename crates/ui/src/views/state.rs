use dioxus::prelude::*;
use mate_core::model::Choice;
use services::ScreenSnapshot;
use tracing::{debug, warn};

use crate::context::AppContext;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// User events the views hand to the app root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenIntent {
    Begin,
    Submit(String),
    Answer(Choice),
    PlayAgain,
}

/// Apply `intent` to the controller and publish the new snapshot.
///
/// The fetch started by `Submit` runs on a task that outlives the prompt
/// view, since entering `Loading` unmounts it.
pub fn apply_intent(ctx: &AppContext, mut snapshot: Signal<ScreenSnapshot>, intent: ScreenIntent) {
    let flow = ctx.flow();
    match intent {
        ScreenIntent::Begin => {
            if let Err(err) = flow.begin() {
                warn!(error = %err, "begin ignored");
            }
        }
        ScreenIntent::Submit(token) => match flow.submit_token(&token) {
            Ok(Some(ticket)) => {
                let flow = flow.clone();
                dioxus::core::spawn_forever(async move {
                    flow.complete_load(ticket).await;
                    snapshot.set(flow.snapshot());
                });
            }
            Ok(None) => debug!("submission ignored while loading"),
            Err(err) => warn!(error = %err, "submission rejected"),
        },
        ScreenIntent::Answer(choice) => {
            if let Err(err) = flow.answer(choice) {
                warn!(error = %err, "answer ignored");
            }
        }
        ScreenIntent::PlayAgain => {
            if let Err(err) = flow.play_again() {
                warn!(error = %err, "play again ignored");
            }
        }
    }
    snapshot.set(flow.snapshot());
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ScreenTestHandles {
    dispatch: Rc<RefCell<Option<Callback<ScreenIntent>>>>,
}

#[cfg(test)]
impl ScreenTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<ScreenIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<ScreenIntent> {
        (*self.dispatch.borrow()).expect("screen dispatch registered")
    }
}
