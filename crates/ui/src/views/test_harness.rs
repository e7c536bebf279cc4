use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use mate_core::model::{Choice, GameConfig, GameConfigDraft, Question, QuizPayload};
use mate_core::time::fixed_now;
use services::{Clock, FetchError, QuizDataProvider, QuizFlowController, SeededSource};

use super::state::{ScreenIntent, ScreenTestHandles};
use crate::App;
use crate::context::{UiApp, build_app_context};

pub const TOKEN: &str = "token";
pub const WISH: &str = "You know me best";
pub const LOADING: &str = "Warming up the photos";

/// Answers every fetch with `payload` after `delay`; `None` fails.
struct StaticProvider {
    payload: Option<QuizPayload>,
    delay: Duration,
}

#[async_trait]
impl QuizDataProvider for StaticProvider {
    async fn fetch(&self, _token: &str) -> Result<QuizPayload, FetchError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.payload
            .clone()
            .ok_or_else(|| FetchError::Unavailable("offline".into()))
    }

    fn asset_url(&self, image_ref: &str, token: &str) -> String {
        format!("{image_ref}?auth={token}")
    }
}

#[derive(Clone)]
struct TestApp {
    flow: QuizFlowController,
    clock: Clock,
}

impl UiApp for TestApp {
    fn flow(&self) -> QuizFlowController {
        self.flow.clone()
    }

    fn clock(&self) -> Clock {
        self.clock
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    handles: ScreenTestHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn AppHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { App {} }
}

pub fn two_question_payload() -> QuizPayload {
    QuizPayload::new(
        vec![
            Question::new("/images/choice_a/1.jpg", "/images/choice_b/1.jpg", Choice::A),
            Question::new("/images/choice_b/2.jpg", "/images/choice_a/2.jpg", Choice::B),
        ],
        "/images/ending/us.jpg",
    )
    .unwrap()
}

/// Config whose special day is `offset` away from the fixed test clock.
pub fn config_with_offset(offset: chrono::Duration) -> GameConfig {
    let draft = GameConfigDraft {
        special_person: Some("Alex".into()),
        made_by: Some("Robin".into()),
        wish_lines: Some(vec![WISH.into()]),
        loading_texts: Some(vec![LOADING.into()]),
        ..GameConfigDraft::new()
    };
    draft
        .validate()
        .unwrap()
        .with_special_day(fixed_now() + offset)
}

pub struct UiHarness {
    pub dom: VirtualDom,
    pub flow: QuizFlowController,
    handles: ScreenTestHandles,
}

impl UiHarness {
    /// Controller for a session the test drives before the DOM is built.
    pub fn controller(config: GameConfig, payload: Option<QuizPayload>) -> QuizFlowController {
        Self::delayed_controller(config, payload, Duration::ZERO)
    }

    /// Controller whose fetches resolve only after `delay`.
    pub fn delayed_controller(
        config: GameConfig,
        payload: Option<QuizPayload>,
        delay: Duration,
    ) -> QuizFlowController {
        let provider = StaticProvider { payload, delay };
        QuizFlowController::new(Arc::new(provider), Arc::new(config))
            .with_index_source(SeededSource::new(1))
    }

    pub fn mount(flow: QuizFlowController) -> Self {
        let app = Arc::new(TestApp {
            flow: flow.clone(),
            clock: Clock::fixed(fixed_now()),
        });
        let handles = ScreenTestHandles::default();
        let dom = VirtualDom::new_with_props(
            AppHarness,
            HarnessProps {
                app,
                handles: handles.clone(),
            },
        );
        Self { dom, flow, handles }
    }

    /// Fire a view event through the app root, as a click or submit would.
    pub fn dispatch(&mut self, intent: ScreenIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    /// Drive pending tasks until the rendered HTML contains `needle`.
    pub async fn drive_until(&mut self, needle: &str) -> String {
        for _ in 0..40 {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}
