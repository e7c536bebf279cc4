use dioxus::prelude::*;
use services::{Screen, ScreenSnapshot};

use crate::context::AppContext;
use crate::views::{
    FinishedView, Footer, LandingView, LoadingView, PromptView, QuizView, ScreenIntent,
    apply_intent,
};
use crate::vm::Theme;

const STYLE: &str = include_str!("../assets/style.css");

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let snapshot = use_context_provider(|| Signal::new(ctx.flow().snapshot()));
    let theme = use_context_provider(|| Signal::new(Theme::default()));
    let dispatch = {
        let ctx = ctx.clone();
        use_callback(move |intent: ScreenIntent| apply_intent(&ctx, snapshot, intent))
    };
    use_context_provider(|| dispatch);

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<crate::views::ScreenTestHandles>() {
            handles.register(dispatch);
        }
    }

    let ScreenSnapshot { title, screen } = snapshot.read().clone();

    let body = match screen {
        Screen::Landing => rsx! { LandingView {} },
        Screen::PasswordPrompt { error } => rsx! { PromptView { error } },
        Screen::Loading { message } => rsx! { LoadingView { message } },
        Screen::Playing {
            number,
            total,
            image_a,
            image_b,
        } => rsx! { QuizView { number, total, image_a, image_b } },
        Screen::Finished(finished) => rsx! { FinishedView { finished } },
    };

    rsx! {
        style { {STYLE} }

        // Window and page title follow the phase.
        document::Title { "{title}" }

        div { class: theme().root_class(),
            h1 { class: "title", "{title}" }
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                {body}
            }
            Footer {}
        }
    }
}
