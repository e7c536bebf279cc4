use dioxus::prelude::*;
use services::FinishedScreen;

use super::state::ScreenIntent;

#[component]
pub fn FinishedView(finished: FinishedScreen) -> Element {
    let dispatch = use_context::<Callback<ScreenIntent>>();

    let outcome = match finished {
        FinishedScreen::Won {
            message,
            ending_image,
        } => rsx! {
            p { class: "wish", "{message}" }
            div { class: "ending",
                img { src: "{ending_image}", alt: "Us" }
            }
        },
        // The lost title is the whole message.
        FinishedScreen::Lost => rsx! {},
    };

    rsx! {
        div { class: "page finished",
            {outcome}
            button {
                id: "play-again",
                onclick: move |_| dispatch.call(ScreenIntent::PlayAgain),
                "Play again"
            }
        }
    }
}
