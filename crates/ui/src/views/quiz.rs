use dioxus::prelude::*;
use mate_core::model::Choice;

use super::state::ScreenIntent;

#[component]
pub fn QuizView(number: usize, total: usize, image_a: String, image_b: String) -> Element {
    let dispatch = use_context::<Callback<ScreenIntent>>();

    rsx! {
        div { class: "page quiz",
            p { class: "progress", "Question {number} of {total}" }
            h2 { "Which one is your mate?" }
            div { class: "choices",
                button {
                    class: "choice",
                    id: "choice-a",
                    onclick: move |_| dispatch.call(ScreenIntent::Answer(Choice::A)),
                    img { src: "{image_a}", alt: "Option A" }
                }
                button {
                    class: "choice",
                    id: "choice-b",
                    onclick: move |_| dispatch.call(ScreenIntent::Answer(Choice::B)),
                    img { src: "{image_b}", alt: "Option B" }
                }
            }
        }
    }
}
