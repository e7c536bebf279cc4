use dioxus::prelude::*;

use super::state::ScreenIntent;

#[component]
pub fn PromptView(error: Option<&'static str>) -> Element {
    let dispatch = use_context::<Callback<ScreenIntent>>();
    let mut token = use_signal(String::new);

    rsx! {
        div { class: "page prompt",
            h2 { "What's the password?" }
            form {
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    dispatch.call(ScreenIntent::Submit(token.read().clone()));
                },
                input {
                    id: "password",
                    r#type: "password",
                    autofocus: true,
                    value: "{token}",
                    oninput: move |evt| token.set(evt.value()),
                }
                button { r#type: "submit", "Let's go" }
            }
            if let Some(message) = error {
                p { class: "prompt-error", "{message}" }
            }
        }
    }
}
