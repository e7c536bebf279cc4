use dioxus::prelude::*;

#[component]
pub fn LoadingView(message: String) -> Element {
    rsx! {
        div { class: "page loading",
            p { class: "loading-text", "{message}" }
        }
    }
}
