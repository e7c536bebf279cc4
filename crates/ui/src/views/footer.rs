use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{Theme, made_by_line};

#[component]
pub fn Footer() -> Element {
    let ctx = use_context::<AppContext>();
    let mut theme = use_context::<Signal<Theme>>();
    let current = theme();
    let line = made_by_line(current, ctx.config().made_by());

    rsx! {
        footer { class: "footer",
            "{line}"
            button {
                class: "theme-toggle",
                onclick: move |_| theme.set(current.toggled()),
                "{current.toggle_label()}"
            }
        }
    }
}
