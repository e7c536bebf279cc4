use dioxus::prelude::*;
use mate_core::countdown::{CountdownGate, CountdownReading, Remaining};
use services::{CountdownSink, CountdownTicker};

use super::state::ScreenIntent;
use crate::context::AppContext;
use crate::vm::countdown_message;

struct SignalSink {
    reading: Signal<CountdownReading>,
}

impl CountdownSink for SignalSink {
    fn show_countdown(&mut self, remaining: Remaining) {
        self.reading.set(CountdownReading::Running(remaining));
    }

    fn show_begin(&mut self) {
        self.reading.set(CountdownReading::Elapsed);
    }
}

#[component]
pub fn LandingView() -> Element {
    let ctx = use_context::<AppContext>();
    let dispatch = use_context::<Callback<ScreenIntent>>();
    let gate = CountdownGate::new(ctx.config().special_day());
    let clock = ctx.clock();

    let reading = use_signal(|| gate.evaluate(clock.now()));
    use_future(move || async move {
        let mut sink = SignalSink { reading };
        CountdownTicker::new(gate).run(clock, &mut sink).await;
    });

    let content = match *reading.read() {
        CountdownReading::Running(remaining) => {
            let message = countdown_message(&remaining, ctx.config().special_person());
            rsx! {
                p { class: "countdown", "{message}" }
            }
        }
        CountdownReading::Elapsed => rsx! {
            button {
                id: "begin",
                onclick: move |_| dispatch.call(ScreenIntent::Begin),
                "Begin"
            }
        },
    };

    rsx! {
        div { class: "page landing",
            {content}
        }
    }
}
