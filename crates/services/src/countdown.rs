use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::{MissedTickBehavior, interval};

use mate_core::Clock;
use mate_core::countdown::{CountdownGate, CountdownReading, Remaining};

/// Rendering side of the countdown.
pub trait CountdownSink {
    fn show_countdown(&mut self, remaining: Remaining);
    fn show_begin(&mut self);
}

/// Re-evaluates a `CountdownGate` on a fixed period until it elapses.
#[derive(Debug, Clone, Copy)]
pub struct CountdownTicker {
    gate: CountdownGate,
    period: Duration,
}

impl CountdownTicker {
    pub const DEFAULT_PERIOD: Duration = Duration::from_secs(1);

    #[must_use]
    pub fn new(gate: CountdownGate) -> Self {
        Self {
            gate,
            period: Self::DEFAULT_PERIOD,
        }
    }

    /// Drive `sink` from `clock` until the target passes.
    ///
    /// Returns the number of countdown renders; zero means the target had
    /// already passed and no timer was started.
    pub async fn run(&self, clock: Clock, sink: &mut impl CountdownSink) -> u64 {
        self.run_with(|| clock.now(), sink).await
    }

    /// Like `run`, with an arbitrary time source.
    pub async fn run_with(
        &self,
        mut now: impl FnMut() -> DateTime<Utc>,
        sink: &mut impl CountdownSink,
    ) -> u64 {
        let CountdownReading::Running(first) = self.gate.evaluate(now()) else {
            sink.show_begin();
            return 0;
        };
        sink.show_countdown(first);
        let mut renders = 1;

        let mut ticks = interval(self.period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately.
        ticks.tick().await;

        loop {
            ticks.tick().await;
            match self.gate.evaluate(now()) {
                CountdownReading::Running(remaining) => {
                    sink.show_countdown(remaining);
                    renders += 1;
                }
                CountdownReading::Elapsed => {
                    sink.show_begin();
                    return renders;
                }
            }
        }
    }
}
