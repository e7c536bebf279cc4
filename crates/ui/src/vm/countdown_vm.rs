use mate_core::countdown::Remaining;

/// Landing-page line shown while the countdown is running.
#[must_use]
pub fn countdown_message(remaining: &Remaining, special_person: &str) -> String {
    format!(
        "Only {}d, {}h, {}m, and {}s until {special_person}'s special day!",
        remaining.days, remaining.hours, remaining.minutes, remaining.seconds
    )
}
