use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::time::{TimeError, parse_target};

const DEFAULT_SPECIAL_DAY: &str = "2024-07-21T12:00:00";
const DEFAULT_APP_TITLE: &str = "Who's Your Mate?";
const DEFAULT_SPECIAL_PERSON: &str = "my love";
const DEFAULT_MADE_BY: &str = "someone who misses you";
const DEFAULT_WON_TITLE: &str = "Happy Birthday 🎂";
const DEFAULT_LOST_TITLE: &str = "Oops! 💩";

const DEFAULT_WISH_LINES: [&str; 10] = [
    "Happy birthday to the one who's miles away but close to my heart. Wishing you a day filled with joy and love, even from afar.",
    "Distance may separate us physically, but our love knows no bounds. Happy birthday!",
    "Even though we're apart, my heart is with you every step of the way. Happy birthday, my dear.",
    "Distance may test us, but it can't diminish the love we share. Happy birthday!",
    "Wishing a very happy birthday to the love of my life. Though we may be separated by miles, our love binds us together.",
    "Happy birthday! Distance may be tough, but it's no match for the love we share.",
    "Happy birthday to my incredible partner. Here's to making every moment count when we're together again.",
    "Distance means so little when someone means so much. Happy birthday, my love.",
    "As long as we're under the same moon, I'll feel close to you. Happy birthday!",
    "No matter the miles that separate us, you're always with me in spirit. Happy birthday, sweetheart.",
];

const DEFAULT_LOADING_TEXTS: [&str; 10] = [
    "Hold tight, magic is happening!",
    "Getting things ready just for you...",
    "Almost there, stay tuned!",
    "Fetching some awesomeness...",
    "The best things come to those who wait!",
    "Making sure everything is perfect...",
    "Good things take time, almost done!",
    "Hold on, sprinkling some magic dust...",
    "Patience is a virtue, loading...",
    "Getting things ready for you, hang tight!",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameConfigError {
    #[error("{field} must contain at least one non-blank line")]
    EmptyMessages { field: &'static str },

    #[error("{field} must not be blank")]
    BlankField { field: &'static str },

    #[error(transparent)]
    Target(#[from] TimeError),
}

/// A non-empty list of display lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSet {
    lines: Vec<String>,
}

impl MessageSet {
    /// # Errors
    ///
    /// Returns `GameConfigError::EmptyMessages` if no non-blank line remains.
    pub fn new(
        field: &'static str,
        lines: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, GameConfigError> {
        let lines: Vec<String> = lines
            .into_iter()
            .map(|line| Into::<String>::into(line).trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(GameConfigError::EmptyMessages { field });
        }
        Ok(Self { lines })
    }

    fn from_static(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|line| (*line).to_string()).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Never true for a constructed set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at `index`, wrapping around so any index stays inside the set.
    #[must_use]
    pub fn get_wrapped(&self, index: usize) -> &str {
        &self.lines[index % self.lines.len()]
    }

    #[must_use]
    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|candidate| candidate == line)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

/// Injected configuration for the countdown and the quiz flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    special_day: DateTime<Utc>,
    special_person: String,
    app_title: String,
    made_by: String,
    won_title: String,
    lost_title: String,
    wish_lines: MessageSet,
    loading_texts: MessageSet,
}

impl GameConfig {
    #[must_use]
    pub fn special_day(&self) -> DateTime<Utc> {
        self.special_day
    }

    #[must_use]
    pub fn special_person(&self) -> &str {
        &self.special_person
    }

    #[must_use]
    pub fn app_title(&self) -> &str {
        &self.app_title
    }

    #[must_use]
    pub fn made_by(&self) -> &str {
        &self.made_by
    }

    #[must_use]
    pub fn won_title(&self) -> &str {
        &self.won_title
    }

    #[must_use]
    pub fn lost_title(&self) -> &str {
        &self.lost_title
    }

    #[must_use]
    pub fn wish_lines(&self) -> &MessageSet {
        &self.wish_lines
    }

    #[must_use]
    pub fn loading_texts(&self) -> &MessageSet {
        &self.loading_texts
    }

    /// Copy of this config with a different countdown target.
    #[must_use]
    pub fn with_special_day(mut self, special_day: DateTime<Utc>) -> Self {
        self.special_day = special_day;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        // The default target is a constant known to parse.
        let special_day = parse_target(DEFAULT_SPECIAL_DAY).unwrap_or_else(|_| Utc::now());
        Self {
            special_day,
            special_person: DEFAULT_SPECIAL_PERSON.to_string(),
            app_title: DEFAULT_APP_TITLE.to_string(),
            made_by: DEFAULT_MADE_BY.to_string(),
            won_title: DEFAULT_WON_TITLE.to_string(),
            lost_title: DEFAULT_LOST_TITLE.to_string(),
            wish_lines: MessageSet::from_static(&DEFAULT_WISH_LINES),
            loading_texts: MessageSet::from_static(&DEFAULT_LOADING_TEXTS),
        }
    }
}

/// User overrides; any field left out keeps the built-in default.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfigDraft {
    pub special_day: Option<String>,
    pub special_person: Option<String>,
    pub app_title: Option<String>,
    pub made_by: Option<String>,
    pub won_title: Option<String>,
    pub lost_title: Option<String>,
    pub wish_lines: Option<Vec<String>>,
    pub loading_texts: Option<Vec<String>>,
}

impl GameConfigDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the overrides onto the defaults and validate the result.
    ///
    /// # Errors
    ///
    /// Returns `GameConfigError` for an unparsable target, blank titles, or
    /// message lists without any usable line.
    pub fn validate(self) -> Result<GameConfig, GameConfigError> {
        let defaults = GameConfig::default();

        let special_day = match self.special_day {
            Some(raw) => parse_target(&raw)?,
            None => defaults.special_day,
        };
        let wish_lines = match self.wish_lines {
            Some(lines) => MessageSet::new("wish_lines", lines)?,
            None => defaults.wish_lines,
        };
        let loading_texts = match self.loading_texts {
            Some(lines) => MessageSet::new("loading_texts", lines)?,
            None => defaults.loading_texts,
        };

        Ok(GameConfig {
            special_day,
            special_person: non_blank("special_person", self.special_person, defaults.special_person)?,
            app_title: non_blank("app_title", self.app_title, defaults.app_title)?,
            made_by: non_blank("made_by", self.made_by, defaults.made_by)?,
            won_title: non_blank("won_title", self.won_title, defaults.won_title)?,
            lost_title: non_blank("lost_title", self.lost_title, defaults.lost_title)?,
            wish_lines,
            loading_texts,
        })
    }
}

fn non_blank(
    field: &'static str,
    value: Option<String>,
    default: String,
) -> Result<String, GameConfigError> {
    match value.map(|val| val.trim().to_string()) {
        Some(val) if val.is_empty() => Err(GameConfigError::BlankField { field }),
        Some(val) => Ok(val),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_ten_lines_each() {
        let config = GameConfig::default();
        assert_eq!(config.wish_lines().len(), 10);
        assert_eq!(config.loading_texts().len(), 10);
        assert_eq!(config.won_title(), DEFAULT_WON_TITLE);
    }

    #[test]
    fn empty_draft_matches_defaults() {
        assert_eq!(GameConfigDraft::new().validate().unwrap(), GameConfig::default());
    }

    #[test]
    fn overrides_replace_single_fields() {
        let draft = GameConfigDraft {
            special_day: Some("2030-01-01T00:00:00Z".into()),
            app_title: Some("  Guess Who  ".into()),
            wish_lines: Some(vec!["one".into(), "  ".into(), "two".into()]),
            ..GameConfigDraft::default()
        };
        let config = draft.validate().unwrap();
        assert_eq!(config.app_title(), "Guess Who");
        assert_eq!(config.special_day().to_rfc3339(), "2030-01-01T00:00:00+00:00");
        assert_eq!(config.wish_lines().iter().collect::<Vec<_>>(), vec!["one", "two"]);
        assert_eq!(config.loading_texts().len(), 10);
    }

    #[test]
    fn rejects_all_blank_message_list() {
        let draft = GameConfigDraft {
            loading_texts: Some(vec![" ".into()]),
            ..GameConfigDraft::default()
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            GameConfigError::EmptyMessages {
                field: "loading_texts"
            }
        );
    }

    #[test]
    fn rejects_blank_title() {
        let draft = GameConfigDraft {
            lost_title: Some(String::new()),
            ..GameConfigDraft::default()
        };
        assert!(matches!(
            draft.validate(),
            Err(GameConfigError::BlankField { field: "lost_title" })
        ));
    }

    #[test]
    fn wrapped_lookup_stays_in_set() {
        let set = MessageSet::new("x", ["a", "b", "c"]).unwrap();
        assert_eq!(set.get_wrapped(4), "b");
        assert!(set.contains("c"));
    }
}
