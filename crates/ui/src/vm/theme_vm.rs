/// Colour scheme of the window; not persisted between launches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn root_class(self) -> &'static str {
        match self {
            Self::Light => "app-root",
            Self::Dark => "app-root theme-dark",
        }
    }

    /// Label of the button that switches away from this theme.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark",
            Self::Dark => "Light",
        }
    }

    fn heart(self) -> &'static str {
        match self {
            Self::Light => "💖",
            Self::Dark => "🤍",
        }
    }
}

#[must_use]
pub fn made_by_line(theme: Theme, made_by: &str) -> String {
    format!("Made with {} by {made_by}", theme.heart())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heart_follows_theme() {
        assert_eq!(made_by_line(Theme::Light, "Kim"), "Made with 💖 by Kim");
        assert_eq!(made_by_line(Theme::Dark, "Kim"), "Made with 🤍 by Kim");
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::default().toggled().toggled(), Theme::Light);
    }
}
