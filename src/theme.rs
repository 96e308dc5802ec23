use std::{fmt, str::FromStr};

use thiserror::Error;

/// Local storage key holding the persisted preference.
pub const THEME_STORAGE_KEY: &str = "theme";
/// Class toggled on `<html>` to switch tailwind into dark mode.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(String);

impl Theme {
    /// Picks the active theme from a persisted value. Only a missing or empty
    /// value defers to the platform color scheme; any other value that isn't
    /// `"dark"` means light.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored {
            Some(s) if !s.is_empty() => s.parse().unwrap_or(Self::Light),
            _ if prefers_dark => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Where the controller reads and writes theme state.
///
/// The browser implementation lives next to the toggle component; tests use
/// an in-memory one.
pub trait ThemeHost {
    fn stored(&self) -> Option<String>;
    fn prefers_dark(&self) -> bool;
    fn persist(&mut self, theme: Theme);
    fn apply(&mut self, theme: Theme);
}

/// Resolves the initial theme and applies it to the document root.
/// Nothing is written to storage until the user toggles.
pub fn init(host: &mut impl ThemeHost) -> Theme {
    let stored = host.stored();
    let theme = Theme::resolve(stored.as_deref(), host.prefers_dark());
    host.apply(theme);
    theme
}

pub fn toggle(current: Theme, host: &mut impl ThemeHost) -> Theme {
    let next = current.toggled();
    host.persist(next);
    host.apply(next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryHost {
        storage: Option<String>,
        prefers_dark: bool,
        root_dark: bool,
        writes: usize,
    }

    impl ThemeHost for MemoryHost {
        fn stored(&self) -> Option<String> {
            self.storage.clone()
        }

        fn prefers_dark(&self) -> bool {
            self.prefers_dark
        }

        fn persist(&mut self, theme: Theme) {
            self.writes += 1;
            self.storage = Some(theme.to_string());
        }

        fn apply(&mut self, theme: Theme) {
            self.root_dark = theme.is_dark();
        }
    }

    #[test]
    fn test_resolve_prefers_stored_value() {
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
    }

    #[test]
    fn test_resolve_falls_back_to_media_query() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
        // storage returns "" for a missing key
        assert_eq!(Theme::resolve(Some(""), true), Theme::Dark);
        assert_eq!(Theme::resolve(Some(""), false), Theme::Light);
    }

    #[test]
    fn test_resolve_unknown_stored_value_is_light() {
        assert_eq!(Theme::resolve(Some("purple"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("purple"), false), Theme::Light);
        assert_eq!(Theme::resolve(Some("Dark"), true), Theme::Light);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(Theme::Light.to_string(), "light");
        assert!("Dark".parse::<Theme>().is_err());
    }

    #[test]
    fn test_init_applies_without_persisting() {
        let mut host = MemoryHost {
            prefers_dark: true,
            ..Default::default()
        };
        let theme = init(&mut host);
        assert_eq!(theme, Theme::Dark);
        assert!(host.root_dark);
        assert_eq!(host.writes, 0);
        assert_eq!(host.storage, None);
    }

    #[test]
    fn test_init_reads_host_color_scheme() {
        for prefers_dark in [false, true] {
            let mut host = MemoryHost {
                prefers_dark,
                ..Default::default()
            };
            assert_eq!(init(&mut host).is_dark(), prefers_dark);
            assert_eq!(host.root_dark, prefers_dark);
        }
    }

    #[test]
    fn test_toggle_keeps_storage_and_class_in_sync() {
        let mut host = MemoryHost {
            storage: Some("light".to_string()),
            prefers_dark: true,
            ..Default::default()
        };
        let mut theme = init(&mut host);
        assert_eq!(theme, Theme::Light);
        assert!(!host.root_dark);

        for _ in 0..5 {
            theme = toggle(theme, &mut host);
            assert_eq!(host.storage.as_deref(), Some(theme.as_str()));
            assert_eq!(host.root_dark, theme.is_dark());
        }
        assert_eq!(theme, Theme::Dark);
        assert_eq!(host.writes, 5);
    }

    #[test]
    fn test_double_toggle_returns_to_start() {
        let mut host = MemoryHost::default();
        let start = init(&mut host);
        let once = toggle(start, &mut host);
        let twice = toggle(once, &mut host);
        assert_ne!(start, once);
        assert_eq!(start, twice);
        assert_eq!(host.storage.as_deref(), Some("light"));
    }
}
