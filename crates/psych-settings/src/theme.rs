use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::store::PreferenceStore;

/// Storage key the theme preference lives under.
pub const THEME_KEY: &str = "theme-storage";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Only the exact stored spellings are accepted.
    pub fn parse(s: &str) -> Option<Theme> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The process-wide theme, backed by a [`PreferenceStore`].
#[derive(Debug)]
pub struct ThemeStore<S> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeStore<S> {
    /// Read the stored theme once. Absent or unrecognized values give
    /// [`Theme::Light`].
    pub fn load(store: S) -> Self {
        let theme = match store.get(THEME_KEY) {
            Some(raw) => Theme::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "unrecognized stored theme, using light");
                Theme::default()
            }),
            None => Theme::default(),
        };
        tracing::debug!(%theme, "theme loaded");
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and write it through. A failed write keeps the new
    /// theme for this session.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = self.store.set(THEME_KEY, self.theme.as_str()) {
            tracing::warn!(error = %e, theme = %self.theme, "failed to persist theme");
        }
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
