use tracing::{info, warn};

use crate::error::UiError;

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
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

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    /// Icon classes: a moon offers the dark theme, a sun offers the light one.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}

/// String key/value persistence, backed by `localStorage` in the browser.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), UiError>;
}

pub struct ThemeManager<S> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeManager<S> {
    /// Reads the stored preference once; anything unrecognised means light.
    pub fn load(store: S) -> Self {
        let current = store
            .load(THEME_KEY)
            .and_then(|value| Theme::from_str(&value))
            .unwrap_or(Theme::Light);
        Self { store, current }
    }

    pub fn theme(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if let Err(err) = self.store.save(THEME_KEY, self.current.as_str()) {
            warn!(error = %err, "theme preference not persisted");
        }
        info!(theme = self.current.as_str(), "theme toggled");
        self.current
    }
}
