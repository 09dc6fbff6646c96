//! Light/dark theme preference, persisted in `localStorage`.

use crate::config::{THEME_ATTRIBUTE, THEME_STORAGE_KEY};
use crate::TimerHubError;
use log::warn;
use web_sys::{Element, Storage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Interpret a stored value. Anything other than `"dark"` is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label for the toggle button: names the theme it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark mode",
            Theme::Dark => "Light mode",
        }
    }
}

/// Where the preference string lives between visits.
pub trait ThemeStore {
    fn get(&self) -> Result<Option<String>, TimerHubError>;
    fn set(&mut self, value: &str) -> Result<(), TimerHubError>;
}

/// The page's `localStorage`, looked up on every access.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalThemeStore;

fn local_storage() -> Result<Storage, TimerHubError> {
    let window = web_sys::window().ok_or(TimerHubError::NoWindow)?;
    window
        .local_storage()
        .map_err(|e| TimerHubError::Storage(format!("{:?}", e)))?
        .ok_or_else(|| TimerHubError::Storage("localStorage is disabled".to_string()))
}

impl ThemeStore for LocalThemeStore {
    fn get(&self) -> Result<Option<String>, TimerHubError> {
        local_storage()?
            .get_item(THEME_STORAGE_KEY)
            .map_err(|e| TimerHubError::Storage(format!("{:?}", e)))
    }

    fn set(&mut self, value: &str) -> Result<(), TimerHubError> {
        local_storage()?
            .set_item(THEME_STORAGE_KEY, value)
            .map_err(|e| TimerHubError::Storage(format!("{:?}", e)))
    }
}

/// Element carrying the theme attribute.
pub trait ThemeRoot {
    fn set_theme_attribute(&self, value: &str) -> Result<(), TimerHubError>;
    fn clear_theme_attribute(&self) -> Result<(), TimerHubError>;
}

impl ThemeRoot for Element {
    fn set_theme_attribute(&self, value: &str) -> Result<(), TimerHubError> {
        self.set_attribute(THEME_ATTRIBUTE, value)
            .map_err(|e| TimerHubError::Dom(format!("{:?}", e)))
    }

    fn clear_theme_attribute(&self) -> Result<(), TimerHubError> {
        self.remove_attribute(THEME_ATTRIBUTE)
            .map_err(|e| TimerHubError::Dom(format!("{:?}", e)))
    }
}

/// Read the saved theme, falling back to light on any storage failure.
pub fn load_theme_from(store: &impl ThemeStore) -> Theme {
    match store.get() {
        Ok(value) => Theme::from_stored(value.as_deref()),
        Err(err) => {
            warn!("Could not read theme preference: {}", err);
            Theme::Light
        }
    }
}

pub fn store_theme_to(store: &mut impl ThemeStore, theme: Theme) -> Result<(), TimerHubError> {
    store.set(theme.as_str())
}

/// Dark sets `data-theme="dark"`, light removes the attribute.
pub fn apply_theme_to(root: &impl ThemeRoot, theme: Theme) -> Result<(), TimerHubError> {
    match theme {
        Theme::Dark => root.set_theme_attribute(theme.as_str()),
        Theme::Light => root.clear_theme_attribute(),
    }
}

pub fn load_theme() -> Theme {
    load_theme_from(&LocalThemeStore)
}

pub fn store_theme(theme: Theme) -> Result<(), TimerHubError> {
    store_theme_to(&mut LocalThemeStore, theme)
}

/// Reflect `theme` on the document element.
pub fn apply_theme(theme: Theme) -> Result<(), TimerHubError> {
    let root = web_sys::window()
        .ok_or(TimerHubError::NoWindow)?
        .document()
        .and_then(|doc| doc.document_element())
        .ok_or_else(|| TimerHubError::Dom("document element missing".to_string()))?;
    apply_theme_to(&root, theme)
}
