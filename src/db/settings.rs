use super::storage::{Storage, StorageError};
use crate::libs::task::Theme;

/// Namespace holding the color theme.
pub const THEME_KEY: &str = "theme";

pub struct Settings;

impl Settings {
    /// Stored theme, `Theme::Light` when nothing was saved yet.
    ///
    /// Accepts a JSON string (`"dark"`) or the bare word (`dark`). Anything
    /// unrecognized falls back to the default theme instead of failing.
    pub fn theme<S: Storage + ?Sized>(storage: &S) -> Result<Theme, StorageError> {
        let Some(raw) = storage.read(THEME_KEY)? else {
            return Ok(Theme::default());
        };
        let value = serde_json::from_str::<String>(&raw).unwrap_or_else(|_| raw.trim().to_string());
        match value.as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => {
                tracing::warn!(value = other, "unknown stored theme, using default");
                Ok(Theme::default())
            }
        }
    }

    pub fn save_theme<S: Storage + ?Sized>(storage: &mut S, theme: Theme) -> Result<(), StorageError> {
        storage.write(THEME_KEY, &serde_json::to_string(&theme)?)
    }
}
