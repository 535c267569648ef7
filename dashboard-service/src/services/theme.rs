//! Dark-mode preference, persisted to a key/value store.

use serde::Serialize;
use service_core::error::AppError;
use service_core::storage::KeyValueStore;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Storage key holding the JSON boolean.
pub const DARK_MODE_KEY: &str = "darkMode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

pub struct ThemePreferences {
    store: Arc<dyn KeyValueStore>,
    dark_mode: bool,
}

impl ThemePreferences {
    /// Read the stored flag, falling back to the system preference when it is
    /// missing or unreadable. The resolved value is written back.
    pub async fn load(store: Arc<dyn KeyValueStore>, system_prefers_dark: bool) -> Self {
        let stored = match store.get(DARK_MODE_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<bool>(&raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(value = %raw, error = %e, "Ignoring malformed dark mode preference");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Failed to read dark mode preference");
                None
            }
        };

        let dark_mode = stored.unwrap_or(system_prefers_dark);
        debug!(dark_mode, from_store = stored.is_some(), "Theme preference loaded");

        let prefs = Self { store, dark_mode };
        if stored.is_none() {
            if let Err(e) = prefs.persist().await {
                warn!(error = %e, "Failed to persist dark mode preference");
            }
        }
        prefs
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Set the flag and persist it. The in-memory flag changes even when the
    /// write fails.
    pub async fn set(&mut self, dark_mode: bool) -> Result<(), AppError> {
        self.dark_mode = dark_mode;
        self.persist().await?;
        info!(dark_mode, "Theme preference updated");
        Ok(())
    }

    /// Flip the flag and persist it. Returns the new value.
    pub async fn toggle(&mut self) -> Result<bool, AppError> {
        let next = !self.dark_mode;
        self.set(next).await?;
        Ok(next)
    }

    async fn persist(&self) -> Result<(), AppError> {
        let raw = serde_json::to_string(&self.dark_mode)?;
        self.store.set(DARK_MODE_KEY, &raw).await
    }
}
