//! Application-level configuration loading, including the quiz content sets.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::state::{
    content::ContentLibrary,
    game::{GameMode, QuizItem},
};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "SCOOPCAST_BACK_CONFIG_PATH";

#[derive(Debug, Clone, Default)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    content: ContentLibrary,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to the baked-in content sets.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(app_config) => {
                    info!(path = %path.display(), "loaded content sets from config");
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Parse a configuration document. Sets that fail validation keep their
    /// built-in default.
    pub fn from_json(contents: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<RawConfig>(contents).map(Into::into)
    }

    /// Content played by the session.
    pub fn content(&self) -> &ContentLibrary {
        &self.content
    }
}

#[derive(Debug, Default, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default)]
    content: RawContent,
}

#[derive(Debug, Default, Deserialize)]
/// Optional per-mode item lists; a missing mode keeps its default set.
struct RawContent {
    hollywood: Option<Vec<QuizItem>>,
    indian: Option<Vec<QuizItem>>,
    riddles: Option<Vec<QuizItem>>,
    dialogues: Option<Vec<QuizItem>>,
}

impl RawContent {
    fn take(&mut self, mode: GameMode) -> Option<Vec<QuizItem>> {
        match mode {
            GameMode::Hollywood => self.hollywood.take(),
            GameMode::Indian => self.indian.take(),
            GameMode::Riddles => self.riddles.take(),
            GameMode::Dialogues => self.dialogues.take(),
        }
    }
}

impl From<RawConfig> for AppConfig {
    fn from(mut value: RawConfig) -> Self {
        let mut content = ContentLibrary::default();
        for mode in GameMode::ALL {
            let Some(items) = value.content.take(mode) else {
                continue;
            };
            let count = items.len();
            match content.replace(mode, items) {
                Ok(()) => info!(?mode, count, "content set overridden"),
                Err(err) => warn!(
                    ?mode,
                    error = %err,
                    "invalid content set; keeping built-in default"
                ),
            }
        }
        Self { content }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
