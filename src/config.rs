use serde::{Serialize, Deserialize};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ClientError, Result};
use crate::model::AuthUser;

// Default configuration
pub const DEFAULT_API_URL: &str = "http://localhost:5000";
const SETTINGS_FILE: &str = "settings.json";
const SESSION_FILE: &str = "session.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Settings {
    /// Base URL of the chat REST API
    pub api_base_url: String,
    /// "dark" or "light"
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            theme: default_theme(),
        }
    }
}

/// Platform config directory, created on first use.
pub fn config_dir() -> Option<PathBuf> {
    let proj = ProjectDirs::from("com", "parley", "parley-client")?;
    let dir = proj.config_dir();
    if let Err(e) = fs::create_dir_all(dir) {
        tracing::warn!(error = %e, "failed to create config dir");
        return None;
    }
    Some(dir.to_path_buf())
}

pub fn settings_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join(SETTINGS_FILE))
}

pub fn session_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join(SESSION_FILE))
}

/// Settings from `path`, or defaults when the file is missing or unreadable.
pub fn load_settings_from(path: &Path) -> Settings {
    let Ok(content) = fs::read_to_string(path) else {
        return Settings::default();
    };
    match serde_json::from_str(&content) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable settings");
            Settings::default()
        }
    }
}

pub fn load_settings() -> Settings {
    settings_path()
        .map(|p| load_settings_from(&p))
        .unwrap_or_default()
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<()> {
    let mut file = fs::File::create(path)?;
    let data = serde_json::to_string_pretty(settings)?;
    file.write_all(data.as_bytes())?;
    Ok(())
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    if let Some(path) = settings_path() {
        save_settings_to(&path, settings)?;
    }
    Ok(())
}

/// Read the persisted session record written at sign-in.
///
/// A missing, unreadable or malformed record is a [`ClientError::Session`].
pub fn load_session_from(path: &Path) -> Result<AuthUser> {
    let content = fs::read_to_string(path).map_err(|e| {
        ClientError::session(format!("cannot read {}: {}", path.display(), e))
    })?;
    let user: AuthUser = serde_json::from_str(&content).map_err(|e| {
        ClientError::session(format!("corrupt session record {}: {}", path.display(), e))
    })?;
    if user.token.is_empty() {
        return Err(ClientError::session("session record has an empty token"));
    }
    Ok(user)
}

pub fn load_session() -> Result<AuthUser> {
    let path = session_path().ok_or_else(|| ClientError::session("no config directory"))?;
    load_session_from(&path)
}
