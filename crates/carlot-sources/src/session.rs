//! Session cache — one serialized JSON blob holding the signed-in identity.
//!
//! An explicit store object with `load`/`save`/`clear` as its only
//! side-effecting operations. Page guards read it, login/registration write
//! it, logout clears it. A missing or corrupt blob loads as `None`, never an
//! error.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fixed file name of the cached session blob.
pub const SESSION_FILE: &str = "session.json";

/// The signed-in user's identity and role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub username: String,
    pub fullname: String,
    pub role: String,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// File-backed session store.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `~/.config/carlot/session.json` (honoring `XDG_CONFIG_HOME`).
    pub fn default_path() -> PathBuf {
        std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                    .join(".config")
            })
            .join("carlot")
            .join(SESSION_FILE)
    }

    /// The cached session, if a readable one exists.
    pub fn load(&self) -> Option<Session> {
        let text = std::fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&text).ok()
    }

    pub fn save(&self, session: &Session) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(session).expect("session serializes");
        std::fs::write(&self.path, text)
    }

    /// Remove the cached session. Clearing an absent session is fine.
    pub fn clear(&self) -> std::io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}
