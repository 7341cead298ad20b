//! Plain on-disk storage for the session.
//!
//! Three string values under fixed keys, written as a small JSON file in
//! the platform data dir so the session survives a restart. Nothing here
//! is encrypted; the token is an opaque bearer credential for a local
//! development backend.

use super::state::Session;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub(crate) const SESSION_FILE: &str = "session.json";

/// On-disk shape: the same three keys, all stored as strings the way the
/// original browser client kept them in local storage.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    token: String,
    is_superuser: String,
    is_staff: String,
}

impl PersistedSession {
    fn from_session(session: &Session) -> Option<Self> {
        session.token.as_ref().map(|token| Self {
            token: token.clone(),
            is_superuser: session.is_superuser.to_string(),
            is_staff: session.is_staff.to_string(),
        })
    }

    fn into_session(self) -> Session {
        Session {
            token: Some(self.token),
            is_superuser: self.is_superuser == "true",
            is_staff: self.is_staff == "true",
        }
    }
}

/// File-backed storage for session state.
#[derive(Debug)]
pub struct SessionStorage {
    path: PathBuf,
}

impl SessionStorage {
    /// Storage at the default platform location.
    pub fn new() -> Result<Self> {
        let proj_dirs = ProjectDirs::from("", "usermanage", "usermanage")
            .context("Unable to determine data directory")?;
        Ok(Self {
            path: proj_dirs.data_dir().join(SESSION_FILE),
        })
    }

    /// Storage at an explicit path (tests, alternate profiles).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Read the persisted session, if any.
    pub fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let persisted: PersistedSession = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(Some(persisted.into_session()))
    }

    /// Write the session through to disk. An anonymous session is stored
    /// as absence, same as `clear`.
    pub fn save(&self, session: &Session) -> Result<()> {
        let Some(persisted) = PersistedSession::from_session(session) else {
            return self.clear();
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(&persisted)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }

    /// Remove all persisted values.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).with_context(|| format!("removing {}", self.path.display()))
            }
        }
    }
}
