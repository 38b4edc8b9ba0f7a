//! Local session storage: the bearer token and the user profile.
//!
//! Persisted as a single TOML file at ~/.config/gather/session.toml. The
//! file is the sole authority for "is a session active": present means
//! authenticated, absent (or unreadable) means anonymous.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// The identity half of the session, as returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
}

/// A stored session: opaque bearer token plus the profile it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

/// Get/set/remove wrapper around the persisted session file. No
/// validation, no expiry logic.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn open() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("gather");

        Ok(SessionStore {
            path: config_dir.join("session.toml"),
        })
    }

    #[cfg(test)]
    fn at(path: PathBuf) -> Self {
        SessionStore { path }
    }

    /// Load the stored session. A file that is absent, unreadable or
    /// unparsable all count as "no session": a corrupt profile must fail
    /// closed to anonymous, never crash the startup check.
    pub fn load(&self) -> Option<Session> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        toml::from_str(&contents).ok()
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        let contents =
            toml::to_string_pretty(session).context("Failed to serialize session")?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write session to {}", self.path.display()))?;

        // Set to owner-only (0600) since the file contains the bearer token:
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .with_context(|| {
                    format!("Failed to set permissions on {}", self.path.display())
                })?;
        }

        Ok(())
    }

    /// Remove the stored session. Removing a session that is already gone
    /// is not an error.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| {
                format!("Failed to remove session at {}", self.path.display())
            }),
        }
    }
}
