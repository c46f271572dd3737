//! Locating the configuration document.
//!
//! Candidates, highest priority first:
//! 1. Explicit path (`--config`)
//! 2. `CW_POLLER_CONFIG` environment variable
//! 3. `./config.yaml`
//! 4. `~/.cw-poller/config.yaml`

use std::path::{Path, PathBuf};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "CW_POLLER_CONFIG";

/// File name looked up in the working and user directories.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Directory under `$HOME` holding the user-level config.
pub const USER_DIR_NAME: &str = ".cw-poller";

/// Where a configuration path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Explicit,
    Environment,
    WorkingDir,
    UserDir,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Explicit => write!(f, "command line"),
            SourceKind::Environment => write!(f, "{}", CONFIG_ENV_VAR),
            SourceKind::WorkingDir => write!(f, "working directory"),
            SourceKind::UserDir => write!(f, "user directory"),
        }
    }
}

/// A resolved configuration path and its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub path: PathBuf,
    pub kind: SourceKind,
}

impl ConfigSource {
    /// Resolve using the process environment and home directory.
    pub fn discover(explicit: Option<&Path>) -> Self {
        let env = std::env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from);
        let user_dir = dirs::home_dir().map(|h| h.join(USER_DIR_NAME));
        Self::resolve(explicit, env, PathBuf::from("."), user_dir)
    }

    /// Pick the first existing candidate. If none exist, the highest priority
    /// candidate is returned so that loading reports the missing file.
    pub fn resolve(
        explicit: Option<&Path>,
        env: Option<PathBuf>,
        working_dir: PathBuf,
        user_dir: Option<PathBuf>,
    ) -> Self {
        // An explicit path is taken as-is, existing or not.
        if let Some(path) = explicit {
            return Self {
                path: path.to_path_buf(),
                kind: SourceKind::Explicit,
            };
        }

        let mut candidates = Vec::new();
        if let Some(path) = env {
            candidates.push(Self {
                path,
                kind: SourceKind::Environment,
            });
        }
        candidates.push(Self {
            path: working_dir.join(CONFIG_FILE_NAME),
            kind: SourceKind::WorkingDir,
        });
        if let Some(dir) = user_dir {
            candidates.push(Self {
                path: dir.join(CONFIG_FILE_NAME),
                kind: SourceKind::UserDir,
            });
        }

        let first = candidates[0].clone();
        candidates
            .into_iter()
            .find(|c| c.path.exists())
            .unwrap_or(first)
    }
}
