//! Configuration loader.
//!
//! Reads a YAML document and parses it into [`Settings`]. Each call is an
//! independent read-and-parse; nothing is cached.

use super::types::Settings;
use crate::error::ConfigResult;
use std::path::Path;
use tracing::debug;

/// Load settings from a YAML file.
///
/// Read failures come back as [`ConfigError::SourceUnreadable`] wrapping the
/// original `io::Error`. Parse failures abort the whole load; no partial
/// settings are ever returned.
///
/// [`ConfigError::SourceUnreadable`]: crate::error::ConfigError::SourceUnreadable
pub fn load(path: impl AsRef<Path>) -> ConfigResult<Settings> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let settings = load_str(&content)?;

    debug!(
        path = %path.display(),
        tasks = settings.tasks.len(),
        accounts = settings.accounts.len(),
        metrics = settings.metric_count(),
        "Loaded configuration"
    );

    Ok(settings)
}

/// Parse settings from an in-memory YAML document.
///
/// An empty or comment-only document yields [`Settings::default()`].
pub fn load_str(content: &str) -> ConfigResult<Settings> {
    Ok(serde_yaml::from_str(content)?)
}
