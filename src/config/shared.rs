//! Shared, atomically swappable settings.
//!
//! Readers take an `Arc<Settings>` snapshot and keep using it even if a newer
//! value is stored meanwhile. Deciding when to reload is up to the caller.

use super::loader::load;
use super::types::Settings;
use crate::error::ConfigResult;
use arc_swap::ArcSwap;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Cloneable handle to the current [`Settings`].
#[derive(Debug, Clone)]
pub struct SharedSettings {
    inner: Arc<ArcSwap<Settings>>,
}

impl SharedSettings {
    pub fn new(settings: Settings) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(settings)),
        }
    }

    /// Load the initial value from `path`.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Ok(Self::new(load(path)?))
    }

    /// Snapshot of the current settings.
    pub fn current(&self) -> Arc<Settings> {
        self.inner.load_full()
    }

    /// Swap in `settings`, returning the previous value.
    pub fn replace(&self, settings: Settings) -> Arc<Settings> {
        let previous = self.inner.swap(Arc::new(settings));
        info!("Configuration swapped");
        previous
    }

    /// Re-read `path` and swap the result in.
    ///
    /// On failure the current settings stay in place and the error is returned.
    pub fn reload(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        match load(path) {
            Ok(settings) => {
                self.replace(settings);
                Ok(())
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Reload failed, keeping previous configuration"
                );
                Err(e)
            }
        }
    }
}
