//! Name-based lookup of tasks and accounts.
//!
//! Both scans run in document order and the first exact, case-sensitive match
//! wins. Task lookup fails on a miss; account lookup never fails.

use super::types::{Account, Settings, Task};
use crate::error::{ConfigError, ConfigResult};
use std::borrow::Cow;
use tracing::debug;

impl Settings {
    /// Find the first task named `name`.
    pub fn get_task(&self, name: &str) -> ConfigResult<&Task> {
        self.tasks
            .iter()
            .find(|task| task.name == name)
            .ok_or_else(|| ConfigError::task_not_found(name))
    }

    /// Find the first account named `name`, or [`Account::fallback`] if there
    /// is none. A configured account comes back borrowed, the fallback owned.
    pub fn get_account(&self, name: &str) -> Cow<'_, Account> {
        match self.accounts.iter().find(|account| account.name == name) {
            Some(account) => Cow::Borrowed(account),
            None => {
                debug!(account = %name, "Account not configured, using default credentials");
                Cow::Owned(Account::fallback())
            }
        }
    }
}
