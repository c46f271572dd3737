//! Configuration types and structures.
//!
//! Missing keys deserialize to empty values. Only [`Metric`] applies
//! non-zero defaults; see [`super::metric`].

use super::metric::Metric;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

/// Name given to the synthesized account when a lookup has no match.
pub const DEFAULT_ACCOUNT_NAME: &str = "default";

/// Root of a loaded configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether an external reload loop should be running. Data only.
    #[serde(deserialize_with = "null_as_default")]
    pub auto_reload: bool,

    /// Seconds between reloads.
    #[serde(rename = "auto_reload_delay", deserialize_with = "null_as_default")]
    pub reload_delay: i64,

    /// Tasks in document order.
    pub tasks: Vec<Task>,

    /// Accounts in document order.
    pub accounts: Vec<Account>,
}

impl Settings {
    /// Reload interval as a `Duration`. Negative values clamp to zero.
    pub fn reload_interval(&self) -> Duration {
        Duration::from_secs(self.reload_delay.max(0) as u64)
    }

    /// Total number of metric entries across all tasks.
    pub fn metric_count(&self) -> usize {
        self.tasks.iter().map(|t| t.metrics.len()).sum()
    }
}

/// A named group of metrics to poll.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub name: String,

    /// Empty means "resolve elsewhere".
    #[serde(rename = "default_region", skip_serializing_if = "String::is_empty")]
    pub region: String,

    pub metrics: Vec<Metric>,
}

impl Task {
    pub fn default_region(&self) -> Option<&str> {
        non_empty(&self.region)
    }
}

/// A cloud account (or role) to poll as.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub name: String,

    #[serde(rename = "default_region", skip_serializing_if = "String::is_empty")]
    pub region: String,

    /// Role to assume. Empty means "use the caller's own credentials".
    #[serde(rename = "rolearn")]
    pub role_arn: String,
}

impl Account {
    /// The account returned when a lookup finds no match.
    pub fn fallback() -> Self {
        Self {
            name: DEFAULT_ACCOUNT_NAME.to_string(),
            region: String::new(),
            role_arn: String::new(),
        }
    }

    pub fn default_region(&self) -> Option<&str> {
        non_empty(&self.region)
    }

    pub fn role_arn(&self) -> Option<&str> {
        non_empty(&self.role_arn)
    }

    /// True for the synthesized fallback account.
    pub fn is_fallback(&self) -> bool {
        self.name == DEFAULT_ACCOUNT_NAME && self.role_arn.is_empty()
    }
}

/// A present-but-null key reads as the zero value, same as an absent one.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}
