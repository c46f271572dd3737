//! Poller configuration.
//!
//! A single YAML document declares the tasks to poll and the accounts to poll
//! them as:
//!
//! ```yaml
//! auto_reload: true
//! auto_reload_delay: 300
//! tasks:
//!   - name: billing
//!     default_region: us-east-1
//!     metrics:
//!       - aws_namespace: AWS/Billing
//!         aws_metric_name: EstimatedCharges
//!         aws_statistics: [Average]
//! accounts:
//!   - name: prod
//!     rolearn: arn:aws:iam::123456789012:role/poller
//! ```
//!
//! ## Defaults
//! - `period_seconds`: 60
//! - `range_seconds`: 600
//! - `delay_seconds`: 600
//!
//! Defaults only fill keys that are absent. An explicit `0` is kept.

mod loader;
mod lookup;
mod metric;
mod shared;
mod types;

pub use loader::{load, load_str};
pub use metric::{
    DEFAULT_DELAY_SECONDS, DEFAULT_PERIOD_SECONDS, DEFAULT_RANGE_SECONDS, Metric, MetricEntry,
};
pub use shared::SharedSettings;
pub use types::*;
