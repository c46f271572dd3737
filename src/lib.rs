//! CloudWatch Poller Configuration Library
//!
//! Schema, loader and lookups for the poller's YAML configuration.

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod paths;
