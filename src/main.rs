//! cw-poller-config
//!
//! Loads a poller configuration document and prints what tasks and accounts
//! resolve to.

use anyhow::Result;
use clap::Parser;
use cw_poller_config::cli::{Cli, Command};
use cw_poller_config::config::{self, Settings};
use cw_poller_config::format::{format_summary, render};
use cw_poller_config::logging::{self, LogTarget};
use cw_poller_config::paths::ConfigSource;
use std::borrow::Cow;
use tracing::{debug, info, warn};

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&LogTarget::parse(&cli.log), cli.verbose)?;

    let source = ConfigSource::discover(cli.config.as_deref());
    debug!(path = %source.path.display(), from = %source.kind, "Resolved config path");

    // Any load error is fatal; never continue with an empty configuration.
    let settings = config::load(&source.path)?;

    match cli.command.unwrap_or(Command::Check) {
        Command::Check => run_check(&settings, &source),
        Command::Task { name } => {
            let task = settings.get_task(&name)?;
            print!("{}", render(task, cli.format)?);
            Ok(())
        }
        Command::Account { name } => {
            let account = settings.get_account(&name);
            if matches!(account, Cow::Owned(_)) {
                info!(account = %name, "No such account, resolved to default");
            }
            print!("{}", render(account.as_ref(), cli.format)?);
            Ok(())
        }
    }
}

/// Print a summary and fail if any dimension pattern does not compile.
fn run_check(settings: &Settings, source: &ConfigSource) -> Result<()> {
    println!("{} ({})", source.path.display(), source.kind);
    print!("{}", format_summary(settings));

    let mut invalid = 0;
    for task in &settings.tasks {
        for metric in &task.metrics {
            if let Err(e) = metric.dimension_patterns() {
                warn!(task = %task.name, metric = %metric.name, "{}", e);
                println!("{}/{}: {}", task.name, metric.name, e);
                invalid += 1;
            }
        }
    }

    if invalid > 0 {
        anyhow::bail!("{} metric(s) with invalid dimension patterns", invalid);
    }
    Ok(())
}
