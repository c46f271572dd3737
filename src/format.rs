//! Output formatting for the inspection commands.

use crate::config::Settings;
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

/// Output format for printed configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Render any model value in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(value)?;
            json.push('\n');
            json
        }
    };
    Ok(out)
}

/// One line per task and account, for `check`.
pub fn format_summary(settings: &Settings) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "auto_reload: {} (every {}s)\n",
        settings.auto_reload,
        settings.reload_interval().as_secs()
    ));

    out.push_str(&format!("tasks ({}):\n", settings.tasks.len()));
    for task in &settings.tasks {
        out.push_str(&format!(
            "  - {} [{}] {} metric(s)\n",
            task.name,
            task.default_region().unwrap_or("-"),
            task.metrics.len()
        ));
    }

    out.push_str(&format!("accounts ({}):\n", settings.accounts.len()));
    for account in &settings.accounts {
        out.push_str(&format!(
            "  - {} [{}] {}\n",
            account.name,
            account.default_region().unwrap_or("-"),
            account.role_arn().unwrap_or("default credentials")
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Account, load_str};

    #[test]
    fn test_render_json() {
        let json = render(&Account::fallback(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "default");
        assert_eq!(value["rolearn"], "");
        assert!(value.get("default_region").is_none());
    }

    #[test]
    fn test_render_yaml_reparses() {
        let settings = load_str(
            "tasks:\n  - name: billing\n    metrics:\n      - aws_metric_name: EstimatedCharges\n        delay_seconds: 0\n",
        )
        .unwrap();
        let yaml = render(&settings, OutputFormat::Yaml).unwrap();
        assert_eq!(load_str(&yaml).unwrap(), settings);
    }

    #[test]
    fn test_summary_lists_tasks_and_accounts() {
        let settings = load_str(
            "tasks:\n  - name: billing\n    default_region: us-east-1\naccounts:\n  - name: prod\n",
        )
        .unwrap();
        let summary = format_summary(&settings);
        assert!(summary.contains("tasks (1):"));
        assert!(summary.contains("  - billing [us-east-1] 0 metric(s)"));
        assert!(summary.contains("  - prod [-] default credentials"));
    }
}
