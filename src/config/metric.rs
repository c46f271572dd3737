//! Metric polling definition and its defaulting rule.
//!
//! A metric entry is parsed in two phases. The document is first read into a
//! [`MetricEntry`], where every field is optional so that "absent" and
//! "present with value 0" stay distinguishable. The entry is then overlaid
//! onto [`Metric::default()`], which carries the polling-window defaults.
//! Fields present in the document win, absent fields keep the seeded value.

use crate::error::{ConfigError, ConfigResult};
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default aggregation period in seconds.
pub const DEFAULT_PERIOD_SECONDS: i64 = 60;

/// Default look-back window in seconds.
pub const DEFAULT_RANGE_SECONDS: i64 = 600;

/// Default delay behind "now" in seconds.
pub const DEFAULT_DELAY_SECONDS: i64 = 600;

/// A single metric to poll from the monitoring API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MetricEntry")]
pub struct Metric {
    #[serde(rename = "aws_namespace")]
    pub namespace: String,

    #[serde(rename = "aws_metric_name")]
    pub name: String,

    /// Statistic kinds to request, in document order. Duplicates are kept.
    #[serde(rename = "aws_statistics")]
    pub statistics: Vec<String>,

    /// Dimension names to group by.
    #[serde(rename = "aws_dimensions", skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<String>,

    /// Fixed allow-list of values per dimension.
    #[serde(
        rename = "aws_dimensions_select",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub dimensions_select: BTreeMap<String, Vec<String>>,

    /// Regular expression per dimension that values must match.
    #[serde(
        rename = "aws_dimensions_select_regex",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub dimensions_select_regex: BTreeMap<String, String>,

    /// Parameter-store names per dimension, resolved by the poller.
    #[serde(
        rename = "aws_dimensions_select_param",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub dimensions_select_param: BTreeMap<String, Vec<String>>,

    pub range_seconds: i64,
    pub period_seconds: i64,
    pub delay_seconds: i64,
}

impl Default for Metric {
    /// The seed every parsed entry is overlaid onto: polling-window defaults
    /// set, everything else empty.
    fn default() -> Self {
        Self {
            namespace: String::new(),
            name: String::new(),
            statistics: Vec::new(),
            dimensions: Vec::new(),
            dimensions_select: BTreeMap::new(),
            dimensions_select_regex: BTreeMap::new(),
            dimensions_select_param: BTreeMap::new(),
            range_seconds: DEFAULT_RANGE_SECONDS,
            period_seconds: DEFAULT_PERIOD_SECONDS,
            delay_seconds: DEFAULT_DELAY_SECONDS,
        }
    }
}

impl Metric {
    /// Compile `aws_dimensions_select_regex` into matchers.
    ///
    /// Not called during load; pollers opt in when they need the matchers.
    pub fn dimension_patterns(&self) -> ConfigResult<Vec<(&str, Regex)>> {
        self.dimensions_select_regex
            .iter()
            .map(|(dimension, pattern)| {
                Regex::new(pattern)
                    .map(|re| (dimension.as_str(), re))
                    .map_err(|e| ConfigError::invalid_pattern(dimension, pattern, e))
            })
            .collect()
    }
}

/// A metric entry exactly as it appears in the document.
///
/// `None` means the key was absent (or null); `Some(0)` is an explicit zero.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricEntry {
    pub aws_namespace: Option<String>,
    pub aws_metric_name: Option<String>,
    pub aws_statistics: Option<Vec<String>>,
    pub aws_dimensions: Option<Vec<String>>,
    pub aws_dimensions_select: Option<BTreeMap<String, Vec<String>>>,
    pub aws_dimensions_select_regex: Option<BTreeMap<String, String>>,
    pub aws_dimensions_select_param: Option<BTreeMap<String, Vec<String>>>,
    pub range_seconds: Option<i64>,
    pub period_seconds: Option<i64>,
    pub delay_seconds: Option<i64>,
}

impl MetricEntry {
    /// Apply the fields present in this entry on top of `base`.
    pub fn overlay(self, base: Metric) -> Metric {
        Metric {
            namespace: self.aws_namespace.unwrap_or(base.namespace),
            name: self.aws_metric_name.unwrap_or(base.name),
            statistics: self.aws_statistics.unwrap_or(base.statistics),
            dimensions: self.aws_dimensions.unwrap_or(base.dimensions),
            dimensions_select: self.aws_dimensions_select.unwrap_or(base.dimensions_select),
            dimensions_select_regex: self
                .aws_dimensions_select_regex
                .unwrap_or(base.dimensions_select_regex),
            dimensions_select_param: self
                .aws_dimensions_select_param
                .unwrap_or(base.dimensions_select_param),
            range_seconds: self.range_seconds.unwrap_or(base.range_seconds),
            period_seconds: self.period_seconds.unwrap_or(base.period_seconds),
            delay_seconds: self.delay_seconds.unwrap_or(base.delay_seconds),
        }
    }
}

impl From<MetricEntry> for Metric {
    fn from(entry: MetricEntry) -> Self {
        entry.overlay(Metric::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Metric {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_absent_window_fields_get_defaults() {
        let metric = parse(
            r#"
aws_namespace: AWS/Billing
aws_metric_name: EstimatedCharges
aws_statistics: [Average]
"#,
        );
        assert_eq!(metric.namespace, "AWS/Billing");
        assert_eq!(metric.name, "EstimatedCharges");
        assert_eq!(metric.statistics, vec!["Average"]);
        assert_eq!(metric.period_seconds, 60);
        assert_eq!(metric.range_seconds, 600);
        assert_eq!(metric.delay_seconds, 600);
    }

    #[test]
    fn test_explicit_zero_is_preserved() {
        let metric = parse(
            r#"
aws_namespace: AWS/EC2
aws_metric_name: CPUUtilization
period_seconds: 0
range_seconds: 0
delay_seconds: 0
"#,
        );
        assert_eq!(metric.period_seconds, 0);
        assert_eq!(metric.range_seconds, 0);
        assert_eq!(metric.delay_seconds, 0);
    }

    #[test]
    fn test_fields_default_independently() {
        let metric = parse(
            r#"
aws_namespace: AWS/ELB
aws_metric_name: RequestCount
period_seconds: 300
delay_seconds: 0
"#,
        );
        assert_eq!(metric.period_seconds, 300);
        assert_eq!(metric.range_seconds, 600);
        assert_eq!(metric.delay_seconds, 0);
    }

    #[test]
    fn test_null_window_field_keeps_default() {
        let metric = parse("aws_metric_name: Errors\nrange_seconds: ~\n");
        assert_eq!(metric.range_seconds, 600);
    }

    #[test]
    fn test_type_mismatch_fails() {
        let result: Result<Metric, _> = serde_yaml::from_str("period_seconds: not-a-number\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_dimension_filters_parse() {
        let metric = parse(
            r#"
aws_namespace: AWS/Lambda
aws_metric_name: Invocations
aws_statistics: [Sum, Sum]
aws_dimensions: [FunctionName]
aws_dimensions_select:
  FunctionName: [billing-export, invoice-mailer]
aws_dimensions_select_regex:
  Resource: "^prod-.*"
aws_dimensions_select_param:
  FunctionName: [/poller/lambda-names]
"#,
        );
        assert_eq!(metric.statistics, vec!["Sum", "Sum"]);
        assert_eq!(metric.dimensions, vec!["FunctionName"]);
        assert_eq!(
            metric.dimensions_select["FunctionName"],
            vec!["billing-export", "invoice-mailer"]
        );
        assert_eq!(metric.dimensions_select_regex["Resource"], "^prod-.*");
        assert_eq!(
            metric.dimensions_select_param["FunctionName"],
            vec!["/poller/lambda-names"]
        );
    }

    #[test]
    fn test_overlay_onto_custom_base() {
        let base = Metric {
            namespace: "AWS/SQS".to_string(),
            period_seconds: 120,
            ..Metric::default()
        };
        let entry = MetricEntry {
            aws_metric_name: Some("NumberOfMessagesSent".to_string()),
            range_seconds: Some(0),
            ..MetricEntry::default()
        };
        let metric = entry.overlay(base);
        assert_eq!(metric.namespace, "AWS/SQS");
        assert_eq!(metric.name, "NumberOfMessagesSent");
        assert_eq!(metric.period_seconds, 120);
        assert_eq!(metric.range_seconds, 0);
        assert_eq!(metric.delay_seconds, DEFAULT_DELAY_SECONDS);
    }

    #[test]
    fn test_dimension_patterns_compile() {
        let metric = parse("aws_dimensions_select_regex:\n  QueueName: \"^orders-\\\\d+$\"\n");
        let patterns = metric.dimension_patterns().unwrap();
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].0, "QueueName");
        assert!(patterns[0].1.is_match("orders-42"));
        assert!(!patterns[0].1.is_match("refunds-42"));
    }

    #[test]
    fn test_dimension_patterns_report_bad_regex() {
        let metric = parse("aws_dimensions_select_regex:\n  QueueName: \"orders-(\"\n");
        let err = metric.dimension_patterns().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidPattern { ref dimension, .. } if dimension == "QueueName"
        ));
    }

    #[test]
    fn test_serialize_omits_empty_filters() {
        let metric = parse("aws_namespace: AWS/S3\naws_metric_name: BucketSizeBytes\n");
        let yaml = serde_yaml::to_string(&metric).unwrap();
        assert!(yaml.contains("aws_namespace: AWS/S3"));
        assert!(yaml.contains("period_seconds: 60"));
        assert!(!yaml.contains("aws_dimensions"));
    }
}
