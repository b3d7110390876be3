//! Report formatter implementations.

use crate::path::UniPath;
use crate::Result;

use super::{ComparisonReport, PathReport, Report, ReportFormatter};

/// Placeholder shown for absent values in human output.
const NONE: &str = "-";

/// Formatter for human-readable output.
pub struct HumanFormatter;

impl HumanFormatter {
    fn path_lines(report: &PathReport) -> Vec<String> {
        let mut lines = vec![
            format!("path:        {}", report.path),
            format!("absolute:    {}", report.absolute),
            format!("segments:    {}", report.segment_count),
        ];
        for (index, segment) in report.segments.iter().enumerate() {
            lines.push(format!("  [{index}] {segment}"));
        }
        lines.push(format!(
            "parent:      {}",
            report.parent.as_ref().map_or_else(|| NONE.to_string(), UniPath::to_string)
        ));
        lines.push(format!(
            "file name:   {}",
            report.file_name.as_deref().unwrap_or(NONE)
        ));
        lines.push(format!(
            "base name:   {}",
            report.file_base_name.as_deref().unwrap_or(NONE)
        ));
        lines.push(format!("extension:   {}", report.file_extension));
        lines
    }

    fn comparison_lines(report: &ComparisonReport) -> Vec<String> {
        vec![
            format!("left:               {}", report.left),
            format!("right:              {}", report.right),
            format!("equal:              {}", report.equal),
            format!("equal ignore case:  {}", report.equal_ignore_case),
            format!("starts with:        {}", report.starts_with),
            format!("ends with:          {}", report.ends_with),
            format!(
                "relationship:       {}",
                report.relationship.description(&report.left, &report.right)
            ),
        ]
    }
}

impl ReportFormatter for HumanFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        Ok(match report {
            Report::Value(path) => path.to_string(),
            Report::Path(report) => Self::path_lines(report).join("\n"),
            Report::Comparison(report) => Self::comparison_lines(report).join("\n"),
        })
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl ReportFormatter for YamlFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let text = serde_yaml::to_string(report)?;
        Ok(text.trim_end().to_string())
    }
}
