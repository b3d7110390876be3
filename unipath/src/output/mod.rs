//! Output formatting module for path reports.
//!
//! This module turns the result of a path operation into text, either as a
//! human-readable listing or as JSON or YAML documents.

mod formatters;

use serde::{Deserialize, Serialize};

use crate::path::{PathRelationship, UniPath};
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter, YamlFormatter};

/// Trait for formatting reports into different output formats.
pub trait ReportFormatter {
    /// Format the given report into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be serialized.
    fn format(&self, report: &Report) -> Result<String>;
}

/// Available output formats for reports.
///
/// # Examples
///
/// ```
/// use unipath::OutputFormat;
///
/// assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
/// assert_eq!(OutputFormat::default().to_string(), "human");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format.
    #[default]
    Human,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}

impl OutputFormat {
    /// Parses an output format name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not recognized.
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(format!("invalid output format: {s}")),
        }
    }

    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn ReportFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Anything a command can print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
    /// A bare path value, printed in canonical form.
    Value(UniPath),
    /// The decomposition of one path.
    Path(PathReport),
    /// The comparison of two paths.
    Comparison(ComparisonReport),
}

/// Decomposition of a single path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    /// Canonical text.
    pub path: UniPath,
    /// Whether the path is absolute.
    pub absolute: bool,
    /// The stored segments.
    pub segments: Vec<String>,
    /// Number of segments.
    pub segment_count: usize,
    /// The parent path, if any.
    pub parent: Option<UniPath>,
    /// The last segment.
    pub file_name: Option<String>,
    /// The last segment without its extension.
    pub file_base_name: Option<String>,
    /// The extension of the last segment, empty when there is none.
    pub file_extension: String,
}

impl PathReport {
    /// Build a report for `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use unipath::output::PathReport;
    /// use unipath::UniPath;
    ///
    /// let report = PathReport::new(&UniPath::parse("/srv/app.tar.gz").unwrap());
    /// assert_eq!(report.segment_count, 2);
    /// assert_eq!(report.file_base_name.as_deref(), Some("app.tar"));
    /// assert_eq!(report.file_extension, "gz");
    /// ```
    #[must_use]
    pub fn new(path: &UniPath) -> Self {
        Self {
            path: path.clone(),
            absolute: path.is_absolute(),
            segments: path.segments().to_vec(),
            segment_count: path.segment_count(),
            parent: path.parent(),
            file_name: path.file_name().map(str::to_owned),
            file_base_name: path.file_base_name().map(str::to_owned),
            file_extension: path.file_extension().to_owned(),
        }
    }
}

/// Comparison between two paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonReport {
    /// The first path.
    pub left: UniPath,
    /// The second path.
    pub right: UniPath,
    /// Exact equality.
    pub equal: bool,
    /// Case-insensitive equality.
    pub equal_ignore_case: bool,
    /// Whether `left` starts with `right`.
    pub starts_with: bool,
    /// Whether `left` ends with `right`.
    pub ends_with: bool,
    /// Hierarchical relationship of `left` to `right`.
    pub relationship: PathRelationship,
}

impl ComparisonReport {
    /// Compare `left` against `right`.
    #[must_use]
    pub fn new(left: &UniPath, right: &UniPath) -> Self {
        Self {
            left: left.clone(),
            right: right.clone(),
            equal: left == right,
            equal_ignore_case: left.eq_ignore_case(right),
            starts_with: left.starts_with(right),
            ends_with: left.ends_with(right),
            relationship: PathRelationship::between(left, right),
        }
    }

    /// Whether the paths match, optionally ignoring case.
    #[must_use]
    pub const fn matches(&self, ignore_case: bool) -> bool {
        if ignore_case {
            self.equal_ignore_case
        } else {
            self.equal
        }
    }
}

impl From<UniPath> for Report {
    fn from(path: UniPath) -> Self {
        Self::Value(path)
    }
}

impl From<PathReport> for Report {
    fn from(report: PathReport) -> Self {
        Self::Path(report)
    }
}

impl From<ComparisonReport> for Report {
    fn from(report: ComparisonReport) -> Self {
        Self::Comparison(report)
    }
}
