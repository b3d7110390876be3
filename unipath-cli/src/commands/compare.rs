//! Command to compare two paths.

use crate::error::CliError;
use crate::utils::{emit, load_configuration, parse_path, GlobalOptions};
use clap::Args;
use unipath::output::ComparisonReport;

/// Compare two paths and show how they relate.
#[derive(Args)]
pub struct CompareCommand {
    /// First path
    #[arg(value_name = "LEFT")]
    pub left: String,

    /// Second path
    #[arg(value_name = "RIGHT")]
    pub right: String,

    /// Exit with status 1 if the paths differ
    #[arg(long)]
    pub assert_equal: bool,
}

impl CompareCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let left = parse_path(&self.left)?;
        let right = parse_path(&self.right)?;

        let report = ComparisonReport::new(&left, &right);
        let matches = report.matches(config.ignore_case());
        emit(report, &config)?;

        if self.assert_equal && !matches {
            return Err(CliError::SemanticFailure(format!(
                "Assertion failed: {left} and {right} differ"
            )));
        }
        Ok(())
    }
}
