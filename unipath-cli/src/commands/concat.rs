//! Command to append raw text to a base path.

use crate::error::CliError;
use crate::utils::{emit, load_configuration, parse_path, GlobalOptions};
use clap::Args;

/// Scan OTHER as raw text appended to BASE, whatever its leading separator.
#[derive(Args)]
pub struct ConcatCommand {
    /// Base path
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Text to append
    #[arg(value_name = "OTHER", allow_hyphen_values = true)]
    pub other: String,
}

impl ConcatCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let base = parse_path(&self.base)?;
        emit(base.concat_str(&self.other)?, &config)
    }
}
