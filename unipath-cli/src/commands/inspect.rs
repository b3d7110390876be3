//! Command to build a path and show its decomposition.

use crate::error::CliError;
use crate::utils::{emit, load_configuration, GlobalOptions};
use clap::Args;
use unipath::output::PathReport;
use unipath::UniPath;

/// Build a path from one or more parts and show its decomposition.
///
/// The first part is the root; `..` in later parts never removes its
/// segments.
#[derive(Args)]
pub struct InspectCommand {
    /// Path parts, scanned in order
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub parts: Vec<String>,
}

impl InspectCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let (root, rest) = self
            .parts
            .split_first()
            .ok_or_else(|| CliError::InvalidArguments("no path given".to_string()))?;
        let path = UniPath::build(root, rest)?;
        log::debug!("built {path} from {} part(s)", self.parts.len());

        emit(PathReport::new(&path), &config)
    }
}
