//! Common test utilities for CLI integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the developer's settings into tests.
const ISOLATED_VARS: [&str; 4] = [
    "UNIPATH_CONFIG",
    "UNIPATH_OUTPUT_FORMAT",
    "UNIPATH_IGNORE_CASE",
    "UNIPATH_LOG_MODE",
];

/// Test environment with an isolated working directory.
///
/// Commands run from a fresh temporary directory with every `UNIPATH_*`
/// variable removed, so no configuration is picked up by accident.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// A command for the unipath binary, isolated from the environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("unipath").expect("Failed to find unipath binary");
        cmd.current_dir(&self.temp_path);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Write a file inside the test directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::write(&path, contents).expect("Failed to write file");
        path
    }

    pub fn path(&self) -> &Path {
        &self.temp_path
    }
}

/// Run a command and return its stdout as a trimmed string.
#[allow(dead_code)]
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout)
        .expect("stdout is not UTF-8")
        .trim_end()
        .to_string()
}
