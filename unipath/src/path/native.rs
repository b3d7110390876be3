//! Conversions between [`UniPath`] and the host's native path types.
//!
//! Native paths are stringified lossily and then scanned like any other
//! text, so both `/` and `\` act as separators whatever the host platform.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::scanner::Root;
use super::types::UniPath;

impl<'a> From<&'a Path> for Root<'a> {
    fn from(path: &'a Path) -> Self {
        Self::Text(path.to_string_lossy())
    }
}

impl<'a> From<&'a PathBuf> for Root<'a> {
    fn from(path: &'a PathBuf) -> Self {
        Self::from(path.as_path())
    }
}

impl TryFrom<&Path> for UniPath {
    type Error = Error;

    fn try_from(path: &Path) -> Result<Self> {
        Self::build(path, std::iter::empty::<&str>())
    }
}

impl TryFrom<&PathBuf> for UniPath {
    type Error = Error;

    fn try_from(path: &PathBuf) -> Result<Self> {
        Self::try_from(path.as_path())
    }
}

impl TryFrom<PathBuf> for UniPath {
    type Error = Error;

    fn try_from(path: PathBuf) -> Result<Self> {
        Self::try_from(path.as_path())
    }
}

impl From<&UniPath> for PathBuf {
    fn from(path: &UniPath) -> Self {
        path.to_path_buf()
    }
}

impl From<UniPath> for PathBuf {
    fn from(path: UniPath) -> Self {
        path.to_path_buf()
    }
}
