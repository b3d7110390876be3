//! The immutable path value.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

use super::scanner::{self, Root};

/// A platform-independent hierarchical path.
///
/// A `UniPath` is an ordered list of non-empty segments plus a flag telling
/// whether the path is anchored at a root. Values are immutable; every
/// operation returns a new value.
///
/// Equality (`==`) is exact and case-sensitive. [`UniPath::eq_ignore_case`]
/// compares with per-character lower-case folding, and the [`Hash`]
/// implementation folds case too, so values that are equal under either
/// comparison hash identically.
///
/// # Examples
///
/// ```
/// use unipath::UniPath;
///
/// let path = UniPath::parse("/home//user\\docs/./report.txt").unwrap();
/// assert!(path.is_absolute());
/// assert_eq!(path.segment_count(), 4);
/// assert_eq!(path.to_string(), "/home/user/docs/report.txt");
/// assert_eq!(path.file_extension(), "txt");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniPath {
    absolute: bool,
    segments: Vec<String>,
}

impl UniPath {
    /// The empty relative path.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            absolute: false,
            segments: Vec::new(),
        }
    }

    /// The absolute path with no segments, rendered as `/`.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            absolute: true,
            segments: Vec::new(),
        }
    }

    /// Wrap already-validated parts. Callers guarantee the segment invariants.
    pub(crate) fn from_parts(absolute: bool, segments: Vec<String>) -> Self {
        Self { absolute, segments }
    }

    /// Build a path from a root and any number of text components.
    ///
    /// The root may be a `&str`/`String`, a `&UniPath`, a native
    /// `&std::path::Path`, or [`Root::None`]. Segments contributed by the root
    /// cannot be removed by a `..` in the components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCharacter`] or [`Error::InvalidSegment`] if any
    /// fragment fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use unipath::UniPath;
    ///
    /// let p = UniPath::build("user", ["..", "other", "file.txt"]).unwrap();
    /// assert_eq!(p.to_string(), "user/other/file.txt");
    ///
    /// assert!(UniPath::build("user", ["<x>"]).is_err());
    /// ```
    pub fn build<'a, I, S>(root: impl Into<Root<'a>>, components: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        scanner::build(root, components)
    }

    /// Parse a single piece of text.
    ///
    /// # Errors
    ///
    /// Same as [`UniPath::build`].
    ///
    /// # Examples
    ///
    /// ```
    /// use unipath::UniPath;
    ///
    /// let p = UniPath::parse("user//documents\\\\file.txt").unwrap();
    /// assert_eq!(p.to_string(), "user/documents/file.txt");
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        scanner::build(text, std::iter::empty::<&str>())
    }

    /// Parse UTF-16 text, combining surrogate pairs into single code points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCharacter`] for an unpaired surrogate, plus
    /// anything [`UniPath::parse`] may return.
    pub fn from_utf16(units: &[u16]) -> Result<Self> {
        scanner::build_utf16(units)
    }

    /// Whether the path is anchored at a root.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Whether the path has no segments (it may still be absolute).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segments, root to leaf.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Iterate over the segments as string slices.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments.iter().map(String::as_str)
    }

    /// Number of segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// The segment at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index >= segment_count()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use unipath::UniPath;
    ///
    /// let p = UniPath::parse("user/documents/file.txt").unwrap();
    /// assert_eq!(p.segment(0).unwrap(), "user");
    /// assert!(p.segment(3).is_err());
    /// ```
    pub fn segment(&self, index: usize) -> Result<&str> {
        self.segments
            .get(index)
            .map(String::as_str)
            .ok_or(Error::IndexOutOfBounds {
                index,
                len: self.segments.len(),
            })
    }

    /// The last segment.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// The last segment up to its last `.`, or the whole segment if it has no
    /// extension.
    ///
    /// A leading dot does not start an extension, so `.profile` is its own
    /// base name.
    ///
    /// # Examples
    ///
    /// ```
    /// use unipath::UniPath;
    ///
    /// assert_eq!(UniPath::parse("a/archive.tar.gz").unwrap().file_base_name(), Some("archive.tar"));
    /// assert_eq!(UniPath::parse("a/.profile").unwrap().file_base_name(), Some(".profile"));
    /// assert_eq!(UniPath::new().file_base_name(), None);
    /// ```
    #[must_use]
    pub fn file_base_name(&self) -> Option<&str> {
        self.file_name()
            .map(|name| split_extension(name).map_or(name, |(base, _)| base))
    }

    /// The text after the last `.` of the last segment, or `""` when there is
    /// no extension or no segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use unipath::UniPath;
    ///
    /// assert_eq!(UniPath::parse("a/archive.tar.gz").unwrap().file_extension(), "gz");
    /// assert_eq!(UniPath::parse("a/.profile").unwrap().file_extension(), "");
    /// assert_eq!(UniPath::parse("a/Makefile").unwrap().file_extension(), "");
    /// ```
    #[must_use]
    pub fn file_extension(&self) -> &str {
        self.file_name()
            .and_then(split_extension)
            .map_or("", |(_, extension)| extension)
    }

    /// Compare with `other`, folding each character to lower case.
    ///
    /// # Examples
    ///
    /// ```
    /// use unipath::UniPath;
    ///
    /// let a = UniPath::build("User", ["Documents"]).unwrap();
    /// let b = UniPath::build("user", ["documents"]).unwrap();
    /// assert!(a.eq_ignore_case(&b));
    /// assert_ne!(a, b);
    /// ```
    #[must_use]
    pub fn eq_ignore_case(&self, other: &Self) -> bool {
        self.absolute == other.absolute
            && self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(a, b)| fold(a).eq(fold(b)))
    }

    /// A stable, case-folded hash of the segments.
    ///
    /// Each segment hashes as `h = 31 * h + c` over its lower-cased code
    /// points, and segment hashes combine the same way. Values that are equal
    /// under [`UniPath::eq_ignore_case`] always produce the same code.
    #[must_use]
    pub fn hash_code(&self) -> u32 {
        self.segments.iter().fold(0u32, |acc, segment| {
            let h = fold(segment).fold(0u32, |h, c| h.wrapping_mul(31).wrapping_add(u32::from(c)));
            acc.wrapping_mul(31).wrapping_add(h)
        })
    }

    /// The canonical text of the path as a native `PathBuf`.
    #[must_use]
    pub fn to_path_buf(&self) -> std::path::PathBuf {
        std::path::PathBuf::from(self.to_string())
    }
}

/// Split `name` at its last `.`, ignoring a dot in first position.
fn split_extension(name: &str) -> Option<(&str, &str)> {
    match name.rfind('.') {
        Some(0) | None => None,
        Some(dot) => Some((&name[..dot], &name[dot + 1..])),
    }
}

fn fold(segment: &str) -> impl Iterator<Item = char> + '_ {
    segment.chars().flat_map(char::to_lowercase)
}

impl Hash for UniPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.absolute.hash(state);
        state.write_usize(self.segments.len());
        for segment in &self.segments {
            for c in fold(segment) {
                state.write_u32(u32::from(c));
            }
            state.write_u8(0xff);
        }
    }
}

impl fmt::Display for UniPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.absolute {
            f.write_str("/")?;
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl FromStr for UniPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for UniPath {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for UniPath {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl<'a> IntoIterator for &'a UniPath {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl Serialize for UniPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for UniPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
