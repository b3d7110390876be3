//! Pure operations over path values.
//!
//! None of these mutate `self`. `resolve` and `concat` run the scanner again
//! with `self` as a protected root, so a `..` in the appended part can never
//! climb above `self`.

use crate::error::{Error, Result};

use super::types::UniPath;

const PARENT: &str = "..";

impl UniPath {
    /// All segments but the last, with the same absolute flag.
    ///
    /// Returns `None` if the path has no segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use unipath::UniPath;
    ///
    /// let p = UniPath::parse("/user/documents/file.txt").unwrap();
    /// assert_eq!(p.parent().unwrap().to_string(), "/user/documents");
    /// assert!(UniPath::root().parent().is_none());
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.segments().split_last()?;
        Some(Self::from_parts(self.is_absolute(), rest.to_vec()))
    }

    /// The half-open slice `begin..end` of the segments.
    ///
    /// The result is absolute only when `begin == 0` and `self` is absolute.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] unless `begin <= end <= segment_count()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use unipath::UniPath;
    ///
    /// let p = UniPath::parse("/a/b/c/d").unwrap();
    /// assert_eq!(p.sub(0, 2).unwrap().to_string(), "/a/b");
    /// assert_eq!(p.sub(1, 3).unwrap().to_string(), "b/c");
    /// assert!(p.sub(3, 2).is_err());
    /// ```
    pub fn sub(&self, begin: usize, end: usize) -> Result<Self> {
        let len = self.segment_count();
        if begin > end || end > len {
            return Err(Error::InvalidRange { begin, end, len });
        }
        let absolute = begin == 0 && self.is_absolute();
        Ok(Self::from_parts(absolute, self.segments()[begin..end].to_vec()))
    }

    /// Whether the leading segments of `self` equal all segments of `other`.
    ///
    /// An empty `other`, or one with more segments than `self`, never
    /// matches. The absolute flags are not compared.
    #[must_use]
    pub fn starts_with(&self, other: &Self) -> bool {
        !other.is_empty()
            && other.segment_count() <= self.segment_count()
            && self.segments().iter().zip(other.segments()).all(|(a, b)| a == b)
    }

    /// Whether the trailing segments of `self` equal all segments of `other`.
    ///
    /// Follows the same rules as [`UniPath::starts_with`].
    #[must_use]
    pub fn ends_with(&self, other: &Self) -> bool {
        !other.is_empty()
            && other.segment_count() <= self.segment_count()
            && self
                .segments()
                .iter()
                .rev()
                .zip(other.segments().iter().rev())
                .all(|(a, b)| a == b)
    }

    /// [`UniPath::starts_with`] against parsed text.
    ///
    /// # Errors
    ///
    /// Returns an error if `other` does not parse.
    pub fn starts_with_str(&self, other: &str) -> Result<bool> {
        Ok(self.starts_with(&Self::parse(other)?))
    }

    /// [`UniPath::ends_with`] against parsed text.
    ///
    /// # Errors
    ///
    /// Returns an error if `other` does not parse.
    pub fn ends_with_str(&self, other: &str) -> Result<bool> {
        Ok(self.ends_with(&Self::parse(other)?))
    }

    /// The relative path that leads from `self` to `other`.
    ///
    /// If `other` starts with `self`, this is the remainder of `other`.
    /// Otherwise it climbs with `..` out of the part of `self` that is not
    /// shared with `other` and descends into the rest of `other`. The result
    /// is always relative.
    ///
    /// # Examples
    ///
    /// ```
    /// use unipath::UniPath;
    ///
    /// let base = UniPath::parse("a/b/c").unwrap();
    /// let target = UniPath::parse("a/x/y").unwrap();
    /// assert_eq!(base.relativize(&target).to_string(), "../../x/y");
    /// ```
    #[must_use]
    pub fn relativize(&self, other: &Self) -> Self {
        let ours = self.segments();
        let theirs = other.segments();
        if other.starts_with(self) {
            return Self::from_parts(false, theirs[ours.len()..].to_vec());
        }
        let common = ours
            .iter()
            .zip(theirs)
            .take_while(|(a, b)| a == b)
            .count();
        let segments = std::iter::repeat(PARENT.to_string())
            .take(ours.len() - common)
            .chain(theirs[common..].iter().cloned())
            .collect();
        Self::from_parts(false, segments)
    }

    /// [`UniPath::relativize`] against parsed text.
    ///
    /// # Errors
    ///
    /// Returns an error if `other` does not parse.
    pub fn relativize_str(&self, other: &str) -> Result<Self> {
        Ok(self.relativize(&Self::parse(other)?))
    }

    /// Resolve `other` against `self`.
    ///
    /// An absolute `other` is returned unchanged. Otherwise its segments are
    /// appended to `self`, with `self` acting as a root that `..` cannot
    /// climb out of.
    ///
    /// # Errors
    ///
    /// Returns a scan error if an appended segment is not valid at its new
    /// position (for example a colon beyond the drive window).
    ///
    /// # Examples
    ///
    /// ```
    /// use unipath::UniPath;
    ///
    /// let base = UniPath::parse("user/documents").unwrap();
    /// let file = UniPath::parse("file.txt").unwrap();
    /// assert_eq!(base.resolve(&file).unwrap().to_string(), "user/documents/file.txt");
    ///
    /// let abs = UniPath::parse("/absolute/path").unwrap();
    /// assert_eq!(base.resolve(&abs).unwrap(), abs);
    /// ```
    pub fn resolve(&self, other: &Self) -> Result<Self> {
        if other.is_absolute() {
            return Ok(other.clone());
        }
        Self::build(self, other.segments())
    }

    /// [`UniPath::resolve`] against parsed text.
    ///
    /// The text is parsed on its own first, so a leading `..` or `.` that
    /// collapses before the first separator makes it absolute, and it is
    /// returned as is. Use [`UniPath::concat_str`] to keep it under `self`.
    ///
    /// # Errors
    ///
    /// Returns an error if `other` does not parse or does not resolve.
    pub fn resolve_str(&self, other: &str) -> Result<Self> {
        self.resolve(&Self::parse(other)?)
    }

    /// Append the segments of `other` to `self`, whatever `other`'s flag.
    ///
    /// # Errors
    ///
    /// Same as [`UniPath::resolve`].
    ///
    /// # Examples
    ///
    /// ```
    /// use unipath::UniPath;
    ///
    /// let base = UniPath::parse("/user").unwrap();
    /// let other = UniPath::parse("/documents").unwrap();
    /// assert_eq!(base.concat(&other).unwrap().to_string(), "/user/documents");
    /// ```
    pub fn concat(&self, other: &Self) -> Result<Self> {
        Self::build(self, other.segments())
    }

    /// Scan `other` as raw text appended to `self`.
    ///
    /// # Errors
    ///
    /// Returns a scan error if `other` is not valid at its new position.
    pub fn concat_str(&self, other: &str) -> Result<Self> {
        Self::build(self, [other])
    }
}
