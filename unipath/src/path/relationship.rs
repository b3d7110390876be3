//! Path relationship checking.
//!
//! This module determines how two path values relate to each other in the
//! hierarchy: whether one is an ancestor or descendant of the other.

use super::types::UniPath;

/// Relationship between two paths.
///
/// Paths with different absolute flags are never hierarchically related.
///
/// # Examples
///
/// ```
/// use unipath::path::PathRelationship;
/// use unipath::UniPath;
///
/// let parent = UniPath::parse("/home/user").unwrap();
/// let child = UniPath::parse("/home/user/project").unwrap();
///
/// assert_eq!(
///     PathRelationship::between(&parent, &child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathRelationship {
    /// The first path is a proper prefix of the second.
    Ancestor,

    /// The second path is a proper prefix of the first.
    Descendant,

    /// The paths are equal.
    Same,

    /// Neither path is a prefix of the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// Segments are compared exactly. The empty path of a given flag is an
    /// ancestor of every non-empty path with the same flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use unipath::path::PathRelationship;
    /// use unipath::UniPath;
    ///
    /// let p = |s: &str| UniPath::parse(s).unwrap();
    ///
    /// assert_eq!(PathRelationship::between(&p("/a"), &p("/a/b")), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between(&p("/a/b"), &p("/a")), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between(&p("/a"), &p("\\a\\")), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between(&p("/a"), &p("/b")), PathRelationship::Unrelated);
    /// assert_eq!(PathRelationship::between(&p("/a"), &p("a/b")), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &UniPath, path2: &UniPath) -> Self {
        if path1 == path2 {
            return Self::Same;
        }
        if path1.is_absolute() != path2.is_absolute() {
            return Self::Unrelated;
        }

        let (s1, s2) = (path1.segments(), path2.segments());
        if s2.starts_with(s1) {
            Self::Ancestor
        } else if s1.starts_with(s2) {
            Self::Descendant
        } else {
            Self::Unrelated
        }
    }

    /// Check if the relationship is hierarchical (not unrelated).
    ///
    /// # Examples
    ///
    /// ```
    /// use unipath::path::PathRelationship;
    ///
    /// assert!(PathRelationship::Ancestor.is_hierarchical());
    /// assert!(PathRelationship::Same.is_hierarchical());
    /// assert!(!PathRelationship::Unrelated.is_hierarchical());
    /// ```
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if `path` is within `directory` (descendant or same).
    #[must_use]
    pub fn is_within(path: &UniPath, directory: &UniPath) -> bool {
        matches!(
            Self::between(path, directory),
            Self::Descendant | Self::Same
        )
    }

    /// Check if `path` contains `other` (ancestor or same).
    #[must_use]
    pub fn contains(path: &UniPath, other: &UniPath) -> bool {
        matches!(Self::between(path, other), Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    #[must_use]
    pub fn description(&self, path1: &UniPath, path2: &UniPath) -> String {
        match self {
            Self::Ancestor => format!("{path1} is an ancestor of {path2}"),
            Self::Descendant => format!("{path1} is a descendant of {path2}"),
            Self::Same => format!("{path1} and {path2} are the same path"),
            Self::Unrelated => format!("{path1} and {path2} are unrelated paths"),
        }
    }
}
