//! Single-pass scanner that turns raw text into path segments.
//!
//! A scan starts from a [`Root`] and then consumes any number of text
//! components into one running segment list. Segments contributed by the
//! root are protected: a `..` in a later component can never remove them.

use std::borrow::Cow;

use crate::error::{Error, Result};

use super::classify::{classify, CharClass, DRIVE_WINDOW};
use super::segment::push_segment;
use super::types::UniPath;

/// Where a build starts from.
///
/// # Examples
///
/// ```
/// use unipath::path::Root;
/// use unipath::UniPath;
///
/// let base = UniPath::parse("/srv/www").unwrap();
///
/// // A typed root keeps its flag and its segments are protected.
/// let p = UniPath::build(&base, ["../../etc"]).unwrap();
/// assert_eq!(p.to_string(), "/srv/www/etc");
///
/// // A text root is scanned like any other component.
/// let p = UniPath::build("a/b", ["c"]).unwrap();
/// assert_eq!(p.to_string(), "a/b/c");
///
/// let p = UniPath::build(Root::None, ["a", "..", "b"]).unwrap();
/// assert_eq!(p.to_string(), "b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Root<'a> {
    /// No root; every component may be popped by a later `..`.
    None,
    /// Raw text scanned before the components.
    Text(Cow<'a, str>),
    /// A previously built value whose segments and flag are reused.
    Path(&'a UniPath),
}

impl<'a> From<&'a str> for Root<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Root<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for Root<'_> {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl<'a> From<&'a UniPath> for Root<'a> {
    fn from(path: &'a UniPath) -> Self {
        Self::Path(path)
    }
}

impl<'a, T> From<Option<T>> for Root<'a>
where
    T: Into<Root<'a>>,
{
    fn from(root: Option<T>) -> Self {
        root.map_or(Self::None, Into::into)
    }
}

/// Build a path from a root and a sequence of text components.
///
/// # Errors
///
/// Returns [`Error::InvalidCharacter`] or [`Error::InvalidSegment`] if any
/// fragment fails validation. No partial value is produced.
pub fn build<'a, I, S>(root: impl Into<Root<'a>>, components: I) -> Result<UniPath>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scanner = Scanner::with_root(root.into())?;
    for component in components {
        scanner.scan(component.as_ref())?;
    }
    Ok(scanner.finish())
}

/// Build a path from UTF-16 text, combining surrogate pairs before scanning.
///
/// # Errors
///
/// Returns [`Error::InvalidCharacter`] for an unpaired surrogate, and any
/// error [`build`] would return for the decoded text.
pub fn build_utf16(units: &[u16]) -> Result<UniPath> {
    let mut text = String::with_capacity(units.len());
    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(c) => text.push(c),
            Err(err) => {
                log::debug!("unpaired surrogate {:#06x}", err.unpaired_surrogate());
                return Err(Error::InvalidCharacter {
                    character: char::REPLACEMENT_CHARACTER,
                    offset: text.len(),
                    fragment: String::from_utf16_lossy(units),
                });
            }
        }
    }
    build(text, std::iter::empty::<&str>())
}

/// Working state of one build call.
struct Scanner {
    segments: Vec<String>,
    absolute: Option<bool>,
    /// Segments below this index may not be popped by `..`.
    boundary: usize,
    /// Set by a tolerated colon, cleared by the next separator.
    colon_seen: bool,
}

impl Scanner {
    fn with_root(root: Root<'_>) -> Result<Self> {
        let mut scanner = Self {
            segments: Vec::new(),
            absolute: None,
            boundary: 0,
            colon_seen: false,
        };
        match root {
            Root::None => {}
            Root::Text(text) => scanner.scan(&text)?,
            Root::Path(path) => {
                scanner.segments.extend(path.segments().iter().cloned());
                scanner.absolute = Some(path.is_absolute());
            }
        }
        scanner.boundary = scanner.segments.len();
        Ok(scanner)
    }

    fn scan(&mut self, fragment: &str) -> Result<()> {
        // Byte range of the pending span, whitespace-trimmed on both ends.
        let mut start: Option<usize> = None;
        let mut end = 0;

        for (offset, c) in fragment.char_indices() {
            match classify(c) {
                CharClass::Separator => {
                    self.flush(fragment, start.take(), end)?;
                    // Decided after the flush: a leading span that resolves to
                    // nothing (".", "..", blanks) still leaves the list empty.
                    if self.absolute.is_none() {
                        let absolute = self.segments.is_empty();
                        log::trace!("absolute={absolute} decided at offset {offset} of {fragment:?}");
                        self.absolute = Some(absolute);
                    }
                    self.colon_seen = false;
                    continue;
                }
                CharClass::Whitespace => continue,
                CharClass::Illegal | CharClass::Control => {
                    return Err(invalid_character(c, offset, fragment));
                }
                CharClass::Colon => {
                    if self.segments.len() > DRIVE_WINDOW {
                        return Err(invalid_character(c, offset, fragment));
                    }
                    log::trace!("colon accepted at offset {offset} of {fragment:?}");
                    self.colon_seen = true;
                }
                CharClass::Ordinary => {
                    if self.colon_seen && self.segments.len() > DRIVE_WINDOW {
                        return Err(invalid_character(c, offset, fragment));
                    }
                }
            }
            start.get_or_insert(offset);
            end = offset + c.len_utf8();
        }

        self.flush(fragment, start, end)
    }

    fn flush(&mut self, fragment: &str, start: Option<usize>, end: usize) -> Result<()> {
        match start {
            Some(start) => push_segment(&mut self.segments, self.boundary, &fragment[start..end]),
            None => Ok(()),
        }
    }

    fn finish(self) -> UniPath {
        UniPath::from_parts(self.absolute.unwrap_or(false), self.segments)
    }
}

fn invalid_character(character: char, offset: usize, fragment: &str) -> Error {
    Error::InvalidCharacter {
        character,
        offset,
        fragment: fragment.to_string(),
    }
}
