//! Per-character classification used by the scanner.

/// Number of leading segments within which a `:` is accepted as a
/// drive-letter marker (for example `C:`).
pub const DRIVE_WINDOW: usize = 2;

/// The role a single code point plays while scanning path text.
///
/// # Examples
///
/// ```
/// use unipath::path::classify::{classify, CharClass};
///
/// assert_eq!(classify('/'), CharClass::Separator);
/// assert_eq!(classify('\\'), CharClass::Separator);
/// assert_eq!(classify('?'), CharClass::Illegal);
/// assert_eq!(classify(':'), CharClass::Colon);
/// assert_eq!(classify('\t'), CharClass::Whitespace);
/// assert_eq!(classify('\u{7}'), CharClass::Control);
/// assert_eq!(classify('é'), CharClass::Ordinary);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `/` or `\`.
    Separator,
    /// One of `* ? " < > |`.
    Illegal,
    /// `:`, legal only inside the drive window.
    Colon,
    /// Trimmed around a segment, preserved inside it.
    Whitespace,
    /// An ISO control character that is not whitespace.
    Control,
    /// Segment content.
    Ordinary,
}

/// Classify one code point.
///
/// Whitespace is checked before control characters, so tab, line feed and
/// the information separators U+001C..=U+001F are whitespace rather than
/// rejected controls.
#[must_use]
pub fn classify(c: char) -> CharClass {
    match c {
        '/' | '\\' => CharClass::Separator,
        '*' | '?' | '"' | '<' | '>' | '|' => CharClass::Illegal,
        ':' => CharClass::Colon,
        c if is_path_whitespace(c) => CharClass::Whitespace,
        c if c.is_control() => CharClass::Control,
        _ => CharClass::Ordinary,
    }
}

/// Whitespace as understood by the scanner.
///
/// This is Unicode white space minus the no-break spaces (which count as
/// content) and NEL (which is a control), plus the ASCII information
/// separators.
#[must_use]
pub fn is_path_whitespace(c: char) -> bool {
    match c {
        '\u{1C}'..='\u{1F}' => true,
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        c => c.is_whitespace(),
    }
}
