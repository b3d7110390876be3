//! Resolution of a single scanned span into the running segment list.

use crate::error::{Error, Result};

/// Apply one trimmed span to `segments`.
///
/// - an empty span or `.` is dropped;
/// - `..` removes the last segment, unless that would cut into the first
///   `boundary` segments, in which case the token is silently absorbed;
/// - a span made only of three or more dots is rejected;
/// - anything else is appended.
///
/// # Errors
///
/// Returns [`Error::InvalidSegment`] for an all-dot span of length three or
/// more. `segments` is left untouched in that case.
///
/// # Examples
///
/// ```
/// use unipath::path::segment::push_segment;
///
/// let mut segments = vec!["a".to_string(), "b".to_string()];
/// push_segment(&mut segments, 0, "..").unwrap();
/// push_segment(&mut segments, 0, ".").unwrap();
/// push_segment(&mut segments, 0, "c").unwrap();
/// assert_eq!(segments, ["a", "c"]);
///
/// // The first segment is protected.
/// push_segment(&mut segments, 1, "..").unwrap();
/// push_segment(&mut segments, 1, "..").unwrap();
/// assert_eq!(segments, ["a"]);
///
/// assert!(push_segment(&mut segments, 0, "...").is_err());
/// ```
pub fn push_segment(segments: &mut Vec<String>, boundary: usize, span: &str) -> Result<()> {
    match span {
        "" | "." => {}
        ".." => {
            if segments.len() > boundary {
                segments.pop();
            } else {
                log::debug!(
                    "absorbed '..' at root boundary {boundary} ({} segment(s))",
                    segments.len()
                );
            }
        }
        _ if is_all_dots(span) => {
            return Err(Error::InvalidSegment {
                segment: span.to_string(),
            });
        }
        _ => segments.push(span.to_string()),
    }
    Ok(())
}

/// True if `span` is non-empty and every character is `.`.
fn is_all_dots(span: &str) -> bool {
    !span.is_empty() && span.bytes().all(|b| b == b'.')
}
