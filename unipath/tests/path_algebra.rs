//! Integration tests for path scanning and algebra through the public API.

use std::collections::HashSet;

use unipath::path::Root;
use unipath::{Error, ErrorKind, PathRelationship, UniPath};

fn p(text: &str) -> UniPath {
    UniPath::parse(text).unwrap()
}

// =============================================================================
// Building
// =============================================================================

#[test]
fn test_dot_collapsing() {
    let path = UniPath::build("user", [".", "documents"]).unwrap();
    assert_eq!(path.to_string(), "user/documents");
}

#[test]
fn test_bounded_backtracking() {
    let path = UniPath::build("user", ["..", "other", "file.txt"]).unwrap();
    assert_eq!(path.to_string(), "user/other/file.txt");
}

#[test]
fn test_separator_normalization() {
    assert_eq!(p("user//documents\\\\file.txt").to_string(), "user/documents/file.txt");
}

#[test]
fn test_absolute_when_first_separator_sees_no_segment() {
    assert!(p("./a").is_absolute());
    assert_eq!(p("../a").to_string(), "/a");
    assert_eq!(UniPath::build(Root::None, ["../a"]).unwrap().to_string(), "/a");
    assert!(!p("a/../b").is_absolute());
}

#[test]
fn test_whitespace_trimmed_per_segment() {
    let path = p("  my docs  /  notes .txt ");
    assert_eq!(path.segments(), ["my docs", "notes .txt"]);
}

#[test]
fn test_drive_letter_paths() {
    let path = p("C:\\Windows\\System32");
    assert!(!path.is_absolute());
    assert_eq!(path.to_string(), "C:/Windows/System32");

    let path = p("\\\\server\\share:\\x");
    assert!(path.is_absolute());
    assert_eq!(path.segment_count(), 3);
}

#[test]
fn test_colon_beyond_drive_window_rejected() {
    let err = p_err("a/b/c/d:e");
    assert_eq!(err.kind(), ErrorKind::InvalidCharacter);

    // Content after a colon is rejected once the window is passed.
    let err = UniPath::build("a", ["b", "c:", "d"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidCharacter);
}

#[test]
fn test_rejections() {
    let err = p_err("user<invalid>");
    assert!(matches!(err, Error::InvalidCharacter { character: '<', .. }));

    let err = p_err("....");
    assert!(matches!(err, Error::InvalidSegment { ref segment } if segment == "...."));

    for bad in ["a*b", "what?", "\"quoted\"", "pipe|d", "tab\u{0}null"] {
        assert!(p_err(bad).is_scan_error(), "{bad:?} should be rejected");
    }
}

#[test]
fn test_protected_root_survives_escape() {
    let base = p("/srv/www");
    let escaped = UniPath::build(&base, ["../../../etc/passwd"]).unwrap();
    assert_eq!(escaped.to_string(), "/srv/www/etc/passwd");

    let free = UniPath::build(Root::None, ["srv", "..", "..", "etc"]).unwrap();
    assert_eq!(free.to_string(), "etc");
}

#[test]
fn test_utf16_surrogate_pairs() {
    let units: Vec<u16> = "docs/\u{1F600}.png".encode_utf16().collect();
    let path = UniPath::from_utf16(&units).unwrap();
    assert_eq!(path.file_name(), Some("\u{1F600}.png"));

    let err = UniPath::from_utf16(&[0x0061, 0xD800, 0x0062]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidCharacter);
}

// =============================================================================
// Accessors
// =============================================================================

#[test]
fn test_file_parts() {
    let path = p("/home/user/archive.tar.gz");
    assert_eq!(path.file_name(), Some("archive.tar.gz"));
    assert_eq!(path.file_base_name(), Some("archive.tar"));
    assert_eq!(path.file_extension(), "gz");

    let hidden = p(".profile");
    assert_eq!(hidden.file_base_name(), Some(".profile"));
    assert_eq!(hidden.file_extension(), "");

    let empty = UniPath::new();
    assert_eq!(empty.file_name(), None);
    assert_eq!(empty.file_base_name(), None);
    assert_eq!(empty.file_extension(), "");
}

#[test]
fn test_segment_index_bounds() {
    let path = p("a/b");
    assert_eq!(path.segment(1).unwrap(), "b");
    let err = path.segment(2).unwrap_err();
    assert!(err.is_out_of_bounds());
    assert!(matches!(err, Error::IndexOutOfBounds { index: 2, len: 2 }));
}

#[test]
fn test_parent_chain_to_root() {
    let mut path = p("/a/b");
    let mut seen = vec![path.to_string()];
    while let Some(parent) = path.parent() {
        seen.push(parent.to_string());
        path = parent;
    }
    assert_eq!(seen, ["/a/b", "/a", "/"]);
}

// =============================================================================
// Algebra
// =============================================================================

#[test]
fn test_relativize_divergent_branches() {
    assert_eq!(p("a/b/c").relativize(&p("a/x/y")).to_string(), "../../x/y");
    assert_eq!(p("/a/b").relativize(&p("/a/b/c/d")).to_string(), "c/d");
}

#[test]
fn test_resolve_relativize_inverse() {
    let base = p("/projects/app");
    for target in ["/projects/app/src", "/projects/app/src/main.rs", "/projects/app"] {
        let target = p(target);
        let relative = base.relativize(&target);
        assert_eq!(base.resolve(&relative).unwrap(), target);
    }
}

#[test]
fn test_absolute_resolve_returns_argument() {
    let abs = p("/etc/hosts");
    for base in ["a/b", "/x", ""] {
        assert_eq!(p(base).resolve(&abs).unwrap(), abs);
    }
}

#[test]
fn test_concat_ignores_absolute_flag() {
    let joined = p("/user").concat(&p("/documents")).unwrap();
    assert_eq!(joined.to_string(), "/user/documents");
}

#[test]
fn test_starts_and_ends_with() {
    let path = p("/a/b/c");
    assert!(path.starts_with(&p("a/b")));
    assert!(path.ends_with(&p("b/c")));
    assert!(!path.starts_with(&UniPath::root()));
    assert!(path.ends_with_str("c").unwrap());
    assert!(path.starts_with_str("a|b").is_err());
}

#[test]
fn test_sub_ranges() {
    let path = p("/a/b/c/d");
    assert_eq!(path.sub(1, 3).unwrap().to_string(), "b/c");
    assert_eq!(path.sub(2, 2).unwrap(), UniPath::new());
    assert!(path.sub(0, 5).unwrap_err().is_out_of_bounds());
}

// =============================================================================
// Equality and hashing
// =============================================================================

#[test]
fn test_case_insensitive_equality_and_hash() {
    let upper = UniPath::build("User", ["Documents"]).unwrap();
    let lower = UniPath::build("user", ["documents"]).unwrap();
    assert_ne!(upper, lower);
    assert!(upper.eq_ignore_case(&lower));
    assert_eq!(upper.hash_code(), lower.hash_code());
}

#[test]
fn test_hash_set_deduplicates_equal_paths() {
    let set: HashSet<UniPath> = ["/a/b", "\\a\\b\\", "/a/./b", "/a/x/../b"]
        .into_iter()
        .map(p)
        .collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn test_relationship_through_public_api() {
    assert_eq!(
        PathRelationship::between(&p("/a"), &p("/a/b")),
        PathRelationship::Ancestor
    );
    assert!(PathRelationship::is_within(&p("a/b/c"), &p("a")));
}

// =============================================================================
// Conversions
// =============================================================================

#[test]
fn test_serde_round_trip() {
    let path = p("C:\\Users\\me");
    let json = serde_json::to_string(&path).unwrap();
    assert_eq!(json, "\"C:/Users/me\"");
    let back: UniPath = serde_json::from_str(&json).unwrap();
    assert_eq!(back, path);

    assert!(serde_json::from_str::<UniPath>("\"bad|path\"").is_err());
}

#[test]
fn test_native_round_trip() {
    let native = std::path::PathBuf::from("/tmp/report.txt");
    let path = UniPath::try_from(native.as_path()).unwrap();
    assert_eq!(path.to_path_buf(), native);
}

#[test]
fn test_from_str_and_try_from() {
    let parsed: UniPath = "a/b".parse().unwrap();
    assert_eq!(parsed, UniPath::try_from("a\\b").unwrap());
    assert!(UniPath::try_from(String::from("a>b")).is_err());
}

fn p_err(text: &str) -> Error {
    UniPath::parse(text).unwrap_err()
}
