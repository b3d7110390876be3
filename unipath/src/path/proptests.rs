//! Property-based tests for path scanning and algebra.

use super::relationship::PathRelationship;
use super::types::UniPath;
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

// Segment text that survives a scan unchanged apart from trimming.
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-][a-zA-Z0-9 ._-]{0,10}"
}

fn path_strategy() -> impl Strategy<Value = UniPath> {
    (any::<bool>(), prop::collection::vec(segment_strategy(), 0..8)).prop_map(
        |(absolute, parts)| {
            let text = parts.join("/");
            let text = if absolute { format!("/{text}") } else { text };
            UniPath::parse(&text).unwrap()
        },
    )
}

fn absolute_path_strategy() -> impl Strategy<Value = UniPath> {
    prop::collection::vec(segment_strategy(), 1..8)
        .prop_map(|parts| UniPath::parse(&format!("/{}", parts.join("/"))).unwrap())
}

fn std_hash(path: &UniPath) -> u64 {
    let mut hasher = DefaultHasher::new();
    path.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Canonical text parses back to the same value
    #[test]
    fn canonical_text_round_trips(path in path_strategy()) {
        let reparsed = UniPath::parse(&path.to_string()).unwrap();
        prop_assert_eq!(reparsed, path);
    }

    // Backslashes and doubled separators collapse to the same value
    #[test]
    fn separator_style_is_irrelevant(parts in prop::collection::vec(segment_strategy(), 1..6)) {
        let forward = UniPath::parse(&parts.join("/")).unwrap();
        let backward = UniPath::parse(&parts.join("\\\\")).unwrap();
        prop_assert_eq!(forward, backward);
    }

    // Scanned values never hold empty, "." or ".." segments
    #[test]
    fn scanned_segments_are_resolved(
        parts in prop::collection::vec(
            prop_oneof![segment_strategy(), Just(".".to_string()), Just("..".to_string())],
            0..10,
        )
    ) {
        let path = UniPath::build("", &parts).unwrap();
        for segment in path.iter() {
            prop_assert!(!segment.is_empty());
            prop_assert!(segment != "." && segment != "..");
            prop_assert_eq!(segment.trim(), segment);
        }
    }

    // A typed root is never climbed out of
    #[test]
    fn concat_stays_within_base(base in path_strategy(), ups in 0..6usize, leaf in segment_strategy()) {
        let mut parts = vec![".."; ups];
        parts.push(leaf.as_str());
        let resolved = base.concat_str(&parts.join("/")).unwrap();
        prop_assert!(resolved.starts_with(&base) || base.is_empty());
        prop_assert_eq!(&resolved.segments()[..base.segment_count()], base.segments());
    }

    // Resolving a relativized descendant gives back the descendant
    #[test]
    fn resolve_inverts_relativize(
        base in path_strategy(),
        tail in prop::collection::vec(segment_strategy(), 0..5),
    ) {
        let target = UniPath::build(&base, &tail).unwrap();
        let relative = base.relativize(&target);
        prop_assert!(!relative.is_absolute());
        prop_assert_eq!(base.resolve(&relative).unwrap(), target);
    }

    // An absolute argument to resolve wins
    #[test]
    fn resolve_absolute_returns_argument(base in path_strategy(), other in absolute_path_strategy()) {
        prop_assert_eq!(base.resolve(&other).unwrap(), other);
    }

    // Case-insensitive equality implies equal hashes
    #[test]
    fn case_fold_hash_consistency(path in path_strategy()) {
        let upper = UniPath::parse(&path.to_string().to_uppercase()).unwrap();
        prop_assert!(path.eq_ignore_case(&upper));
        prop_assert_eq!(path.hash_code(), upper.hash_code());
        prop_assert_eq!(std_hash(&path), std_hash(&upper));
    }

    // parent() drops exactly one segment and keeps the flag
    #[test]
    fn parent_drops_last_segment(path in path_strategy()) {
        match path.parent() {
            Some(parent) => {
                prop_assert_eq!(parent.segment_count() + 1, path.segment_count());
                prop_assert_eq!(parent.is_absolute(), path.is_absolute());
                prop_assert!(path.starts_with(&parent) || parent.is_empty());
            }
            None => prop_assert!(path.is_empty()),
        }
    }

    // sub over the full range is the path itself
    #[test]
    fn sub_full_range(path in path_strategy()) {
        let whole = path.sub(0, path.segment_count()).unwrap();
        prop_assert_eq!(whole, path);
    }

    // Path relationship is reflexive
    #[test]
    fn path_relationship_reflexive(path in path_strategy()) {
        prop_assert_eq!(PathRelationship::between(&path, &path), PathRelationship::Same);
    }

    // Relationship symmetry: if A is ancestor of B, then B is descendant of A
    #[test]
    fn path_relationship_symmetric(path1 in path_strategy(), path2 in path_strategy()) {
        let rel_12 = PathRelationship::between(&path1, &path2);
        let rel_21 = PathRelationship::between(&path2, &path1);

        let is_symmetric = matches!(
            (rel_12, rel_21),
            (PathRelationship::Ancestor, PathRelationship::Descendant)
                | (PathRelationship::Descendant, PathRelationship::Ancestor)
                | (PathRelationship::Same, PathRelationship::Same)
                | (PathRelationship::Unrelated, PathRelationship::Unrelated)
        );

        prop_assert!(is_symmetric, "Invalid symmetry: {:?} <-> {:?}", rel_12, rel_21);
    }

    // is_within and contains are consistent
    #[test]
    fn path_is_within_contains_consistent(path1 in path_strategy(), path2 in path_strategy()) {
        prop_assert_eq!(
            PathRelationship::is_within(&path1, &path2),
            PathRelationship::contains(&path2, &path1)
        );
    }

    // Extending a path always yields a descendant
    #[test]
    fn path_extension_is_descendant(base in absolute_path_strategy(), tail in prop::collection::vec(segment_strategy(), 1..5)) {
        let child = UniPath::build(&base, &tail).unwrap();
        prop_assert_eq!(PathRelationship::between(&base, &child), PathRelationship::Ancestor);
        prop_assert!(PathRelationship::is_within(&child, &base));
    }
}
