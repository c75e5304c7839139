// tests/change_detection_props.rs

use proptest::prelude::*;

use repowatch::git::{has_upstream_changes, BEHIND_MARKER};

proptest! {
    #[test]
    fn marker_anywhere_means_changed(prefix in ".*", suffix in ".*") {
        let text = format!("{prefix}{BEHIND_MARKER}{suffix}");
        prop_assert!(has_upstream_changes(&text));
    }

    #[test]
    fn text_without_marker_means_unchanged(text in ".*") {
        prop_assume!(!text.contains(BEHIND_MARKER));
        prop_assert!(!has_upstream_changes(&text));
    }
}

#[test]
fn marker_is_case_sensitive() {
    assert!(!has_upstream_changes("your branch is behind 'origin/main'"));
}
