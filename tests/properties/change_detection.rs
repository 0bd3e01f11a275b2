//! Property tests for change detection between stored and requested domains.

use std::collections::BTreeSet;
use std::path::PathBuf;

use proptest::prelude::*;

use bootapp::domain::entities::ProjectInfo;
use bootapp::domain::services::{detect_changes, domains_equal, removed_domains};
use bootapp::domain::value_objects::Subnet;

fn domain() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-d]{1,2}\\.local").unwrap()
}

fn domains() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(domain(), 0..6)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: removed = old \ new as a set, each element once.
    #[test]
    fn property_removed_is_set_difference(old in domains(), new in domains()) {
        let removed = removed_domains(&old, &new);

        let old_set: BTreeSet<&String> = old.iter().collect();
        let new_set: BTreeSet<&String> = new.iter().collect();
        let expected: BTreeSet<&String> = old_set.difference(&new_set).copied().collect();
        let actual: BTreeSet<&String> = removed.iter().collect();

        prop_assert_eq!(actual, expected);
        prop_assert_eq!(removed.len(), expected_len(&old, &new));
    }

    /// PROPERTY: domain comparison ignores order and duplicates.
    #[test]
    fn property_domains_equal_ignores_order(original in domains()) {
        let mut shuffled = original.clone();
        shuffled.reverse();
        shuffled.extend(original.iter().take(1).cloned());
        prop_assert!(domains_equal(&original, &shuffled));
    }

    /// PROPERTY: previous_domains is the stored set, sorted.
    #[test]
    fn property_previous_domains_sorted(stored in domains(), requested in domains()) {
        let project = ProjectInfo::new(
            PathBuf::from("/work/p"),
            Subnet::from_slot(18),
            stored.clone(),
            stored.clone(),
        );
        let changes = detect_changes(&project, &requested, &requested);

        let expected: Vec<String> = stored
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        prop_assert_eq!(changes.previous_domain(), expected.first().map(String::as_str));
        prop_assert_eq!(changes.previous_domains, expected);
        prop_assert_eq!(changes.domain_changed, !domains_equal(&stored, &requested));
    }
}

fn expected_len(old: &[String], new: &[String]) -> usize {
    old.iter()
        .filter(|d| !new.contains(d))
        .collect::<BTreeSet<_>>()
        .len()
}
