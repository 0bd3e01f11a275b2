//! Property tests for the hosts record layout.

use proptest::prelude::*;

use bootapp::domain::services::hosts_format::{
    join_lines, render_block, scan_records, split_lines, strip_project,
};
use bootapp::domain::services::DEFAULT_MARKER;

fn project() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,8}").unwrap()
}

fn entry() -> impl Strategy<Value = (String, String)> {
    (
        (0u8..=255, 2u8..=254).prop_map(|(slot, host)| format!("172.{slot}.0.{host}")),
        proptest::string::string_regex("[a-z]{1,8}\\.local").unwrap(),
    )
}

fn foreign_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("127.0.0.1\tlocalhost".to_string()),
        Just("# comment".to_string()),
        Just(String::new()),
        proptest::string::string_regex("10\\.0\\.0\\.[0-9]{1,2}\t[a-z]{1,6}\\.corp").unwrap(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: appending a project's block then stripping it restores the
    /// original lines exactly.
    #[test]
    fn property_strip_undoes_render(
        foreign in proptest::collection::vec(foreign_line(), 0..6),
        project in project(),
        entries in proptest::collection::vec(entry(), 1..5)
    ) {
        let original = join_lines(&foreign, true);
        let content = format!("{original}{}", render_block(DEFAULT_MARKER, &project, &entries));
        let (lines, _) = split_lines(&content);

        let stripped = strip_project(&lines, DEFAULT_MARKER, &project);
        prop_assert_eq!(stripped, foreign);
    }

    /// PROPERTY: every rendered pair is scanned back, attributed to its project.
    #[test]
    fn property_scan_finds_rendered_records(
        project in project(),
        entries in proptest::collection::vec(entry(), 1..5)
    ) {
        let (lines, _) = split_lines(&render_block(DEFAULT_MARKER, &project, &entries));
        let records = scan_records(&lines, DEFAULT_MARKER);

        prop_assert_eq!(records.len(), entries.len());
        for (record, (address, hostname)) in records.iter().zip(&entries) {
            prop_assert_eq!(&record.project, &project);
            prop_assert_eq!(&record.address, address);
            prop_assert_eq!(&record.hostname, hostname);
        }
    }
}
