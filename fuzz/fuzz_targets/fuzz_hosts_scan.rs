#![no_main]

use bootapp::domain::services::hosts_format::{
    lookup_address, scan_records, split_lines, strip_project,
};
use bootapp::domain::services::DEFAULT_MARKER;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let (lines, _) = split_lines(content);

        let records = scan_records(&lines, DEFAULT_MARKER);
        for record in &records {
            let _ = lookup_address(&lines, &record.hostname);
            let stripped = strip_project(&lines, DEFAULT_MARKER, &record.project);
            assert!(scan_records(&stripped, DEFAULT_MARKER)
                .iter()
                .all(|r| r.project != record.project));
        }
    }
});
