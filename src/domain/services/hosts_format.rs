//! Hosts Record Formats
//!
//! Records Bootapp owns in the shared hosts file are tagged with a marker.
//! The current layout puts the marker on its own comment line, followed by
//! the address line:
//!
//! ```text
//! ## bootapp:shop
//! 172.18.0.2	shop.local
//! ```
//!
//! Older versions wrote the marker as a trailing inline comment
//! (`172.18.0.2	shop.local	## bootapp:shop`), which some resolvers reject.
//! Every layout ever written is a [`RecordFormat`]; removal and listing walk
//! [`KNOWN_FORMATS`] in order, so a new layout only needs a new entry there.

use std::collections::BTreeMap;

use crate::domain::entities::HostsRecord;

pub const DEFAULT_MARKER: &str = "## bootapp";

/// A layout of tool-owned records in the hosts file.
pub trait RecordFormat: Send + Sync {
    fn name(&self) -> &'static str;

    /// `lines` with every record of `project` in this layout removed.
    fn strip_project(&self, lines: &[String], marker: &str, project: &str) -> Vec<String>;

    /// Every record in this layout, in file order.
    fn scan(&self, lines: &[String], marker: &str) -> Vec<HostsRecord>;
}

/// Current layout, then legacy layouts from newest to oldest.
pub static KNOWN_FORMATS: [&dyn RecordFormat; 2] = [&MarkerLineFormat, &InlineMarkerFormat];

/// `<marker>:<project>` comment line followed by `<address>\t<hostname>`.
pub struct MarkerLineFormat;

/// Legacy `<address>\t<hostname>\t<marker>:<project>` on one line.
pub struct InlineMarkerFormat;

pub fn marker_line(marker: &str, project: &str) -> String {
    format!("{marker}:{project}")
}

pub fn data_line(address: &str, hostname: &str) -> String {
    format!("{address}\t{hostname}")
}

/// Render records in the current layout, one marker+data pair per hostname.
/// Empty when there is nothing to write.
pub fn render_block(marker: &str, project: &str, entries: &[(String, String)]) -> String {
    let marker = marker_line(marker, project);
    entries
        .iter()
        .map(|(address, hostname)| format!("{marker}\n{}\n", data_line(address, hostname)))
        .collect()
}

/// Split file content into lines, remembering whether it ended with a newline.
pub fn split_lines(content: &str) -> (Vec<String>, bool) {
    let lines = content.lines().map(str::to_string).collect();
    (lines, content.ends_with('\n'))
}

pub fn join_lines(lines: &[String], trailing_newline: bool) -> String {
    let mut out = lines.join("\n");
    if trailing_newline && !lines.is_empty() {
        out.push('\n');
    }
    out
}

/// Remove `project`'s records in every known layout.
pub fn strip_project(lines: &[String], marker: &str, project: &str) -> Vec<String> {
    KNOWN_FORMATS
        .iter()
        .fold(lines.to_vec(), |kept, format| {
            format.strip_project(&kept, marker, project)
        })
}

/// Every tool-owned record in any known layout.
pub fn scan_records(lines: &[String], marker: &str) -> Vec<HostsRecord> {
    KNOWN_FORMATS
        .iter()
        .flat_map(|format| format.scan(lines, marker))
        .collect()
}

/// Records grouped by project name.
pub fn group_by_project(records: Vec<HostsRecord>) -> BTreeMap<String, Vec<HostsRecord>> {
    let mut grouped: BTreeMap<String, Vec<HostsRecord>> = BTreeMap::new();
    for record in records {
        grouped.entry(record.project.clone()).or_default().push(record);
    }
    grouped
}

/// Address of the first resolution line naming `hostname`, owned or not.
pub fn lookup_address(lines: &[String], hostname: &str) -> Option<String> {
    lines.iter().find_map(|line| {
        let (address, hostnames) = resolution_fields(line)?;
        hostnames
            .iter()
            .any(|h| *h == hostname)
            .then(|| address.to_string())
    })
}

/// `(address, hostnames)` of a resolution line, ignoring any inline comment.
fn resolution_fields(line: &str) -> Option<(&str, Vec<&str>)> {
    let content = line.split('#').next().unwrap_or_default();
    let mut fields = content.split_whitespace();
    let address = fields.next()?;
    let hostnames: Vec<&str> = fields.collect();
    (!hostnames.is_empty()).then_some((address, hostnames))
}

fn is_data_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    !trimmed.starts_with('#') && resolution_fields(trimmed).is_some()
}

/// Whether `line` can be the address line owned by a preceding marker line.
/// A line that carries its own inline marker is a separate legacy record.
fn is_owned_data_line(line: &str, marker: &str) -> bool {
    is_data_line(line) && !line.contains(&format!("{marker}:"))
}

/// Project named by a marker comment line, if `line` is one.
fn marker_line_project<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let project = line.trim().strip_prefix(marker)?.strip_prefix(':')?.trim();
    (!project.is_empty() && !project.contains(char::is_whitespace)).then_some(project)
}

impl RecordFormat for MarkerLineFormat {
    fn name(&self) -> &'static str {
        "marker-line"
    }

    fn strip_project(&self, lines: &[String], marker: &str, project: &str) -> Vec<String> {
        let mut kept = Vec::with_capacity(lines.len());
        let mut i = 0;
        while i < lines.len() {
            if marker_line_project(&lines[i], marker) == Some(project) {
                // Drop the marker and the address line it owns, if any. An
                // orphaned marker still takes the plain address line below it.
                let owns_next = lines
                    .get(i + 1)
                    .is_some_and(|next| is_owned_data_line(next, marker));
                i += if owns_next { 2 } else { 1 };
                continue;
            }
            kept.push(lines[i].clone());
            i += 1;
        }
        kept
    }

    fn scan(&self, lines: &[String], marker: &str) -> Vec<HostsRecord> {
        let mut records = Vec::new();
        let mut i = 0;
        while i < lines.len() {
            let Some(project) = marker_line_project(&lines[i], marker) else {
                i += 1;
                continue;
            };

            match lines
                .get(i + 1)
                .filter(|next| is_owned_data_line(next, marker))
            {
                Some(next) => {
                    if let Some((address, hostnames)) = resolution_fields(next) {
                        records.push(HostsRecord::new(address, hostnames[0], project));
                    }
                    i += 2;
                }
                // Orphaned marker
                None => i += 1,
            }
        }
        records
    }
}

impl InlineMarkerFormat {
    fn parse<'a>(line: &'a str, marker: &str) -> Option<(&'a str, &'a str, &'a str)> {
        if line.trim_start().starts_with('#') {
            return None;
        }
        let tag = format!("{marker}:");
        let at = line.find(&tag)?;
        let (address, hostnames) = resolution_fields(&line[..at])?;
        let project = line[at + tag.len()..].split_whitespace().next()?;
        Some((address, hostnames[0], project))
    }
}

impl RecordFormat for InlineMarkerFormat {
    fn name(&self) -> &'static str {
        "inline-marker"
    }

    fn strip_project(&self, lines: &[String], marker: &str, project: &str) -> Vec<String> {
        lines
            .iter()
            .filter(|line| !matches!(Self::parse(line, marker), Some((_, _, p)) if p == project))
            .cloned()
            .collect()
    }

    fn scan(&self, lines: &[String], marker: &str) -> Vec<HostsRecord> {
        lines
            .iter()
            .filter_map(|line| Self::parse(line, marker))
            .map(|(address, hostname, project)| HostsRecord::new(address, hostname, project))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(content: &str) -> Vec<String> {
        split_lines(content).0
    }

    #[test]
    fn marker_format_is_stable() {
        assert_eq!(marker_line(DEFAULT_MARKER, "myproject"), "## bootapp:myproject");
        assert_eq!(data_line("172.18.0.2", "myapp.local"), "172.18.0.2\tmyapp.local");
    }

    #[test]
    fn render_block_writes_one_pair_per_hostname() {
        let block = render_block(
            DEFAULT_MARKER,
            "myproject",
            &[
                ("172.18.0.2".to_string(), "myapp.local".to_string()),
                ("172.18.0.2".to_string(), "www.myapp.local".to_string()),
            ],
        );
        assert_eq!(
            block,
            "## bootapp:myproject\n172.18.0.2\tmyapp.local\n## bootapp:myproject\n172.18.0.2\twww.myapp.local\n"
        );
    }

    #[test]
    fn render_block_is_empty_without_entries() {
        assert_eq!(render_block(DEFAULT_MARKER, "p", &[]), "");
    }

    #[test]
    fn scan_reads_marker_line_pairs() {
        let content = "127.0.0.1\tlocalhost\n## bootapp:shop\n10.0.0.2\tshop.local\n";
        let records = scan_records(&lines(content), DEFAULT_MARKER);
        assert_eq!(records, vec![HostsRecord::new("10.0.0.2", "shop.local", "shop")]);
    }

    #[test]
    fn scan_reads_legacy_inline_records() {
        let content = "172.18.0.2\tmyapp.local\t## bootapp:myproject\n";
        let records = scan_records(&lines(content), DEFAULT_MARKER);
        assert_eq!(
            records,
            vec![HostsRecord::new("172.18.0.2", "myapp.local", "myproject")]
        );
    }

    #[test]
    fn scan_skips_orphaned_and_malformed_markers() {
        let content = "\
## bootapp:orphan
## bootapp:
## bootapp:shop
10.0.0.2\tshop.local
## bootapp:dangling
";
        let records = scan_records(&lines(content), DEFAULT_MARKER);
        assert_eq!(records, vec![HostsRecord::new("10.0.0.2", "shop.local", "shop")]);
    }

    #[test]
    fn scan_ignores_unowned_lines() {
        let content = "# This is a comment\n127.0.0.1\tlocalhost\n::1 localhost ip6-localhost\n";
        assert!(scan_records(&lines(content), DEFAULT_MARKER).is_empty());
    }

    #[test]
    fn strip_removes_both_layouts_for_project_only() {
        let content = "\
127.0.0.1\tlocalhost
## bootapp:shop
10.0.0.2\tshop.local
10.0.0.3\tapi.shop.local\t## bootapp:shop
## bootapp:shopping
10.0.0.9\tshopping.local
";
        let kept = strip_project(&lines(content), DEFAULT_MARKER, "shop");
        assert_eq!(
            kept,
            lines("127.0.0.1\tlocalhost\n## bootapp:shopping\n10.0.0.9\tshopping.local\n")
        );
    }

    #[test]
    fn strip_does_not_eat_the_next_marker_of_an_orphan() {
        let content = "## bootapp:shop\n## bootapp:blog\n10.0.0.5\tblog.local\n";
        let kept = strip_project(&lines(content), DEFAULT_MARKER, "shop");
        assert_eq!(kept, lines("## bootapp:blog\n10.0.0.5\tblog.local\n"));
    }

    #[test]
    fn strip_without_matches_is_identity() {
        let original = lines("127.0.0.1\tlocalhost\n");
        assert_eq!(strip_project(&original, DEFAULT_MARKER, "shop"), original);
    }

    #[test]
    fn lookup_matches_whole_hostnames() {
        let content = "127.0.0.1 localhost\n10.0.0.2\tshop.local\t# note\n";
        let all = lines(content);
        assert_eq!(lookup_address(&all, "shop.local"), Some("10.0.0.2".to_string()));
        assert_eq!(lookup_address(&all, "shop"), None);
        assert_eq!(lookup_address(&all, "note"), None);
    }

    #[test]
    fn join_preserves_trailing_newline() {
        let (all, trailing) = split_lines("a\nb\n");
        assert_eq!(join_lines(&all, trailing), "a\nb\n");
        let (all, trailing) = split_lines("a\nb");
        assert_eq!(join_lines(&all, trailing), "a\nb");
    }

    #[test]
    fn group_by_project_collects_records() {
        let grouped = group_by_project(vec![
            HostsRecord::new("10.0.0.2", "a.local", "a"),
            HostsRecord::new("10.0.0.3", "b.local", "b"),
            HostsRecord::new("10.0.0.2", "www.a.local", "a"),
        ]);
        assert_eq!(grouped["a"].len(), 2);
        assert_eq!(grouped["b"].len(), 1);
    }

    #[test]
    fn orphaned_marker_does_not_claim_inline_record() {
        let all = lines(
            "## bootapp:shop\n10.0.0.3\tblog.local\t## bootapp:blog\n127.0.0.1\tlocalhost\n",
        );

        let records = scan_records(&all, DEFAULT_MARKER);
        assert_eq!(records, vec![HostsRecord::new("10.0.0.3", "blog.local", "blog")]);

        let kept = strip_project(&all, DEFAULT_MARKER, "shop");
        assert_eq!(
            kept,
            vec!["10.0.0.3\tblog.local\t## bootapp:blog", "127.0.0.1\tlocalhost"]
        );
    }

    #[test]
    fn known_formats_are_ordered_current_first() {
        let names: Vec<_> = KNOWN_FORMATS.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["marker-line", "inline-marker"]);
    }
}
