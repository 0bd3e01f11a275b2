//! Output Rendering
//!
//! Text and JSON views for the list-style commands. Text goes to stdout as
//! aligned columns; JSON is a single document.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde_json::{json, Value};

use crate::application::CertificateSummary;
use crate::domain::entities::{HostsRecord, ProjectInfo};

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    unknown: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            unknown: "?",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[--]",
            unknown: "[??]",
        }
    }
}

/// Left-aligned columns separated by two spaces.
fn table(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let render_row = |cells: Vec<&str>| {
        let last = cells.len() - 1;
        let mut line = String::new();
        for (i, cell) in cells.into_iter().enumerate() {
            if i == last {
                line.push_str(cell);
            } else {
                let _ = write!(line, "{:<width$}  ", cell, width = widths[i]);
            }
        }
        line.trim_end().to_string()
    };

    let mut out = render_row(header.to_vec());
    out.push('\n');
    for row in rows {
        out.push_str(&render_row(row.iter().map(String::as_str).collect()));
        out.push('\n');
    }
    out
}

pub fn render_projects(projects: &BTreeMap<String, ProjectInfo>) -> String {
    if projects.is_empty() {
        return "No projects registered.\n".to_string();
    }
    let rows: Vec<Vec<String>> = projects
        .iter()
        .map(|(name, p)| {
            vec![
                name.clone(),
                p.subnet.clone(),
                p.domains.join(","),
                p.path.display().to_string(),
            ]
        })
        .collect();
    table(&["NAME", "SUBNET", "DOMAINS", "PATH"], &rows)
}

pub fn projects_json(projects: &BTreeMap<String, ProjectInfo>) -> Value {
    let projects: Vec<Value> = projects
        .iter()
        .map(|(name, p)| {
            json!({
                "name": name,
                "path": p.path.display().to_string(),
                "subnet": p.subnet,
                "domains": p.domains,
                "ssl_domains": p.ssl_domains,
            })
        })
        .collect();
    json!({ "projects": projects })
}

pub fn render_hosts(records: &[HostsRecord]) -> String {
    if records.is_empty() {
        return "No hosts entries managed by bootapp.\n".to_string();
    }
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| vec![r.project.clone(), r.address.clone(), r.hostname.clone()])
        .collect();
    table(&["PROJECT", "ADDRESS", "HOSTNAME"], &rows)
}

pub fn hosts_json(records: &[HostsRecord]) -> Value {
    let entries: Vec<Value> = records
        .iter()
        .map(|r| {
            json!({
                "project": r.project,
                "address": r.address,
                "hostname": r.hostname,
            })
        })
        .collect();
    json!({ "entries": entries })
}

pub fn render_certificates(summaries: &[CertificateSummary], unicode: bool) -> String {
    if summaries.is_empty() {
        return "No certificates found.\n".to_string();
    }
    let icons = if unicode {
        Icons::unicode()
    } else {
        Icons::ascii()
    };
    let rows: Vec<Vec<String>> = summaries
        .iter()
        .map(|s| {
            let trusted = match s.trusted {
                Some(true) => icons.check,
                Some(false) => icons.cross,
                None => icons.unknown,
            };
            vec![
                s.domain.clone(),
                trusted.to_string(),
                s.fingerprint.clone().unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();
    table(&["DOMAIN", "TRUSTED", "SHA-256"], &rows)
}

pub fn certificates_json(summaries: &[CertificateSummary]) -> Value {
    let certificates: Vec<Value> = summaries
        .iter()
        .map(|s| {
            json!({
                "domain": s.domain,
                "trusted": s.trusted,
                "fingerprint": s.fingerprint,
            })
        })
        .collect();
    json!({ "certificates": certificates })
}
