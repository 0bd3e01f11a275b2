//! Reusable test content.

/// Hosts file content before bootapp touches it.
pub const BASE_HOSTS: &str = "127.0.0.1\tlocalhost\n::1\tlocalhost\n";

/// Registry written by an older release: single `domain` field.
pub const LEGACY_REGISTRY: &str = r#"{
  "legacy": {
    "path": "/work/legacy",
    "subnet": "172.18.0.0/16",
    "domain": "legacy.local"
  }
}
"#;

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
