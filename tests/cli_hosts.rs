//! Integration tests for `bootapp hosts`

mod common;

use common::TestEnv;

#[test]
fn hosts_list_shows_owned_entries_only() {
    let env = TestEnv::new();
    assert!(env
        .run(&["up", "shop", "--container", "web=172.18.0.2:shop.local,api.local"])
        .success);

    let result = env.run(&["hosts", "list", "--json"]);
    assert!(result.success, "{}", result.combined_output());

    let value: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    let entries = value["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["project"], "shop");
    assert_eq!(entries[0]["hostname"], "shop.local");
    assert_eq!(entries[1]["hostname"], "api.local");
}

#[test]
fn hosts_lookup_resolves_any_line() {
    let env = TestEnv::new();

    let result = env.run(&["hosts", "lookup", "localhost"]);
    assert!(result.success, "{}", result.combined_output());
    assert_eq!(result.stdout.trim(), "127.0.0.1");
}

#[test]
fn hosts_lookup_missing_hostname_fails() {
    let env = TestEnv::new();

    let result = env.run(&["hosts", "lookup", "nowhere.local"]);
    assert!(!result.success);
    assert!(result.stderr.contains("nowhere.local not found in hosts file"));
}
