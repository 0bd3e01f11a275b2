//! Parsers for macOS `security` tool output.

/// SHA-1 hashes of the certificates labelled exactly `domain` in the output of
/// `security find-certificate -a -Z -c <domain>`.
///
/// `-c` matches names by substring, so `shop.local` also finds
/// `api.shop.local`. Each listed certificate starts with its hash lines and
/// carries its name in a `"labl"<blob>="<name>"` attribute.
pub fn sha1_hashes_labelled(find_certificate_output: &str, domain: &str) -> Vec<String> {
    let mut hashes = Vec::new();
    let mut current: Option<&str> = None;

    for line in find_certificate_output.lines() {
        let trimmed = line.trim();
        if let Some(hash) = trimmed.strip_prefix("SHA-1 hash:") {
            current = Some(hash.trim());
        } else if let Some(label) = trimmed.strip_prefix("\"labl\"<blob>=") {
            if label.trim_matches('"') == domain {
                if let Some(hash) = current.take() {
                    hashes.push(hash.to_string());
                }
            }
        }
    }
    hashes
}

/// Whether `security dump-trust-settings -d` lists at least one active trust
/// setting for the certificate named exactly `domain`.
///
/// Certificates appear as `Cert N: <name>` headers followed by a
/// `Number of trust settings : K` line; `K = 0` means present but untrusted.
pub fn has_active_trust_settings(dump_output: &str, domain: &str) -> bool {
    let header_suffix = format!(": {domain}");
    let mut in_domain_block = false;

    for line in dump_output.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("Cert ") {
            in_domain_block = trimmed.ends_with(&header_suffix);
            continue;
        }
        if in_domain_block {
            if let Some(count) = trimmed.strip_prefix("Number of trust settings :") {
                if count.trim().parse::<u32>().is_ok_and(|n| n > 0) {
                    return true;
                }
                in_domain_block = false;
            }
        }
    }
    false
}
