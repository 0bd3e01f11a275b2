//! Certificate artifacts on disk

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

use crate::domain::value_objects::{domain_from_certificate_file, CertificatePaths};

use super::CertificateMaterial;

/// Write `<domain>.crt`, `<domain>.key` and `<domain>.pem`, creating `dir`.
pub fn write_artifacts(paths: &CertificatePaths, material: &CertificateMaterial) -> io::Result<()> {
    if let Some(dir) = paths.certificate.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(&paths.certificate, &material.certificate_pem)?;
    fs::write(&paths.private_key, &material.private_key_pem)?;
    restrict_permissions(&paths.private_key)?;
    fs::write(&paths.bundle, material.bundle())?;
    restrict_permissions(&paths.bundle)?;
    Ok(())
}

/// Delete whichever of the three artifacts exist.
pub fn remove_artifacts(paths: &CertificatePaths) -> io::Result<()> {
    for path in paths.all() {
        match fs::remove_file(path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Domains with a `.crt` in `dir`, sorted. A missing directory lists nothing.
pub fn list_domains(dir: &Path) -> io::Result<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut domains = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(domain) = entry
            .file_name()
            .to_str()
            .and_then(domain_from_certificate_file)
        {
            domains.push(domain.to_string());
        }
    }
    domains.sort();
    Ok(domains)
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}
