//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::{
    CertificateManager, HostsEntryManager, ReconcileUseCase, RegistryUseCase, SetupUseCase,
    TeardownUseCase,
};
use crate::config::{config_path, Config};
use crate::domain::ports::{CommandRunner, HostsFile, RegistryRepository, SetupEventSink};
use crate::domain::services::SubnetAllocator;
use crate::error::{BootappError, BootappResult};
use crate::infrastructure::repositories::default_registry_path;
use crate::infrastructure::{
    system_trust_store, ConsoleEventSink, JsonEventSink, JsonRegistryRepository, LocalHostsFile,
    PrivilegedHostsFile, SystemCommandRunner,
};

/// Registry file location: `[registry] path`, else the default.
pub fn registry_path(config: &Config) -> PathBuf {
    config
        .registry
        .path
        .clone()
        .unwrap_or_else(default_registry_path)
}

pub fn registry_repository(config: &Config) -> Arc<dyn RegistryRepository> {
    Arc::new(JsonRegistryRepository::with_path(registry_path(config)))
}

fn command_runner() -> Arc<dyn CommandRunner> {
    Arc::new(SystemCommandRunner::new())
}

/// Hosts file adapter: `sudo tee` when privileged, direct writes otherwise.
pub fn hosts_file(config: &Config) -> Arc<dyn HostsFile> {
    let path = config.hosts.path.clone();
    if config.hosts.privileged {
        Arc::new(PrivilegedHostsFile::new(path, command_runner()))
    } else {
        Arc::new(LocalHostsFile::new(path))
    }
}

pub fn create_registry_use_case(config: &Config) -> RegistryUseCase {
    RegistryUseCase::new(registry_repository(config))
}

/// Fails when the configured subnet pool is inverted.
pub fn create_reconcile_use_case(config: &Config) -> BootappResult<ReconcileUseCase> {
    let pool = config.network.pool().ok_or_else(|| BootappError::Config {
        file: config_path(),
        message: format!(
            "network.subnet_start ({}) is greater than network.subnet_end ({})",
            config.network.subnet_start, config.network.subnet_end
        ),
    })?;
    Ok(ReconcileUseCase::new(
        registry_repository(config),
        SubnetAllocator::new(pool),
    ))
}

pub fn create_hosts_manager(config: &Config) -> HostsEntryManager {
    HostsEntryManager::with_marker(hosts_file(config), config.hosts.marker.clone())
}

pub fn create_certificate_manager(config: &Config) -> CertificateManager {
    CertificateManager::new(system_trust_store(command_runner()))
        .with_validity_days(config.certs.validity_days)
}

pub fn create_setup_use_case(config: &Config) -> BootappResult<SetupUseCase> {
    Ok(SetupUseCase::new(
        create_reconcile_use_case(config)?,
        create_hosts_manager(config),
        create_certificate_manager(config),
    ))
}

pub fn create_teardown_use_case(config: &Config) -> TeardownUseCase {
    TeardownUseCase::new(
        create_registry_use_case(config),
        create_hosts_manager(config),
    )
}

/// NDJSON on stdout with `--json`, human lines on stderr otherwise.
pub fn event_sink(json: bool, command: &'static str) -> Arc<dyn SetupEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout(command))
    } else {
        Arc::new(ConsoleEventSink::stderr())
    }
}
