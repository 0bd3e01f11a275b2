//! Test environment builder for isolated Bootapp testing.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use super::fixtures::BASE_HOSTS;

/// Result of running a Bootapp CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as newline-delimited JSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad JSON {l:?}: {e}")))
            .collect()
    }
}

/// Isolated test environment:
/// - `BOOTAPP_TEST_HOME` points at a temp home (registry, config)
/// - `BOOTAPP_HOSTS_FILE` points at a temp hosts file, edited without sudo
/// - a temp project directory used as the working directory
pub struct TestEnv {
    pub home_dir: TempDir,
    pub project_root: TempDir,
    pub hosts_file: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let home_dir = tempfile::tempdir().unwrap();
        let project_root = tempfile::tempdir().unwrap();
        let hosts_file = home_dir.path().join("hosts");
        fs::write(&hosts_file, BASE_HOSTS).unwrap();
        Self {
            home_dir,
            project_root,
            hosts_file,
        }
    }

    pub fn registry_path(&self) -> PathBuf {
        self.home_dir.path().join(".bootapp/projects.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.home_dir.path().join(".bootapp/config.toml")
    }

    pub fn hosts(&self) -> String {
        fs::read_to_string(&self.hosts_file).unwrap()
    }

    pub fn write_registry(&self, content: &str) {
        let path = self.registry_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn registry_json(&self) -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(self.registry_path()).unwrap()).unwrap()
    }

    /// Run bootapp from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_bootapp"))
            .current_dir(cwd)
            .env("BOOTAPP_TEST_HOME", self.home_dir.path())
            .env("BOOTAPP_HOSTS_FILE", &self.hosts_file)
            .env("BOOTAPP_NO_SUDO", "1")
            .env_remove("BOOTAPP_REGISTRY_PATH")
            .env_remove("BOOTAPP_CERT_DIR")
            .env_remove("BOOTAPP_LOG")
            .args(args)
            .output()
            .unwrap();

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
