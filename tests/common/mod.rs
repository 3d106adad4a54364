//! Test environment builder for isolated Siteup CLI testing.
//!
//! Provides `TestEnv` - an isolated project directory and home directory,
//! plus helpers to run the built binary in them. Nothing here opens an
//! SSH connection; only plan/validation paths are exercised end to end.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a Siteup CLI command
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
}

/// Isolated test environment with temp project and home directories
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    siteup_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("failed to create project dir"),
            home_dir: TempDir::new().expect("failed to create home dir"),
            siteup_bin: PathBuf::from(env!("CARGO_BIN_EXE_siteup")),
        }
    }

    /// Create an environment with a project siteup.toml already written
    pub fn with_config(config: &str) -> Self {
        let env = Self::new();
        env.write_project_file("siteup.toml", config);
        env
    }

    /// Write a file relative to the project root
    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        std::fs::write(path, content).expect("failed to write project file");
    }

    /// Write the user-level config under the isolated home
    pub fn write_user_config(&self, content: &str) {
        let path = self.home_dir.path().join(".config/siteup/config.toml");
        std::fs::create_dir_all(path.parent().unwrap()).expect("failed to create config dir");
        std::fs::write(path, content).expect("failed to write user config");
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run siteup in this environment from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    /// Run siteup from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(&self.siteup_bin)
            .current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("SITEUP_NO_COLOR", "1")
            .output()
            .expect("failed to execute siteup");

        self.output_to_result(output)
    }

    fn output_to_result(&self, output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// A complete project config covering every deploy requirement
pub const FULL_CONFIG: &str = r#"
repo = "https://github.com/example/superlists"
app = "superlists"
user = "deploy"
"#;
