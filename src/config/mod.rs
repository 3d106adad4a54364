//! Configuration module for Siteup
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Project config (./siteup.toml)
//! 3. User config (~/.config/siteup/config.toml)
//! 4. Built-in defaults (lowest priority)
//!
//! The CLI-flag layer is applied by the command layer; this module merges
//! the file layers and supplies the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SiteupError, SiteupResult};

/// Project config file name, looked up in the invoking directory
pub const PROJECT_CONFIG_FILE: &str = "siteup.toml";

const DEFAULT_PYTHON: &str = "python3";
const DEFAULT_REQUIREMENTS: &str = "requirements.txt";

/// Deploy configuration
///
/// Every field is optional in the files; accessors supply defaults where
/// one exists. `repo` and `app` have no sensible default and must come
/// from a file or a flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// URL the source repository is cloned from
    pub repo: Option<String>,
    /// Application package containing `settings.py`
    pub app: Option<String>,
    /// Operating user on the target host
    pub user: Option<String>,
    /// Interpreter used to create the virtualenv
    pub python: Option<String>,
    /// Requirements manifest, relative to the source checkout
    pub requirements: Option<String>,
}

impl Config {
    /// Load a config file, failing on unreadable or invalid TOML
    pub fn load(path: &Path) -> SiteupResult<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| SiteupError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Load a config file, treating a missing file as empty
    pub fn load_or_default(path: &Path) -> SiteupResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load the merged user + project configuration for `project_dir`
    pub fn load_layered(project_dir: &Path) -> SiteupResult<Self> {
        let user = match Self::user_config_path() {
            Some(path) => Self::load_or_default(&path)?,
            None => Self::default(),
        };
        let project = Self::load_or_default(&project_dir.join(PROJECT_CONFIG_FILE))?;
        Ok(project.merged_over(user))
    }

    /// Path of the user-level config file, if a home directory exists
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config/siteup/config.toml"))
    }

    /// Merge `self` over `base`: fields set here win
    pub fn merged_over(self, base: Config) -> Config {
        Config {
            repo: self.repo.or(base.repo),
            app: self.app.or(base.app),
            user: self.user.or(base.user),
            python: self.python.or(base.python),
            requirements: self.requirements.or(base.requirements),
        }
    }

    /// Interpreter used to create the virtualenv
    pub fn python(&self) -> &str {
        self.python.as_deref().unwrap_or(DEFAULT_PYTHON)
    }

    /// Requirements manifest, relative to the source checkout
    pub fn requirements(&self) -> &str {
        self.requirements.as_deref().unwrap_or(DEFAULT_REQUIREMENTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Config {
        toml::from_str(toml).expect("invalid test config")
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::default();
        assert_eq!(config.python(), "python3");
        assert_eq!(config.requirements(), "requirements.txt");
        assert!(config.repo.is_none());
    }

    #[test]
    fn parses_all_fields() {
        let config = parse(
            r#"
repo = "https://github.com/example/superlists"
app = "superlists"
user = "deploy"
python = "python3.11"
requirements = "requirements/prod.txt"
"#,
        );
        assert_eq!(
            config.repo.as_deref(),
            Some("https://github.com/example/superlists")
        );
        assert_eq!(config.app.as_deref(), Some("superlists"));
        assert_eq!(config.python(), "python3.11");
        assert_eq!(config.requirements(), "requirements/prod.txt");
    }

    #[test]
    fn project_values_win_over_user_values() {
        let user = parse("repo = \"https://example.com/user.git\"\nuser = \"deploy\"");
        let project = parse("repo = \"https://example.com/project.git\"");
        let merged = project.merged_over(user);
        assert_eq!(merged.repo.as_deref(), Some("https://example.com/project.git"));
        // Unset project fields fall through to the user layer.
        assert_eq!(merged.user.as_deref(), Some("deploy"));
    }

    #[test]
    fn load_reports_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PROJECT_CONFIG_FILE);
        fs::write(&path, "repo = [not toml").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, SiteupError::InvalidConfig { .. }));
    }

    #[test]
    fn load_or_default_treats_missing_file_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join(PROJECT_CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_reads_a_real_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PROJECT_CONFIG_FILE);
        fs::write(&path, "app = \"superlists\"").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.app.as_deref(), Some("superlists"));
    }
}
