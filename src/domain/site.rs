//! Site - the per-host deployment target
//!
//! A site is identified by a hostname and the operating user on that host.
//! All deployed artifacts live under `/home/<user>/sites/<host>`.

use std::path::PathBuf;

/// Fixed subfolders created under the site directory.
///
/// `source` holds the git checkout, `virtualenv` the isolated interpreter,
/// `database` and `static` are referenced by the application's own settings.
pub const SITE_SUBFOLDERS: [&str; 4] = ["database", "static", "virtualenv", "source"];

/// A deployment target: one host, one operating user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    /// Hostname; also becomes the application's single allowed host
    pub host: String,
    /// Operating user the deploy runs as on the target
    pub user: String,
}

impl Site {
    pub fn new(host: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
        }
    }

    /// SSH destination string (`user@host`)
    pub fn ssh_destination(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }

    /// Root directory holding all deployed artifacts for this site
    pub fn site_dir(&self) -> PathBuf {
        PathBuf::from(format!("/home/{}/sites/{}", self.user, self.host))
    }

    /// Directory of the git checkout
    pub fn source_dir(&self) -> PathBuf {
        self.site_dir().join("source")
    }

    /// Directory of the isolated interpreter environment
    pub fn virtualenv_dir(&self) -> PathBuf {
        self.site_dir().join("virtualenv")
    }

    /// Path of the application's settings file inside the checkout
    pub fn settings_path(&self, app: &str) -> PathBuf {
        self.source_dir().join(app).join("settings.py")
    }

    /// Path of the generated secret-key module inside the checkout
    pub fn secret_key_path(&self, app: &str) -> PathBuf {
        self.source_dir().join(app).join("secret_key.py")
    }
}
