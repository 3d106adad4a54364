//! Local git queries
//!
//! The deploy pins the remote checkout to the commit currently checked
//! out in the local invoking working copy, never to a branch tip.

use std::path::Path;
use std::process::Command;

use crate::error::{SiteupError, SiteupResult};

/// Resolve the HEAD commit hash of the working copy at `dir`.
pub fn local_head_commit(dir: &Path) -> SiteupResult<String> {
    let output = Command::new("git")
        .args(["log", "-n", "1", "--format=%H"])
        .current_dir(dir)
        .output()
        .map_err(|e| SiteupError::Git(e.to_string()))?;

    if !output.status.success() {
        return Err(SiteupError::Git(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }

    let commit = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if commit.is_empty() {
        return Err(SiteupError::Git("no commits in working copy".to_string()));
    }
    Ok(commit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fails_outside_a_working_copy() {
        let dir = tempfile::tempdir().unwrap();
        let result = local_head_commit(dir.path());
        assert!(matches!(result, Err(SiteupError::Git(_))));
    }
}
