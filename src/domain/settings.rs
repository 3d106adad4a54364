//! Settings hardening - pure text transforms
//!
//! The application's settings file is patched in place on the target:
//! debug off, allowed hosts pinned to the deployed host, and a trailing
//! import of the generated secret key. These functions only transform
//! content; reading and writing goes through the transport port.
//!
//! A line whose expected pattern is missing is left untouched, matching
//! the no-op semantics of a `sed` that finds nothing to replace.

/// Import statement that wires the generated secret key into settings
pub const SECRET_KEY_IMPORT: &str = "from .secret_key import SECRET_KEY";

/// Force the debug flag off.
///
/// Replaces a `DEBUG = True` line with `DEBUG = False`; already-hardened
/// content passes through unchanged.
pub fn disable_debug(content: &str) -> String {
    map_lines(content, |line| {
        if line.trim_end() == "DEBUG = True" {
            Some("DEBUG = False".to_string())
        } else {
            None
        }
    })
}

/// Rewrite the allowed-hosts assignment to the single deployed host.
pub fn set_allowed_hosts(content: &str, host: &str) -> String {
    map_lines(content, |line| {
        if line.starts_with("ALLOWED_HOSTS =") {
            Some(format!("ALLOWED_HOSTS = [\"{host}\"]"))
        } else {
            None
        }
    })
}

/// Apply both hardening transforms.
pub fn harden(content: &str, host: &str) -> String {
    set_allowed_hosts(&disable_debug(content), host)
}

/// Whether the secret-key import line is already present.
pub fn has_secret_key_import(content: &str) -> bool {
    content.lines().any(|line| line.trim() == SECRET_KEY_IMPORT)
}

/// Rewrite each line through `f` (None keeps the line), preserving whether
/// the content ended with a newline.
fn map_lines<F>(content: &str, f: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let ends_with_newline = content.ends_with('\n');
    let mut out = content
        .lines()
        .map(|line| f(line).unwrap_or_else(|| line.to_string()))
        .collect::<Vec<_>>()
        .join("\n");
    if ends_with_newline {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTINGS: &str = "\
\"\"\"Settings for the site.\"\"\"
import os

DEBUG = True
ALLOWED_HOSTS = []

STATIC_URL = '/static/'
";

    #[test]
    fn disable_debug_flips_the_flag() {
        let patched = disable_debug(SETTINGS);
        assert!(patched.contains("DEBUG = False"));
        assert!(!patched.contains("DEBUG = True"));
    }

    #[test]
    fn disable_debug_leaves_other_lines_alone() {
        let patched = disable_debug(SETTINGS);
        assert!(patched.contains("import os"));
        assert!(patched.contains("STATIC_URL = '/static/'"));
    }

    #[test]
    fn set_allowed_hosts_pins_single_host() {
        let patched = set_allowed_hosts(SETTINGS, "staging.example.com");
        assert!(patched.contains("ALLOWED_HOSTS = [\"staging.example.com\"]"));
        assert!(!patched.contains("ALLOWED_HOSTS = []"));
    }

    #[test]
    fn set_allowed_hosts_replaces_any_previous_list() {
        let content = "ALLOWED_HOSTS = [\"old.example.com\", \"localhost\"]\n";
        let patched = set_allowed_hosts(content, "new.example.com");
        assert_eq!(patched, "ALLOWED_HOSTS = [\"new.example.com\"]\n");
    }

    #[test]
    fn harden_is_idempotent() {
        let once = harden(SETTINGS, "staging.example.com");
        let twice = harden(&once, "staging.example.com");
        assert_eq!(once, twice);
    }

    #[test]
    fn missing_patterns_leave_content_unchanged() {
        let content = "SOMETHING_ELSE = 1\n";
        assert_eq!(harden(content, "h"), content);
    }

    #[test]
    fn preserves_missing_trailing_newline() {
        let content = "DEBUG = True";
        assert_eq!(disable_debug(content), "DEBUG = False");
    }

    #[test]
    fn detects_secret_key_import() {
        assert!(!has_secret_key_import(SETTINGS));
        let appended = format!("{SETTINGS}\n{SECRET_KEY_IMPORT}\n");
        assert!(has_secret_key_import(&appended));
    }

    #[test]
    fn detects_indented_secret_key_import() {
        let content = format!("  {SECRET_KEY_IMPORT}\n");
        assert!(has_secret_key_import(&content));
    }
}
