//! Terminal UI - capability detection, theme, and event sinks

pub mod console;
pub mod json;
pub mod theme;

use is_terminal::IsTerminal;

/// Resolved terminal capabilities plus output options for one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub is_tty: bool,
    pub color: bool,
    pub unicode: bool,
    pub verbose: u8,
}

impl UiContext {
    pub fn detect(verbose: u8) -> Self {
        Self::detect_impl(
            |key| std::env::var(key).ok(),
            std::io::stdout().is_terminal(),
            verbose,
        )
    }

    fn detect_impl(
        get_env: impl Fn(&str) -> Option<String>,
        is_tty: bool,
        verbose: u8,
    ) -> Self {
        let term = get_env("TERM").unwrap_or_default();
        let term_is_dumb = term.eq_ignore_ascii_case("dumb");
        let no_color = get_env("NO_COLOR").is_some() || get_env("SITEUP_NO_COLOR").is_some();

        Self {
            is_tty,
            color: is_tty && !term_is_dumb && !no_color,
            unicode: !term_is_dumb && unicode_locale(&get_env),
            verbose,
        }
    }
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    KEYS.iter().any(|k| {
        get_env(k)
            .map(|v| {
                let v = v.to_lowercase();
                v.contains("utf-8") || v.contains("utf8")
            })
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn non_tty_disables_color() {
        let ui = UiContext::detect_impl(env_of(&[("LANG", "en_US.UTF-8")]), false, 0);
        assert!(!ui.color);
        assert!(ui.unicode);
    }

    #[test]
    fn no_color_env_disables_color_on_tty() {
        let ui = UiContext::detect_impl(
            env_of(&[("NO_COLOR", "1"), ("LANG", "en_US.UTF-8")]),
            true,
            0,
        );
        assert!(!ui.color);
    }

    #[test]
    fn dumb_terminal_disables_color_and_unicode() {
        let ui = UiContext::detect_impl(
            env_of(&[("TERM", "dumb"), ("LANG", "en_US.UTF-8")]),
            true,
            0,
        );
        assert!(!ui.color);
        assert!(!ui.unicode);
    }

    #[test]
    fn tty_with_utf8_locale_gets_color_and_unicode() {
        let ui = UiContext::detect_impl(
            env_of(&[("TERM", "xterm-256color"), ("LC_ALL", "C.UTF-8")]),
            true,
            1,
        );
        assert!(ui.color);
        assert!(ui.unicode);
        assert_eq!(ui.verbose, 1);
    }
}
