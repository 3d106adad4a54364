//! Help and version output

mod common;

use common::TestEnv;

#[test]
fn help_lists_the_deploy_command() {
    let env = TestEnv::new();
    let result = env.run(&["--help"]);

    assert!(result.success, "help failed:\n{}", result.combined_output());
    assert!(result.stdout.contains("deploy"));
}

#[test]
fn deploy_help_lists_its_flags() {
    let env = TestEnv::new();
    let result = env.run(&["deploy", "--help"]);

    assert!(result.success, "help failed:\n{}", result.combined_output());
    for flag in ["--host", "--user", "--repo", "--app", "--dry-run", "--yes"] {
        assert!(
            result.stdout.contains(flag),
            "missing {flag} in:\n{}",
            result.stdout
        );
    }
}

#[test]
fn version_flag_reports_the_binary_name() {
    let env = TestEnv::new();
    let result = env.run(&["--version"]);

    assert!(result.success);
    assert!(result.stdout.contains("siteup"));
}
