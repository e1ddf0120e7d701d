use std::path::{Path, PathBuf};

use super::*;
use crate::config::mock_fs::MockFileSystem;

// =============================================================================
// Discovery
// =============================================================================

#[test]
fn load_returns_defaults_without_local_config() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let config = loader.load().unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_picks_up_local_config_in_current_dir() {
    let fs = MockFileSystem::new().with_current_dir("/repo").with_file(
        "/repo/.e2e-ci-guard.toml",
        r#"
[ci]
path = "ci/e2e.yml"
"#,
    );

    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(config.ci.path, PathBuf::from("ci/e2e.yml"));
}

#[test]
fn load_ignores_config_in_other_directories() {
    let fs = MockFileSystem::new()
        .with_current_dir("/repo")
        .with_file("/elsewhere/.e2e-ci-guard.toml", "[ci]\npath = \"x.yml\"\n");

    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(config, Config::default());
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn load_from_explicit_path() {
    let content = r#"
[ci]
job_prefix = "E2E_"

[protractor]
path = "e2e/protractor.conf.js"

[check]
excluded_suites = ["fourWord"]
strict = true
"#;
    let fs = MockFileSystem::new().with_file("/custom/guard.toml", content);

    let config = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/custom/guard.toml"))
        .unwrap();

    assert_eq!(config.ci.job_prefix, "E2E_");
    assert_eq!(
        config.protractor.path,
        PathBuf::from("e2e/protractor.conf.js")
    );
    assert_eq!(config.check.excluded_suites, vec!["fourWord"]);
    assert!(config.check.strict);
}

#[test]
fn returns_error_for_invalid_toml() {
    let fs = MockFileSystem::new().with_file("/project/.e2e-ci-guard.toml", "not toml [[[");

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert!(matches!(err, GuardError::TomlParse(_)));
}

#[test]
fn returns_error_for_nonexistent_explicit_path() {
    let err = FileConfigLoader::with_fs(MockFileSystem::new())
        .load_from_path(Path::new("/does/not/exist.toml"))
        .unwrap_err();
    assert!(matches!(err, GuardError::FileRead { .. }));
}

#[test]
fn semantic_errors_surface_from_load() {
    let fs = MockFileSystem::new().with_file(
        "/project/.e2e-ci-guard.toml",
        "[ci]\njob_prefix = \"\"\n",
    );

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert!(matches!(err, GuardError::Config(_)));
}
