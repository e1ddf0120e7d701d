use std::path::PathBuf;

use super::*;

#[test]
fn default_config_points_at_travis_and_protractor() {
    let config = Config::default();
    assert_eq!(config.ci.path, PathBuf::from(".travis.yml"));
    assert_eq!(config.ci.job_prefix, "RUN_E2E_TESTS_");
    assert_eq!(
        config.protractor.path,
        PathBuf::from("core/tests/protractor.conf.js")
    );
    assert!(config.check.excluded_suites.is_empty());
    assert!(!config.check.strict);
}

#[test]
fn empty_toml_yields_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config: Config = toml::from_str(
        r#"
[ci]
path = "ci/pipeline.yml"

[check]
excluded_suites = ["fourWord"]
"#,
    )
    .unwrap();

    assert_eq!(config.ci.path, PathBuf::from("ci/pipeline.yml"));
    assert_eq!(config.ci.job_prefix, DEFAULT_JOB_PREFIX);
    assert_eq!(config.protractor.path, PathBuf::from(DEFAULT_PROTRACTOR_PATH));
    assert_eq!(config.check.excluded_suites, vec!["fourWord"]);
}

#[test]
fn unknown_keys_are_rejected() {
    let result: Result<Config, _> = toml::from_str(
        r#"
[check]
exclude = ["typo"]
"#,
    );
    assert!(result.is_err());
}

#[test]
fn unknown_sections_are_rejected() {
    let result: Result<Config, _> = toml::from_str("[travis]\npath = \"x\"\n");
    assert!(result.is_err());
}
