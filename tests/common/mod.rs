#![allow(dead_code)]

use std::path::Path;
use std::{fmt::Write, fs};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the e2e-ci-guard binary.
#[macro_export]
macro_rules! e2e_ci_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("e2e-ci-guard"))
    };
}

pub const TRAVIS_PATH: &str = ".travis.yml";
pub const PROTRACTOR_PATH: &str = "core/tests/protractor.conf.js";

/// Creates a temporary project directory with CI and protractor fixtures.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".e2e-ci-guard.toml", content);
    }

    /// Writes a Travis definition with one job flag per `jobs` entry and one
    /// `--suite` script line per `scripts` entry.
    pub fn create_travis(&self, jobs: &[&str], scripts: &[&str]) {
        self.create_file(TRAVIS_PATH, &travis_yaml(jobs, scripts));
    }

    /// Writes a protractor config whose suite map declares `suites`.
    pub fn create_protractor(&self, suites: &[&str]) {
        self.create_file(PROTRACTOR_PATH, &protractor_conf(suites));
    }
}

pub fn travis_yaml(jobs: &[&str], scripts: &[&str]) -> String {
    let mut out = String::from("language: node_js\nenv:\n  jobs:\n");
    for flag in jobs {
        let _ = writeln!(out, "    - RUN_E2E_TESTS_{flag}=true");
    }
    out.push_str("script:\n  - bash scripts/run_frontend_tests.sh\n");
    for suite in scripts {
        let _ = writeln!(
            out,
            "  - if [ \"$E2E\" == 'true' ]; then bash scripts/run_e2e_tests.sh --suite=\"{suite}\"; fi"
        );
    }
    out
}

pub fn protractor_conf(suites: &[&str]) -> String {
    let mut out = String::from("var suites = {\n");
    for suite in suites {
        let _ = writeln!(out, "  {suite}: ['protractor/{suite}.js'],");
    }
    out.push_str("};\n\nexports.config = {\n  suites: suites,\n};\n");
    out
}
