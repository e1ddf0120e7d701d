use tempfile::TempDir;

use super::*;
use crate::config::Config;

fn init_args(temp_dir: &TempDir, force: bool) -> InitArgs {
    InitArgs {
        output: temp_dir.path().join(".e2e-ci-guard.toml"),
        force,
    }
}

#[test]
fn template_parses_to_defaults() {
    let config: Config = toml::from_str(&generate_config_template()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn template_names_every_section() {
    let template = generate_config_template();
    assert!(template.contains("[ci]"));
    assert!(template.contains("[protractor]"));
    assert!(template.contains("[check]"));
}

#[test]
fn creates_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let args = init_args(&temp_dir, false);

    run_init_impl(&args).unwrap();

    let content = std::fs::read_to_string(&args.output).unwrap();
    assert_eq!(content, generate_config_template());
}

#[test]
fn refuses_to_overwrite_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let args = init_args(&temp_dir, false);
    std::fs::write(&args.output, "# mine\n").unwrap();

    let result = run_init_impl(&args);

    assert!(matches!(result, Err(GuardError::Config(msg)) if msg.contains("--force")));
    assert_eq!(std::fs::read_to_string(&args.output).unwrap(), "# mine\n");
}

#[test]
fn force_overwrites_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let args = init_args(&temp_dir, true);
    std::fs::write(&args.output, "# mine\n").unwrap();

    run_init_impl(&args).unwrap();

    assert_eq!(
        std::fs::read_to_string(&args.output).unwrap(),
        generate_config_template()
    );
}

#[test]
fn run_init_reports_config_error_exit_code() {
    use clap::Parser;

    let temp_dir = TempDir::new().unwrap();
    let args = init_args(&temp_dir, false);
    std::fs::write(&args.output, "").unwrap();
    let cli = Cli::parse_from(["e2e-ci-guard", "--color", "never"]);

    assert_eq!(run_init(&args, &cli), EXIT_CONFIG_ERROR);
}
