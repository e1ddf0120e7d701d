mod check;
mod context;
mod init;
mod suites;

pub use check::{run_check, run_check_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use suites::{run_suites, run_suites_impl};
