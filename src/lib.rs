pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod naming;
pub mod output;

pub use error::{GuardError, Result, SetMismatch};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_OUT_OF_SYNC: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
