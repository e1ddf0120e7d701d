mod filesystem;
mod loader;
mod model;
mod validation;

#[cfg(test)]
pub(crate) mod mock_fs;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{
    CheckConfig, CiConfig, Config, DEFAULT_CI_PATH, DEFAULT_JOB_PREFIX, DEFAULT_PROTRACTOR_PATH,
    ProtractorConfig,
};
pub use validation::validate_config_semantics;
