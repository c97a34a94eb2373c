use std::path::Path;

use account_ledger::config::{Config, ConfigManager};
use tempfile::TempDir;

/// Creates an isolated config home; keep the returned guard alive for the test.
pub fn temp_home() -> TempDir {
    TempDir::new().expect("create temp dir")
}

/// Writes `config` into `home` the same way the CLI would read it.
#[allow(dead_code)]
pub fn write_config(home: &Path, config: &Config) {
    ConfigManager::with_base_dir(home)
        .save(config)
        .expect("save config");
}
