use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    errors::LedgerError,
    ledger::{RejectionPolicy, NAME_MAX_CHARS},
    utils,
};

const TMP_SUFFIX: &str = "tmp";

/// User preferences controlling ledger behaviour and report output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub name_max_chars: usize,
    pub rejection_policy: RejectionPolicy,
    pub currency_symbol: String,
    pub detailed_report: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name_max_chars: NAME_MAX_CHARS,
            rejection_policy: RejectionPolicy::Strict,
            currency_symbol: "$".into(),
            detailed_report: false,
        }
    }
}

/// Reads and writes the JSON configuration file.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Manager for the config file under the application data directory.
    pub fn new() -> Self {
        Self::with_base_dir(utils::app_data_dir())
    }

    pub fn with_base_dir(base: impl AsRef<Path>) -> Self {
        Self {
            path: utils::config_file_in(base.as_ref()),
        }
    }

    /// Loads the config, falling back to defaults when no file exists yet.
    pub fn load(&self) -> Result<Config, LedgerError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, config: &Config) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), LedgerError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
