use std::{fs, io::ErrorKind, path::Path, path::PathBuf, time::Duration};

use dirs::home_dir;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{HookError, Result};

const CONFIG_DIR: &str = ".git-hook";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    /// Editor used by `edit` when neither EDITOR nor VISUAL is set.
    pub editor: Option<String>,
    pub fetch_timeout_secs: u64,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            editor: None,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

impl HookConfig {
    pub fn sanitized(mut self) -> Self {
        self.editor = self
            .editor
            .map(|editor| editor.trim().to_string())
            .filter(|editor| !editor.is_empty());
        if self.fetch_timeout_secs == 0 {
            self.fetch_timeout_secs = DEFAULT_FETCH_TIMEOUT_SECS;
        }
        self
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

pub struct ConfigStore;

impl ConfigStore {
    pub fn config_dir() -> Result<PathBuf> {
        let home = home_dir().ok_or(HookError::HomeDirNotFound)?;
        Ok(home.join(CONFIG_DIR))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Loads the user config, falling back to defaults when the file is absent.
    pub fn load() -> Result<HookConfig> {
        let path = match Self::config_path() {
            Ok(path) => path,
            Err(HookError::HomeDirNotFound) => return Ok(HookConfig::default()),
            Err(err) => return Err(err),
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<HookConfig> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(HookConfig::default());
            }
            Err(err) => return Err(HookError::at(path)(err)),
        };
        let config: HookConfig = toml::from_str(&contents)?;
        Ok(config.sanitized())
    }
}
