use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::error::{HookError, Result};

use super::FALLBACK_NAME;

/// A hook script that lives on disk and is linked into place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalHook {
    path: String,
}

impl LocalHook {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> String {
        Path::new(&self.path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(FALLBACK_NAME)
            .to_string()
    }

    pub fn resolve(&self, base_dir: &Path) -> PathBuf {
        let path = Path::new(&self.path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }

    pub fn install(&self, target: &Path, base_dir: &Path) -> Result<()> {
        let source = self.resolve(base_dir);
        fs::metadata(&source).map_err(HookError::at(&source))?;

        #[cfg(unix)]
        std::os::unix::fs::symlink(&source, target).map_err(HookError::at(target))?;
        #[cfg(not(unix))]
        fs::copy(&source, target).map_err(HookError::at(target))?;

        debug!(source = %source.display(), target = %target.display(), "linked local hook");
        Ok(())
    }
}
