use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

use tracing::debug;

use crate::{
    error::{HookError, Result},
    git::HookPaths,
    hooks::HookSource,
    timing::Timing,
};

/// Per-timing, line-delimited list of registered hook sources.
///
/// Order in the file is execution order. Entries are only ever appended here;
/// wholesale rewrites happen through the `edit` workflow.
#[derive(Debug, Clone)]
pub struct Registry {
    paths: HookPaths,
}

impl Registry {
    pub fn new(paths: HookPaths) -> Self {
        Self { paths }
    }

    pub fn register(&self, timing: Timing, source: &HookSource) -> Result<()> {
        let path = self.path(timing);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(HookError::at(parent))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(HookError::at(&path))?;
        writeln!(file, "{source}").map_err(HookError::at(&path))?;
        debug!(%timing, %source, "registered hook");
        Ok(())
    }

    /// Every registered source in file order. Fails when the timing has no
    /// registry file or any line does not resolve.
    pub fn read_all(&self, timing: Timing) -> Result<Vec<HookSource>> {
        let contents = self.read_raw(timing)?;
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(HookSource::parse)
            .collect()
    }

    /// Like [`Registry::read_all`], but a missing registry file is an empty list.
    pub fn read_all_or_empty(&self, timing: Timing) -> Result<Vec<HookSource>> {
        match self.read_all(timing) {
            Err(err) if err.is_not_found() => Ok(Vec::new()),
            other => other,
        }
    }

    pub fn path(&self, timing: Timing) -> PathBuf {
        self.paths.registry(timing)
    }

    pub fn read_raw(&self, timing: Timing) -> Result<String> {
        let path = self.path(timing);
        fs::read_to_string(&path).map_err(HookError::at(path))
    }
}
