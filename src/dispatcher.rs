use std::{
    cmp::Ordering,
    fs, io,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use tracing::{debug, info};

use crate::{
    error::{HookError, Result},
    git::GitRepo,
    timing::Timing,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A rebase is running; nothing was executed.
    SkippedRebase,
    /// This many artifacts ran and all succeeded.
    Ran(usize),
}

/// Runs every installed artifact for a timing, the way git would run a single hook.
pub struct Dispatcher {
    repo: GitRepo,
}

impl Dispatcher {
    pub fn new(repo: GitRepo) -> Self {
        Self { repo }
    }

    pub fn run(&self, timing: Timing, args: &[String]) -> Result<Dispatch> {
        if self.repo.rebase_in_progress()? {
            info!(%timing, "rebase in progress, skip hooks");
            return Ok(Dispatch::SkippedRebase);
        }

        let artifacts = installed_artifacts(&self.repo.hook_paths().installed_dir(timing))?;
        for artifact in &artifacts {
            run_artifact(artifact, args)?;
        }
        Ok(Dispatch::Ran(artifacts.len()))
    }
}

/// Installed artifacts in execution order. A missing directory is empty.
pub fn installed_artifacts(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(HookError::at(dir)(err)),
    };

    let mut artifacts = Vec::new();
    for entry in entries {
        let entry = entry.map_err(HookError::at(dir))?;
        artifacts.push(entry.path());
    }
    artifacts.sort_by(|a, b| execution_order(a, b));
    Ok(artifacts)
}

/// Orders `<index>-<name>` files by numeric index so `10-x` follows `2-x`.
/// Names without an index sort after indexed ones.
fn execution_order(a: &Path, b: &Path) -> Ordering {
    let (a_name, b_name) = (file_name(a), file_name(b));
    match (index_of(&a_name), index_of(&b_name)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a_name.cmp(&b_name)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a_name.cmp(&b_name),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn index_of(name: &str) -> Option<u64> {
    name.split_once('-')?.0.parse().ok()
}

fn run_artifact(path: &Path, args: &[String]) -> Result<()> {
    debug!(hook = %path.display(), "running hook");
    let status = Command::new(path)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| HookError::Spawn {
            program: path.display().to_string(),
            source,
        })?;
    if !status.success() {
        return Err(HookError::HookFailed {
            hook: file_name(path),
            status,
        });
    }
    Ok(())
}
