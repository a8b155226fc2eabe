use std::{
    env, fs, io,
    path::{Path, PathBuf},
    process::Command,
};

use tracing::debug;

use crate::{
    error::{HookError, Result},
    timing::Timing,
};

const HOOKS_DIR: &str = "hooks";
const REGISTRY_SUFFIX: &str = ".hooks";
const INSTALLED_SUFFIX: &str = ".installed";
const STAGING_SUFFIX: &str = ".installed.staging";
const REBASE_STATE_DIRS: &[&str] = &["rebase-merge", "rebase-apply"];

/// A resolved repository: its git directory and the tree relative hook paths
/// are resolved against.
#[derive(Debug, Clone)]
pub struct GitRepo {
    git_dir: PathBuf,
    work_tree: PathBuf,
}

impl GitRepo {
    pub fn new(git_dir: impl Into<PathBuf>, work_tree: impl Into<PathBuf>) -> Self {
        Self {
            git_dir: git_dir.into(),
            work_tree: work_tree.into(),
        }
    }

    /// Asks git for the repository enclosing the current directory.
    pub fn discover() -> Result<Self> {
        let cwd = env::current_dir()?;
        let git_dir = rev_parse("--git-dir")?;
        let git_dir = if git_dir.is_absolute() {
            git_dir
        } else {
            cwd.join(git_dir)
        };
        let work_tree = work_tree_or(rev_parse("--show-toplevel"), cwd)?;
        debug!(
            git_dir = %git_dir.display(),
            work_tree = %work_tree.display(),
            "resolved repository"
        );
        Ok(Self::new(git_dir, work_tree))
    }

    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    pub fn work_tree(&self) -> &Path {
        &self.work_tree
    }

    pub fn hook_paths(&self) -> HookPaths {
        HookPaths::new(self.git_dir.join(HOOKS_DIR))
    }

    pub fn rebase_in_progress(&self) -> Result<bool> {
        for name in REBASE_STATE_DIRS {
            if directory_exists(&self.git_dir.join(name))? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

fn rev_parse(flag: &str) -> Result<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", flag])
        .output()
        .map_err(|source| HookError::Spawn {
            program: "git".to_string(),
            source,
        })?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(HookError::GitDir(stderr.trim().to_string()));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(PathBuf::from(stdout.trim()))
}

/// Bare repositories have no work tree, so git refusing `--show-toplevel`
/// falls back to `cwd`. Failing to run git at all is still an error.
fn work_tree_or(toplevel: Result<PathBuf>, cwd: PathBuf) -> Result<PathBuf> {
    match toplevel {
        Ok(path) => Ok(path),
        Err(HookError::GitDir(reason)) => {
            debug!(%reason, "no work tree, using current directory");
            Ok(cwd)
        }
        Err(err) => Err(err),
    }
}

fn directory_exists(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(HookError::at(path)(err)),
    }
}

/// Layout of everything this tool keeps under `<git-dir>/hooks`.
#[derive(Debug, Clone)]
pub struct HookPaths {
    hooks_dir: PathBuf,
}

impl HookPaths {
    pub fn new(hooks_dir: impl Into<PathBuf>) -> Self {
        Self {
            hooks_dir: hooks_dir.into(),
        }
    }

    pub fn hooks_dir(&self) -> &Path {
        &self.hooks_dir
    }

    /// The script git itself runs for `timing`.
    pub fn stub(&self, timing: Timing) -> PathBuf {
        self.hooks_dir.join(timing.as_str())
    }

    pub fn registry(&self, timing: Timing) -> PathBuf {
        self.suffixed(timing, REGISTRY_SUFFIX)
    }

    pub fn installed_dir(&self, timing: Timing) -> PathBuf {
        self.suffixed(timing, INSTALLED_SUFFIX)
    }

    pub(crate) fn staging_dir(&self, timing: Timing) -> PathBuf {
        self.suffixed(timing, STAGING_SUFFIX)
    }

    fn suffixed(&self, timing: Timing, suffix: &str) -> PathBuf {
        self.hooks_dir.join(format!("{timing}{suffix}"))
    }
}
