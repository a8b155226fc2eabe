use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::{
    error::{HookError, Result},
    git::{GitRepo, HookPaths},
    hooks::HookSource,
    http::Fetch,
    registry::Registry,
    timing::Timing,
};

/// File name of the artifact installed for `source` at position `index`.
pub fn artifact_name(index: usize, source: &HookSource) -> String {
    format!("{index}-{}", source.name())
}

/// Turns registered hook sources into executable artifacts under
/// `<timing>.installed/`.
pub struct Installer<F> {
    paths: HookPaths,
    registry: Registry,
    fetcher: F,
    base_dir: PathBuf,
}

impl<F: Fetch> Installer<F> {
    pub fn new(repo: &GitRepo, fetcher: F) -> Self {
        let paths = repo.hook_paths();
        Self {
            registry: Registry::new(paths.clone()),
            paths,
            fetcher,
            base_dir: repo.work_tree().to_path_buf(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Rebuilds the whole installed set for `timing` from its registry.
    ///
    /// The new set is assembled in a staging directory and only swapped in
    /// once every source installed, so a failure leaves the old set in place.
    pub async fn sync_all(&self, timing: Timing) -> Result<usize> {
        let sources = self.registry.read_all(timing)?;
        let installed = self.paths.installed_dir(timing);
        let staging = self.paths.staging_dir(timing);

        remove_dir_if_exists(&staging)?;
        fs::create_dir_all(&staging).map_err(HookError::at(&staging))?;

        for (index, source) in sources.iter().enumerate() {
            announce(&installed, index, source);
            if let Err(err) = self.materialize(&staging, index, source).await {
                if let Err(cleanup) = fs::remove_dir_all(&staging) {
                    warn!(
                        path = %staging.display(),
                        error = %cleanup,
                        "failed to clean staging directory"
                    );
                }
                return Err(err);
            }
        }

        remove_dir_if_exists(&installed)?;
        fs::rename(&staging, &installed).map_err(HookError::at(&installed))?;
        info!(%timing, hooks = sources.len(), "synchronized installed hooks");
        Ok(sources.len())
    }

    /// Installs a single source at `index` directly into the installed set.
    pub async fn install_one(
        &self,
        timing: Timing,
        index: usize,
        source: &HookSource,
    ) -> Result<PathBuf> {
        let installed = self.paths.installed_dir(timing);
        fs::create_dir_all(&installed).map_err(HookError::at(&installed))?;
        announce(&installed, index, source);
        self.materialize(&installed, index, source).await
    }

    /// Installs `input` after the currently registered hooks, then records it.
    /// The registry is only touched once the artifact exists.
    pub async fn install_append(&self, timing: Timing, input: &str) -> Result<PathBuf> {
        let source = HookSource::parse(input)?;
        let index = self.registry.read_all_or_empty(timing)?.len();
        let target = self.install_one(timing, index, &source).await?;
        self.registry.register(timing, &source)?;
        Ok(target)
    }

    async fn materialize(
        &self,
        dir: &Path,
        index: usize,
        source: &HookSource,
    ) -> Result<PathBuf> {
        let target = dir.join(artifact_name(index, source));
        // A leftover artifact from an out-of-sync directory would block the link.
        match fs::symlink_metadata(&target) {
            Ok(_) => {
                debug!(target = %target.display(), "replacing stale artifact");
                fs::remove_file(&target).map_err(HookError::at(&target))?;
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(HookError::at(&target)(err)),
        }
        source.install(&target, &self.fetcher, &self.base_dir).await?;
        Ok(target)
    }
}

fn announce(dir: &Path, index: usize, source: &HookSource) {
    println!(
        "installing {} as {}",
        source.name(),
        dir.join(artifact_name(index, source)).display()
    );
}

fn remove_dir_if_exists(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(HookError::at(path)(err)),
    }
}
