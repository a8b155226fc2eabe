pub mod edit;
pub mod init;
pub mod install;
pub mod show;
pub mod status;
pub mod update;

use clap::Args;

use crate::{
    config::{ConfigStore, HookConfig},
    error::Result,
    git::GitRepo,
    http::HttpFetcher,
    installer::Installer,
    timing::Timing,
};

pub use edit::run_edit;
pub use init::run_init;
pub use install::{InstallArgs, run_install};
pub use show::run_show;
pub use status::{StatusArgs, run_status};
pub use test::{TestArgs, run_test};
pub use update::run_update;

#[derive(Debug, Args)]
pub struct TimingArgs {
    /// Hook timing (e.g. pre-commit, post-merge)
    pub timing: String,
}

impl TimingArgs {
    pub fn timing(&self) -> Result<Timing> {
        self.timing.parse()
    }
}

pub(crate) fn open_installer(
    repo: &GitRepo,
    config: &HookConfig,
) -> Result<Installer<HttpFetcher>> {
    let fetcher = HttpFetcher::new(config)?;
    Ok(Installer::new(repo, fetcher))
}

pub(crate) fn load_context() -> Result<(GitRepo, HookConfig)> {
    let config = ConfigStore::load()?;
    let repo = GitRepo::discover()?;
    Ok((repo, config))
}
