use clap::Args;

use crate::{
    commands::{load_context, open_installer},
    error::Result,
    timing::Timing,
};

#[derive(Debug, Args)]
pub struct InstallArgs {
    /// Hook timing (e.g. pre-commit, post-merge)
    pub timing: String,
    /// Local script path or http(s) URL of the hook
    pub source: String,
}

pub async fn run_install(args: InstallArgs) -> Result<()> {
    let timing: Timing = args.timing.parse()?;
    let (repo, config) = load_context()?;
    let installer = open_installer(&repo, &config)?;
    installer.install_append(timing, args.source.trim()).await?;
    Ok(())
}
