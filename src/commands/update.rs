use crate::{
    commands::{TimingArgs, load_context, open_installer},
    error::Result,
};

pub async fn run_update(args: TimingArgs) -> Result<()> {
    let timing = args.timing()?;
    let (repo, config) = load_context()?;
    let installer = open_installer(&repo, &config)?;
    let count = installer.sync_all(timing).await?;
    if count == 0 {
        println!("no hooks registered for {timing}");
    }
    Ok(())
}
