use std::env;

use crate::{
    commands::{TimingArgs, load_context, open_installer},
    editor::{edit_registry, select_editor},
    error::Result,
};

pub async fn run_edit(args: TimingArgs) -> Result<()> {
    let timing = args.timing()?;
    let (repo, config) = load_context()?;
    let editor = select_editor(|key| env::var(key).ok(), config.editor.as_deref());
    let installer = open_installer(&repo, &config)?;
    edit_registry(&installer, timing, &editor).await?;
    Ok(())
}
