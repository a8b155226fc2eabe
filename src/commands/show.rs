use std::io::{self, Write};

use crate::{commands::TimingArgs, error::Result, git::GitRepo, registry::Registry};

pub fn run_show(args: TimingArgs) -> Result<()> {
    let timing = args.timing()?;
    let repo = GitRepo::discover()?;
    let contents = Registry::new(repo.hook_paths()).read_raw(timing)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(contents.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
