use crate::{bootstrap::plant_stubs, error::Result, git::GitRepo};

pub fn run_init() -> Result<()> {
    let repo = GitRepo::discover()?;
    let paths = repo.hook_paths();
    let planted = plant_stubs(&paths)?;
    println!(
        "Planted {} hook stubs in {}",
        planted.len(),
        paths.hooks_dir().display()
    );
    Ok(())
}
