use std::{
    fs::{self, OpenOptions},
    io,
    path::PathBuf,
};

use tracing::debug;

use crate::{
    error::{HookError, Result},
    git::HookPaths,
    timing::Timing,
};

pub const PROGRAM: &str = "git-hook";

/// The script git runs for `timing`; it hands control back to `git-hook test`.
pub fn stub_script(timing: Timing) -> String {
    format!("#!/bin/sh\n{PROGRAM} test {timing} \"$@\"\n")
}

/// Plants the delegation stub and an empty registry for every timing.
/// Existing registries are kept; stubs are always rewritten.
pub fn plant_stubs(paths: &HookPaths) -> Result<Vec<PathBuf>> {
    let hooks_dir = paths.hooks_dir();
    fs::create_dir_all(hooks_dir).map_err(HookError::at(hooks_dir))?;

    let mut planted = Vec::with_capacity(Timing::ALL.len());
    for timing in Timing::ALL {
        let stub = paths.stub(timing);
        fs::write(&stub, stub_script(timing)).map_err(HookError::at(&stub))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&stub, fs::Permissions::from_mode(0o755))
                .map_err(HookError::at(&stub))?;
        }

        let registry = paths.registry(timing);
        match OpenOptions::new().write(true).create_new(true).open(&registry) {
            Ok(_) => debug!(path = %registry.display(), "created empty registry"),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {}
            Err(err) => return Err(HookError::at(&registry)(err)),
        }
        planted.push(stub);
    }
    Ok(planted)
}

/// Whether the file at the stub location is exactly the script `plant_stubs` writes.
pub fn is_planted(paths: &HookPaths, timing: Timing) -> bool {
    fs::read_to_string(paths.stub(timing))
        .map(|contents| contents == stub_script(timing))
        .unwrap_or(false)
}
