use std::{fs, io, path::Path, process::Command, time::SystemTime};

use tracing::{debug, info};

use crate::{
    error::{HookError, Result},
    http::Fetch,
    installer::Installer,
    timing::Timing,
};

const DEFAULT_EDITOR: &str = "vi";
const SHELL_METACHARACTERS: &[char] = &[
    '|', '&', ';', '<', '>', '(', ')', '$', '`', '\\', '"', '\'', ' ', '\t', '\n', '*', '?', '[',
    '#', '~', '=', '%',
];

/// Picks the editor: EDITOR, then VISUAL, then `configured`, then `vi`.
pub fn select_editor<L>(lookup: L, configured: Option<&str>) -> String
where
    L: Fn(&str) -> Option<String>,
{
    ["EDITOR", "VISUAL"]
        .into_iter()
        .filter_map(|key| lookup(key))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}

/// Opens the registry for `timing` in `editor` and resynchronizes the
/// installed set if the file was modified. Returns whether a sync ran.
pub async fn edit_registry<F: Fetch>(
    installer: &Installer<F>,
    timing: Timing,
    editor: &str,
) -> Result<bool> {
    let path = installer.registry().path(timing);
    let before = modified(&path)?.unwrap_or(SystemTime::UNIX_EPOCH);

    println!("run: {editor} {}", path.display());
    run_editor(editor, &path)?;

    let Some(after) = modified(&path)? else {
        debug!(path = %path.display(), "registry still absent after edit");
        return Ok(false);
    };
    if after == before {
        info!(%timing, "registry unchanged, skipping sync");
        return Ok(false);
    }
    installer.sync_all(timing).await?;
    Ok(true)
}

/// Builds the editor invocation the way git does: a plain program name (or
/// an existing file, even one with spaces in its path) runs directly,
/// anything else goes through `sh -c` with the file as `"$@"`.
fn editor_command(editor: &str, path: &Path) -> Command {
    if !editor.contains(SHELL_METACHARACTERS) || Path::new(editor).is_file() {
        let mut command = Command::new(editor);
        command.arg(path);
        return command;
    }
    let mut command = Command::new("sh");
    command
        .arg("-c")
        .arg(format!("{editor} \"$@\""))
        .arg(editor)
        .arg(path);
    command
}

fn run_editor(editor: &str, path: &Path) -> Result<()> {
    if editor.trim().is_empty() {
        return Err(HookError::message("no editor configured"));
    }
    let mut command = editor_command(editor, path);
    let program = command.get_program().to_string_lossy().into_owned();
    let status = command
        .status()
        .map_err(|source| HookError::Spawn { program, source })?;
    if !status.success() {
        return Err(HookError::EditorFailed {
            editor: editor.to_string(),
            status,
        });
    }
    Ok(())
}

fn modified(path: &Path) -> Result<Option<SystemTime>> {
    match fs::metadata(path) {
        Ok(meta) => Ok(Some(meta.modified().map_err(HookError::at(path))?)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(HookError::at(path)(err)),
    }
}
