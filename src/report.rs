use std::{fs, path::Path};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    bootstrap,
    dispatcher::installed_artifacts,
    error::Result,
    git::HookPaths,
    installer::artifact_name,
    registry::Registry,
    timing::Timing,
};

/// Snapshot of one timing's stub, registry and installed artifacts.
#[derive(Debug, Clone, Serialize)]
pub struct TimingReport {
    pub timing: Timing,
    pub stub_planted: bool,
    pub registered: bool,
    pub registered_hooks: usize,
    pub installed_hooks: usize,
    pub in_sync: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_modified: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
}

pub fn inspect(paths: &HookPaths, timing: Timing) -> Result<TimingReport> {
    let registry = Registry::new(paths.clone());
    let registry_path = registry.path(timing);
    let registered = registry_path.is_file();

    let installed: Vec<String> = installed_artifacts(&paths.installed_dir(timing))?
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();

    let mut report = TimingReport {
        timing,
        stub_planted: bootstrap::is_planted(paths, timing),
        registered,
        registered_hooks: 0,
        installed_hooks: installed.len(),
        in_sync: installed.is_empty(),
        registry_modified: modified_at(&registry_path),
        problem: None,
    };

    if !registered {
        return Ok(report);
    }

    // An unreadable registry is reported rather than failing the whole status.
    match registry.read_all(timing) {
        Ok(sources) => {
            let expected: Vec<String> = sources
                .iter()
                .enumerate()
                .map(|(index, source)| artifact_name(index, source))
                .collect();
            report.registered_hooks = sources.len();
            report.in_sync = expected == installed;
        }
        Err(err) => {
            report.in_sync = false;
            report.problem = Some(err.to_string());
        }
    }
    Ok(report)
}

pub fn inspect_all(paths: &HookPaths) -> Result<Vec<TimingReport>> {
    Timing::ALL
        .into_iter()
        .map(|timing| inspect(paths, timing))
        .collect()
}

fn modified_at(path: &Path) -> Option<DateTime<Utc>> {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .map(DateTime::<Utc>::from)
}
