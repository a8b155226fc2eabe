#![allow(dead_code)]

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use git_hook::{
    error::{HookError, Result},
    git::{GitRepo, HookPaths},
    http::Fetch,
};
use reqwest::Url;
use tempfile::TempDir;

/// A throwaway work tree with an empty `.git/hooks`.
pub struct Sandbox {
    pub dir: TempDir,
    pub repo: GitRepo,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let work_tree = dir.path().join("repo");
        let git_dir = work_tree.join(".git");
        fs::create_dir_all(git_dir.join("hooks")).unwrap();
        Self {
            repo: GitRepo::new(git_dir, work_tree),
            dir,
        }
    }

    pub fn paths(&self) -> HookPaths {
        self.repo.hook_paths()
    }

    pub fn work_tree(&self) -> &Path {
        self.repo.work_tree()
    }

    /// Writes a file under the work tree, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.work_tree().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }
}

/// Serves fixed bodies for known URLs instead of going to the network.
#[derive(Default)]
pub struct StubFetcher {
    bodies: HashMap<String, Vec<u8>>,
}

impl StubFetcher {
    pub fn with(mut self, url: &str, body: &str) -> Self {
        self.bodies.insert(url.to_string(), body.as_bytes().to_vec());
        self
    }
}

impl Fetch for StubFetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        self.bodies
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| HookError::message(format!("404 Not Found: {url}")))
    }
}

/// File names in `dir`, sorted.
pub fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
