use std::{io, path::PathBuf, process::ExitStatus};

use thiserror::Error;

pub type Result<T, E = HookError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum HookError {
    #[error("home directory not found")]
    HomeDirNotFound,
    #[error("wrong timing `{0}`")]
    UnknownTiming(String),
    #[error("invalid hook source `{input}`: {reason}")]
    InvalidSource { input: String, reason: String },
    #[error("not a git repository: {0}")]
    GitDir(String),
    #[error("{}: {source}", .path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("hook {hook} failed: {status}")]
    HookFailed { hook: String, status: ExitStatus },
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("editor {editor} exited with {status}")]
    EditorFailed { editor: String, status: ExitStatus },
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl HookError {
    pub fn message<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }

    pub(crate) fn at<P: Into<PathBuf>>(path: P) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Path { path, source }
    }

    /// True when the error is an I/O failure caused by a missing file.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Path { source, .. } | Self::Io(source) => {
                source.kind() == io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}
