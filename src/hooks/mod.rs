mod local;
mod remote;

pub use local::LocalHook;
pub use remote::RemoteHook;

use std::{fmt, path::Path, str::FromStr};

use crate::{
    error::{HookError, Result},
    http::Fetch,
};

/// Artifact name used when a source has no usable final path component.
pub(crate) const FALLBACK_NAME: &str = "hook";

/// A registered hook source and the way it is materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookSource {
    Remote(RemoteHook),
    Local(LocalHook),
}

impl HookSource {
    /// Resolves a registration string. URLs are tried first; anything else
    /// non-blank is taken as a local path. The input is kept verbatim, so
    /// callers trim registry lines and CLI arguments themselves.
    pub fn parse(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Err(HookError::InvalidSource {
                input: input.to_string(),
                reason: "empty hook source".to_string(),
            });
        }
        if let Some(remote) = RemoteHook::parse(input) {
            return remote.map(Self::Remote);
        }
        Ok(Self::Local(LocalHook::new(input)))
    }

    /// The registry form, identical to what was parsed.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Remote(hook) => hook.as_str(),
            Self::Local(hook) => hook.as_str(),
        }
    }

    /// Short name used for the installed artifact.
    pub fn name(&self) -> String {
        match self {
            Self::Remote(hook) => hook.name(),
            Self::Local(hook) => hook.name(),
        }
    }

    /// Materializes the hook as an executable at `target`. Relative local
    /// paths are resolved against `base_dir`.
    pub async fn install<F: Fetch>(
        &self,
        target: &Path,
        fetcher: &F,
        base_dir: &Path,
    ) -> Result<()> {
        match self {
            Self::Remote(hook) => hook.install(target, fetcher).await,
            Self::Local(hook) => hook.install(target, base_dir),
        }
    }
}

impl fmt::Display for HookSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookSource {
    type Err = HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
