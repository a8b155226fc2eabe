use std::{fs, path::Path};

use reqwest::Url;
use tracing::debug;

use crate::{
    error::{HookError, Result},
    http::Fetch,
};

use super::FALLBACK_NAME;

const SCHEMES: &[&str] = &["http://", "https://"];

/// A hook script downloaded from an HTTP(S) URL at install time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteHook {
    source: String,
    url: Url,
}

impl RemoteHook {
    /// Returns `None` when `input` is not an http(s) URL at all, and an error
    /// when it looks like one but does not parse.
    pub fn parse(input: &str) -> Option<Result<Self>> {
        if !SCHEMES.iter().any(|scheme| input.starts_with(scheme)) {
            return None;
        }
        Some(
            Url::parse(input)
                .map(|url| Self {
                    source: input.to_string(),
                    url,
                })
                .map_err(|err| HookError::InvalidSource {
                    input: input.to_string(),
                    reason: err.to_string(),
                }),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn name(&self) -> String {
        self.url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|segment| !segment.is_empty())
            .unwrap_or(FALLBACK_NAME)
            .to_string()
    }

    pub async fn install<F: Fetch>(&self, target: &Path, fetcher: &F) -> Result<()> {
        let body = fetcher.fetch(&self.url).await?;
        fs::write(target, &body).map_err(HookError::at(target))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(target, fs::Permissions::from_mode(0o755))
                .map_err(HookError::at(target))?;
        }

        debug!(url = %self.url, target = %target.display(), "wrote remote hook");
        Ok(())
    }
}
