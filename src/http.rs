use std::future::Future;

use reqwest::{Client, Url};
use tracing::debug;

use crate::{config::HookConfig, error::Result};

const USER_AGENT: &str = concat!("git-hook/", env!("CARGO_PKG_VERSION"));

/// Source of remote hook script bodies.
pub trait Fetch {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<Vec<u8>>>;
}

#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &HookConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.fetch_timeout())
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        debug!(%url, "fetching remote hook");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;
        debug!(%url, bytes = body.len(), "fetched remote hook");
        Ok(body.to_vec())
    }
}
