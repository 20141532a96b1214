use async_trait::async_trait;
use reqwest::Client;

use crate::domain::model::FetchedPage;
use crate::domain::ports::Fetcher;
use crate::utils::error::Result;

/// Fetches remote documents over HTTP. Non-2xx responses are treated
/// as fetch failures, matching the upstream error reporting contract.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        let response = self.client.get(url).send().await?.error_for_status()?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response.text().await?;
        Ok(FetchedPage { body, content_type })
    }
}
