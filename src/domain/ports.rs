use crate::domain::model::FetchedPage;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Fetch collaborator: given a URL, returns the raw document or a
/// fetch error. Non-2xx responses count as errors.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_host(&self) -> &str;
    fn port(&self) -> u16;
    fn static_dir(&self) -> &str;
    fn target_word(&self) -> &str;
    fn substitute_word(&self) -> &str;
}
