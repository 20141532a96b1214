use crate::adapters::HttpFetcher;
use crate::core::engine::ProxyEngine;

/// Shared handler state; one engine reused across requests.
pub struct AppState {
    pub engine: ProxyEngine<HttpFetcher>,
}

impl AppState {
    pub fn new(engine: ProxyEngine<HttpFetcher>) -> Self {
        Self { engine }
    }
}
