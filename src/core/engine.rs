use crate::core::substitute::Substitution;
use crate::core::transform::transform;
use crate::domain::model::TransformOutcome;
use crate::domain::ports::Fetcher;
use crate::utils::error::Result;
use crate::utils::validation;

/// Fetch-then-transform front door used by the request handlers.
/// Stateless per call; one engine is shared across requests.
pub struct ProxyEngine<F: Fetcher> {
    fetcher: F,
    substitution: Substitution,
}

impl<F: Fetcher> ProxyEngine<F> {
    pub fn new(fetcher: F, substitution: Substitution) -> Self {
        Self {
            fetcher,
            substitution,
        }
    }

    /// Validates the URL, fetches the page, and returns the rewritten
    /// document. Invalid input is rejected before any network traffic.
    pub async fn run(&self, url: &str) -> Result<TransformOutcome> {
        validation::validate_url(url)?;

        tracing::debug!("Fetching {}", url);
        let page = self.fetcher.fetch(url).await?;
        tracing::debug!(
            "Fetched {} bytes (content type: {:?})",
            page.body.len(),
            page.content_type
        );

        transform(&page.body, url, &self.substitution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FetchedPage;
    use crate::utils::error::FaleproxyError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct MockFetcher {
        body: String,
        calls: Arc<AtomicUsize>,
    }

    impl MockFetcher {
        fn new(body: &str) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    body: body.to_string(),
                    calls: calls.clone(),
                },
                calls,
            )
        }
    }

    #[async_trait]
    impl Fetcher for MockFetcher {
        async fn fetch(&self, _url: &str) -> Result<FetchedPage> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(FetchedPage {
                body: self.body.clone(),
                content_type: Some("text/html".to_string()),
            })
        }
    }

    fn engine_with(body: &str) -> (ProxyEngine<MockFetcher>, Arc<AtomicUsize>) {
        let (fetcher, calls) = MockFetcher::new(body);
        let substitution = Substitution::new("Yale", "Fale").unwrap();
        (ProxyEngine::new(fetcher, substitution), calls)
    }

    #[tokio::test]
    async fn test_run_fetches_and_transforms() {
        let (engine, calls) = engine_with(
            "<html><head><title>Yale</title></head><body><p>Yale</p></body></html>",
        );

        let outcome = engine.run("https://example.com/page").await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(outcome.title, "Fale");
        assert!(outcome.html.contains("<p>Fale</p>"));
        assert!(outcome.html.contains(r#"<base href="https://example.com/">"#));
    }

    #[tokio::test]
    async fn test_invalid_url_is_rejected_before_fetch() {
        let (engine, calls) = engine_with("<html></html>");

        let err = engine.run("not-a-valid-url").await.unwrap_err();

        assert!(matches!(err, FaleproxyError::InvalidUrl { .. }));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_url_is_missing_url() {
        let (engine, calls) = engine_with("<html></html>");

        let err = engine.run("  ").await.unwrap_err();

        assert!(matches!(err, FaleproxyError::MissingUrl));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_non_http_scheme_is_rejected() {
        let (engine, calls) = engine_with("<html></html>");

        let err = engine.run("ftp://example.com/file").await.unwrap_err();

        assert!(matches!(err, FaleproxyError::InvalidUrl { .. }));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
