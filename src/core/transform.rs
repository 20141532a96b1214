use scraper::Html;
use url::Url;

use crate::core::normalize::ensure_base_href;
use crate::core::substitute::Substitution;
use crate::core::walker::{rewrite_text_nodes, rewrite_title};
use crate::domain::model::TransformOutcome;
use crate::utils::error::{FaleproxyError, Result};

/// Runs the full rewrite over one fetched page: body text substitution,
/// title substitution, then the base-href patch. Performs no I/O; the
/// document lives only for the duration of the call.
pub fn transform(
    raw_html: &str,
    request_url: &str,
    substitution: &Substitution,
) -> Result<TransformOutcome> {
    let url = Url::parse(request_url).map_err(|e| FaleproxyError::InvalidUrl {
        url: request_url.to_string(),
        reason: e.to_string(),
    })?;

    let mut doc = Html::parse_document(raw_html);

    let rewritten = rewrite_text_nodes(&mut doc, substitution);
    tracing::debug!("Rewrote {} text nodes", rewritten);

    let title = rewrite_title(&mut doc, substitution);
    ensure_base_href(&mut doc, &url);

    Ok(TransformOutcome {
        html: doc.html(),
        title,
        original_url: request_url.to_string(),
    })
}
