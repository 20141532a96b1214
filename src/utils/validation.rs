use url::Url;

use crate::utils::error::{FaleproxyError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks that a request URL is an absolute http(s) URL.
pub fn validate_url(url_str: &str) -> Result<()> {
    if url_str.trim().is_empty() {
        return Err(FaleproxyError::MissingUrl);
    }

    let url = Url::parse(url_str).map_err(|e| FaleproxyError::InvalidUrl {
        url: url_str.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(FaleproxyError::InvalidUrl {
            url: url_str.to_string(),
            reason: format!("unsupported URL scheme: {}", scheme),
        }),
    }
}

pub fn validate_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FaleproxyError::InvalidConfigValue {
            field: field.to_string(),
            reason: "value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
