use thiserror::Error;

#[derive(Error, Debug)]
pub enum FaleproxyError {
    #[error("URL is required")]
    MissingUrl,

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to fetch content: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Invalid substitution pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidConfigValue { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, FaleproxyError>;
