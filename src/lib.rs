pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::HttpFetcher;
pub use crate::config::CliConfig;
pub use crate::core::{engine::ProxyEngine, substitute::Substitution, transform::transform};
pub use crate::domain::model::TransformOutcome;
pub use crate::utils::error::{FaleproxyError, Result};
