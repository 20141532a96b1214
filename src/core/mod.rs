pub mod engine;
pub mod normalize;
pub mod substitute;
pub mod transform;
pub mod walker;

pub use crate::domain::model::{FetchedPage, TransformOutcome};
pub use crate::domain::ports::{ConfigProvider, Fetcher};
pub use crate::utils::error::Result;
