pub mod web;

use crate::errors::FetchError;
use async_trait::async_trait;

pub use web::WebFetcher;

/// Retrieves the raw document bytes for a URL
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
