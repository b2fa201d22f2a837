use async_trait::async_trait;

use crate::error::FetchError;

/// Supplies the raw bytes of a track for a source identifier.
///
/// Implementations only need to produce enough of the file for its leading
/// ID3v2 tag; returning the whole file is always correct.
#[async_trait]
pub trait BytesFetcher {
    async fn fetch_bytes(&self, source_id: &str) -> Result<Vec<u8>, FetchError>;
}

/// Fetches track bytes over HTTP with a shared connection pool.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BytesFetcher for HttpFetcher {
    async fn fetch_bytes(&self, source_id: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(source_id).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                source_id: source_id.to_owned(),
                status: status.as_u16(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Reads track bytes from the local filesystem.
pub struct FileFetcher;

#[async_trait]
impl BytesFetcher for FileFetcher {
    async fn fetch_bytes(&self, source_id: &str) -> Result<Vec<u8>, FetchError> {
        Ok(tokio::fs::read(source_id).await?)
    }
}
