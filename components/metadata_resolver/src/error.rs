use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} fetching {source_id}")]
    Status { source_id: String, status: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
