mod error;
mod fetch;

use std::collections::HashMap;
use std::sync::Arc;

use id3_metadata::{extract_tag_fields, fallback_metadata, TrackMetadata};

pub use error::FetchError;
pub use fetch::{BytesFetcher, FileFetcher, HttpFetcher};

/// Resolves display metadata for track sources, caching every result for
/// its own lifetime.
///
/// Resolution never fails from the caller's point of view: a fetch error or
/// an absent tag falls back to filename-derived metadata. The cache keeps
/// whatever was resolved first, including fallbacks from failed fetches, so
/// a transient fetch error is not retried for the life of the resolver.
pub struct MetadataResolver {
    fetcher: Arc<dyn BytesFetcher + Send + Sync>,
    cache: HashMap<String, TrackMetadata>,
}

impl MetadataResolver {
    pub fn new(fetcher: Arc<dyn BytesFetcher + Send + Sync>) -> Self {
        Self {
            fetcher,
            cache: HashMap::new(),
        }
    }

    /// Resolver backed by HTTP fetching, for URL sources.
    pub fn over_http() -> Self {
        Self::new(Arc::new(HttpFetcher::new()))
    }

    /// Resolve title and artist for a source, from cache when possible.
    ///
    /// The fetch is the only suspension point; parsing is synchronous and
    /// bounded by the tag region. Concurrent resolves of the same source
    /// are not deduplicated.
    pub async fn resolve(&mut self, source_id: &str) -> TrackMetadata {
        if let Some(cached) = self.cache.get(source_id) {
            tracing::debug!(source_id, "metadata cache hit");
            return cached.clone();
        }

        let fallback = fallback_metadata(source_id);
        let resolved = match self.fetcher.fetch_bytes(source_id).await {
            Ok(buffer) => {
                let fields = extract_tag_fields(&buffer);
                tracing::debug!(
                    source_id,
                    title_found = fields.title.is_some(),
                    artist_found = fields.artist.is_some(),
                    "parsed tag frames"
                );
                TrackMetadata::merge(fields, fallback)
            }
            Err(err) => {
                tracing::warn!(source_id, %err, "fetch failed, using fallback metadata");
                fallback
            }
        };

        self.cache.insert(source_id.to_owned(), resolved.clone());
        resolved
    }

    /// Previously resolved metadata, without triggering a fetch.
    pub fn cached(&self, source_id: &str) -> Option<&TrackMetadata> {
        self.cache.get(source_id)
    }
}
