use std::sync::Arc;

use async_trait::async_trait;
use clap::Subcommand;
use color_eyre::Result;
use id3_metadata::TrackMetadata;
use metadata_resolver::{BytesFetcher, FetchError, FileFetcher, HttpFetcher, MetadataResolver};

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve title and artist for a single source
    Probe {
        /// URL or local path of the audio file
        source: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve several sources in one run, sharing the metadata cache
    Batch {
        /// URLs or local paths
        #[arg(required = true)]
        sources: Vec<String>,

        /// Print each result as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Dispatches to HTTP or filesystem fetching based on the source shape.
struct AutoFetcher {
    http: HttpFetcher,
    file: FileFetcher,
}

#[async_trait]
impl BytesFetcher for AutoFetcher {
    async fn fetch_bytes(&self, source_id: &str) -> Result<Vec<u8>, FetchError> {
        if source_id.starts_with("http://") || source_id.starts_with("https://") {
            self.http.fetch_bytes(source_id).await
        } else {
            self.file.fetch_bytes(source_id).await
        }
    }
}

pub fn resolver() -> MetadataResolver {
    MetadataResolver::new(Arc::new(AutoFetcher {
        http: HttpFetcher::new(),
        file: FileFetcher,
    }))
}

pub fn print_metadata(source: &str, metadata: &TrackMetadata, json: bool) -> Result<()> {
    if json {
        let line = serde_json::json!({
            "source": source,
            "title": metadata.title,
            "artist": metadata.artist,
        });
        println!("{}", serde_json::to_string(&line)?);
    } else {
        println!("{}: {}", source, metadata.display_name());
    }
    Ok(())
}
