use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("rate limited by {domain} (retry after {retry_after_secs}s)")]
    RateLimited {
        domain: String,
        retry_after_secs: u64,
    },

    #[error("list request failed for page {page} with status {status}: {body}")]
    ListPage {
        page: u32,
        status: u16,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    #[error("detail request failed for site {key} with status {status}")]
    Detail { key: String, status: u16 },

    #[error("pagination limit reached: exceeded {max_pages} pages")]
    PaginationLimit { max_pages: usize },
}
