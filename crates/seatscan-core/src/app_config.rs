/// Runtime configuration for a harvest run.
///
/// Every field has a default baked into `config::build_config`, so a bare
/// environment produces a working configuration pointed at the production
/// catalog. The header strings are static integration identifiers, not
/// secrets.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// POST endpoint returning paginated site listings.
    pub list_url: String,
    /// GET endpoint base for per-site detail; the site key is appended as a
    /// path segment.
    pub site_url_base: String,
    /// Public site-page base used to construct a detail link when the
    /// payload carries none.
    pub site_page_base: String,
    pub origin: String,
    pub referer: String,
    pub user_agent: String,
    pub accept: String,
    /// Catalog category to harvest (1 = libraries).
    pub category_id: u32,
    pub request_timeout_secs: u64,
    /// Pause between consecutive requests, both across listing pages and
    /// across per-site detail fetches.
    pub inter_request_delay_ms: u64,
    /// Additional attempts after the first failure for transient errors.
    /// `0` preserves strict single-attempt semantics.
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
    pub log_level: String,
}
