//! HTTP client for the catalog's listing and detail endpoints.

use std::time::Duration;

use reqwest::Client;
use seatscan_core::AppConfig;

use crate::error::ScraperError;
use crate::retry::retry_with_backoff;
use crate::types::{RawSite, SiteEnvelope, SitesEnvelope};

/// Maximum number of listing pages to fetch before returning an error.
/// Prevents infinite loops if the upstream never yields an empty page.
///
/// Note: each page request may be retried up to `max_retries` times on
/// transient errors, so the effective worst-case request count is
/// `MAX_PAGES * (1 + max_retries)`.
pub(crate) const MAX_PAGES: usize = 200;

/// HTTP client for the catalog API.
///
/// Every request carries the fixed integration headers (Accept, Origin,
/// Referer; User-Agent via the underlying client) from [`AppConfig`].
/// Rate limiting (429) and other non-2xx responses surface as typed
/// errors; transient errors (429, network failures) are retried with
/// exponential backoff up to `max_retries` additional attempts.
pub struct CatalogClient {
    client: Client,
    list_url: String,
    site_url_base: String,
    origin: String,
    referer: String,
    accept: String,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff: `backoff_base_secs * 2^attempt`.
    backoff_base_secs: u64,
}

impl CatalogClient {
    /// Creates a `CatalogClient` from the transport slice of the
    /// configuration: endpoint URLs, header strings, timeout, and retry
    /// policy. Tests point `list_url`/`site_url_base` at a local mock
    /// server through the same config struct.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(config: &AppConfig) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            client,
            list_url: config.list_url.clone(),
            site_url_base: config.site_url_base.clone(),
            origin: config.origin.clone(),
            referer: config.referer.clone(),
            accept: config.accept.clone(),
            max_retries: config.max_retries,
            backoff_base_secs: config.retry_backoff_base_secs,
        })
    }

    /// Fetches one zero-indexed page of the site listing, with automatic
    /// retry on transient errors.
    ///
    /// An empty returned `Vec` signals the end of pagination.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::RateLimited`] — HTTP 429 after all retries exhausted.
    /// - [`ScraperError::ListPage`] — any other non-2xx status, carrying the
    ///   page index and raw body (not retried).
    /// - [`ScraperError::Http`] — network or TLS failure after all retries exhausted.
    /// - [`ScraperError::Deserialize`] — response body is not a listing envelope (not retried).
    pub async fn fetch_sites_page(
        &self,
        category_id: u32,
        page: u32,
    ) -> Result<Vec<RawSite>, ScraperError> {
        let payload = serde_json::json!({
            "selected_categories": [category_id],
            "page": page,
        });

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let payload = payload.clone();
            async move {
                let response = self
                    .client
                    .post(&self.list_url)
                    .header(reqwest::header::ACCEPT, &self.accept)
                    .header(reqwest::header::ORIGIN, &self.origin)
                    .header(reqwest::header::REFERER, &self.referer)
                    .json(&payload)
                    .send()
                    .await?;
                let status = response.status();

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    return Err(self.rate_limited(&response));
                }

                if !status.is_success() {
                    let body = response.text().await.unwrap_or_default();
                    return Err(ScraperError::ListPage {
                        page,
                        status: status.as_u16(),
                        body,
                    });
                }

                let body = response.text().await?;
                let parsed = serde_json::from_str::<SitesEnvelope>(&body).map_err(|e| {
                    ScraperError::Deserialize {
                        context: format!("sites listing page {page}"),
                        source: e,
                    }
                })?;

                Ok(parsed.data.results)
            }
        })
        .await
    }

    /// Fetches every listing page for `category_id` until an empty page
    /// signals completion, accumulating sites in fetch order.
    ///
    /// `inter_request_delay_ms` is slept after each non-empty page to pace
    /// requests toward the remote service.
    ///
    /// **All-or-nothing semantics**: on any page failure, already-fetched
    /// sites from earlier pages are discarded and the error is returned.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_sites_page`]. Returns
    /// [`ScraperError::PaginationLimit`] if the page count exceeds
    /// [`MAX_PAGES`].
    pub async fn fetch_all_sites(
        &self,
        category_id: u32,
        inter_request_delay_ms: u64,
    ) -> Result<Vec<RawSite>, ScraperError> {
        let mut all_sites: Vec<RawSite> = Vec::new();
        let mut page = 0u32;

        loop {
            if page as usize >= MAX_PAGES {
                return Err(ScraperError::PaginationLimit {
                    max_pages: MAX_PAGES,
                });
            }

            let results = self.fetch_sites_page(category_id, page).await?;
            if results.is_empty() {
                break;
            }
            tracing::debug!(page, count = results.len(), "listing page fetched");
            all_sites.extend(results);
            page += 1;

            if inter_request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(inter_request_delay_ms)).await;
            }
        }

        Ok(all_sites)
    }

    /// Fetches the detail payload for one site, keyed by its slug (or
    /// stringified ID). Pure fetch-or-fail: substituting the listing
    /// record on failure is the pipeline's decision, not this method's.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::RateLimited`] — HTTP 429 after all retries exhausted.
    /// - [`ScraperError::Detail`] — any other non-2xx status, naming the key (not retried).
    /// - [`ScraperError::Http`] — network or TLS failure after all retries exhausted.
    /// - [`ScraperError::Deserialize`] — response body is not a detail envelope (not retried).
    pub async fn fetch_site_detail(&self, key: &str) -> Result<RawSite, ScraperError> {
        let url = self.detail_url(key);

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                let response = self
                    .client
                    .get(&url)
                    .header(reqwest::header::ACCEPT, &self.accept)
                    .header(reqwest::header::ORIGIN, &self.origin)
                    .header(reqwest::header::REFERER, &self.referer)
                    .send()
                    .await?;
                let status = response.status();

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    return Err(self.rate_limited(&response));
                }

                if !status.is_success() {
                    return Err(ScraperError::Detail {
                        key: key.to_owned(),
                        status: status.as_u16(),
                    });
                }

                let body = response.text().await?;
                let parsed = serde_json::from_str::<SiteEnvelope>(&body).map_err(|e| {
                    ScraperError::Deserialize {
                        context: format!("site detail for {key}"),
                        source: e,
                    }
                })?;

                Ok(parsed.data)
            }
        })
        .await
    }

    /// Builds the detail URL for a site key.
    fn detail_url(&self, key: &str) -> String {
        format!("{}/{}", self.site_url_base.trim_end_matches('/'), key)
    }

    /// Builds a [`ScraperError::RateLimited`] from a 429 response, honoring
    /// its `Retry-After` header (default 60 s when absent or unparseable).
    fn rate_limited(&self, response: &reqwest::Response) -> ScraperError {
        let retry_after_secs = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(60);
        ScraperError::RateLimited {
            domain: extract_domain(&self.list_url),
            retry_after_secs,
        }
    }
}

/// Extracts the hostname from a URL for use in error messages.
///
/// Falls back to the full URL string if parsing fails.
fn extract_domain(url: &str) -> String {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| url.to_owned())
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
