//! Harvest pipeline: paginate the catalog, filter to the target region,
//! enrich each surviving site with its detail payload, extract seat
//! counts, and assemble normalized records.

use std::time::Duration;

use seatscan_core::SiteRecord;

use crate::client::CatalogClient;
use crate::error::ScraperError;
use crate::region::is_ile_de_france;
use crate::seats::{any_seat_count, keyword_seat_count, SEAT_KEYWORDS};
use crate::types::RawSite;

/// Knobs the pipeline needs beyond what [`CatalogClient`] already holds.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Catalog category to harvest (1 = libraries).
    pub category_id: u32,
    /// Pause after each listing page and each per-site enrichment.
    pub inter_request_delay_ms: u64,
}

/// Runs the full harvest and returns the normalized records, in listing
/// order.
///
/// A listing-page failure aborts the run. A per-site detail failure is
/// recovered locally: the listing record substitutes for the detail
/// payload, a warning names the site and cause, and the run continues —
/// downstream field access then resolves to absent values instead of
/// failing.
///
/// # Errors
///
/// Propagates any error from [`CatalogClient::fetch_all_sites`].
pub async fn run_pipeline(
    client: &CatalogClient,
    options: &PipelineOptions,
) -> Result<Vec<SiteRecord>, ScraperError> {
    let all_sites = client
        .fetch_all_sites(options.category_id, options.inter_request_delay_ms)
        .await?;
    tracing::info!(total = all_sites.len(), "catalog listing fetched");

    let libraries: Vec<RawSite> = all_sites
        .into_iter()
        .filter(|s| is_ile_de_france(s.location.address.region.as_deref()))
        .collect();
    tracing::info!(matched = libraries.len(), "sites in target region");

    let mut records = Vec::with_capacity(libraries.len());
    for site in &libraries {
        let key = site.detail_key();
        let detail = match client.fetch_site_detail(&key).await {
            Ok(detail) => detail,
            Err(e) => {
                tracing::warn!(
                    site = %key,
                    error = %e,
                    "detail fetch failed — falling back to listing record"
                );
                site.clone()
            }
        };

        records.push(build_record(site, &detail));

        if options.inter_request_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(options.inter_request_delay_ms)).await;
        }
    }

    Ok(records)
}

/// Folds a listing site and its detail source (the detail payload, or the
/// listing record itself after a failed fetch) into one [`SiteRecord`].
fn build_record(site: &RawSite, detail: &RawSite) -> SiteRecord {
    // The detail payload's infos win; an absent or empty list falls back
    // to whatever the listing carried.
    let infos = if detail.infos.is_empty() {
        &site.infos
    } else {
        &detail.infos
    };
    let available_seats =
        keyword_seat_count(infos, SEAT_KEYWORDS).or_else(|| any_seat_count(infos));

    let occupancy_percent = detail.current_forecast.as_ref().and_then(|f| f.occupancy);

    let (latitude, longitude) = match site.coordinate_pair() {
        Some((lat, lon)) => (Some(lat), Some(lon)),
        None => (None, None),
    };

    SiteRecord {
        id: Some(site.id),
        slug: site.slug.clone(),
        name: site.display_name().map(str::to_owned),
        route: site.location.address.route.clone(),
        city: site.location.address.city.clone(),
        latitude,
        longitude,
        available_seats,
        occupancy_percent,
        estimated_distance_m: site.estimated_distance,
        detail_url: detail.url.clone(),
    }
}
