//! Catalog API response types for the site listing and detail endpoints.
//!
//! ## Observed shape from the live catalog
//!
//! ### Listing vs. detail payloads
//! The listing endpoint returns site objects under `data.results`; the
//! detail endpoint returns one site object under `data`. The two shapes
//! overlap (`infos` appears in both, `current_forecast` and `url` only in
//! detail payloads), and when a detail fetch fails the pipeline substitutes
//! the listing object as the detail source. A single [`RawSite`] type with
//! every non-essential field defaulted models both payloads and lets that
//! substitution degrade to absent fields instead of a parse failure.
//!
//! ### `infos`
//! Ordered list of free-text `{title, description}` pairs. Sites encode
//! ad-hoc facts here (opening hours, seat counts, access rules) with no
//! fixed schema; either member may be `null` or empty. Order is
//! meaningful — seat extraction scans entries in listing order.
//!
//! ### `location`
//! Nested `address` (free-text `region` / `route` / `city`) and optional
//! `coordinates`. Coordinates have been observed with a lone latitude, so
//! both members are modeled independently and [`RawSite::coordinate_pair`]
//! only yields a position when both are present.
//!
//! ### `current_forecast.occupancy`
//! A plain number (percentage) when the site publishes a forecast, absent
//! otherwise. Passed through without interpretation.

use serde::Deserialize;

/// Top-level response from the paginated listing endpoint.
#[derive(Debug, Deserialize)]
pub struct SitesEnvelope {
    #[serde(default)]
    pub data: SitesData,
}

/// `data` member of a listing response. An empty `results` list signals the
/// end of pagination.
#[derive(Debug, Default, Deserialize)]
pub struct SitesData {
    #[serde(default)]
    pub results: Vec<RawSite>,
}

/// Top-level response from the per-site detail endpoint.
#[derive(Debug, Deserialize)]
pub struct SiteEnvelope {
    pub data: RawSite,
}

/// One site as returned by either catalog endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSite {
    /// Catalog-unique numeric site ID.
    pub id: i64,

    /// URL slug; used as the detail-fetch key when present.
    #[serde(default)]
    pub slug: Option<String>,

    /// Preferred display name.
    #[serde(default)]
    pub primary_name: Option<String>,

    /// Fallback display name when `primary_name` is absent.
    #[serde(default)]
    pub concat_name: Option<String>,

    #[serde(default)]
    pub location: Location,

    /// Distance from the query point in meters, when the catalog computes one.
    #[serde(default)]
    pub estimated_distance: Option<f64>,

    /// Free-text fact entries, in listing order.
    #[serde(default)]
    pub infos: Vec<InfoEntry>,

    /// Occupancy forecast; detail payloads only.
    #[serde(default)]
    pub current_forecast: Option<Forecast>,

    /// Canonical detail-page URL; detail payloads only.
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Address {
    /// Free-text administrative-area string, e.g. `"Île-de-France"`.
    #[serde(default)]
    pub region: Option<String>,
    /// Street line.
    #[serde(default)]
    pub route: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Coordinates {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// One free-text fact attached to a site.
#[derive(Debug, Clone, Deserialize)]
pub struct InfoEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub occupancy: Option<f64>,
}

impl RawSite {
    /// Display name: `primary_name`, falling back to `concat_name`.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.primary_name.as_deref().or(self.concat_name.as_deref())
    }

    /// Key for the detail endpoint: the slug, or the numeric ID rendered as
    /// a string when no slug exists.
    #[must_use]
    pub fn detail_key(&self) -> String {
        self.slug
            .clone()
            .unwrap_or_else(|| self.id.to_string())
    }

    /// Both coordinates, or `None` when either axis is missing.
    #[must_use]
    pub fn coordinate_pair(&self) -> Option<(f64, f64)> {
        self.location
            .coordinates
            .as_ref()
            .and_then(|c| c.latitude.zip(c.longitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_from_json(json: serde_json::Value) -> RawSite {
        serde_json::from_value(json).expect("fixture should deserialize")
    }

    #[test]
    fn deserializes_minimal_listing_site() {
        let site = site_from_json(serde_json::json!({"id": 7}));
        assert_eq!(site.id, 7);
        assert!(site.slug.is_none());
        assert!(site.infos.is_empty());
        assert!(site.location.coordinates.is_none());
        assert!(site.current_forecast.is_none());
    }

    #[test]
    fn deserializes_detail_fields() {
        let site = site_from_json(serde_json::json!({
            "id": 7,
            "slug": "bpi-beaubourg",
            "current_forecast": {"occupancy": 62.5},
            "url": "https://affluences.com/site/bpi-beaubourg"
        }));
        assert_eq!(
            site.current_forecast.and_then(|f| f.occupancy),
            Some(62.5)
        );
        assert_eq!(
            site.url.as_deref(),
            Some("https://affluences.com/site/bpi-beaubourg")
        );
    }

    #[test]
    fn display_name_prefers_primary() {
        let site = site_from_json(serde_json::json!({
            "id": 1,
            "primary_name": "BPI",
            "concat_name": "BPI — Beaubourg"
        }));
        assert_eq!(site.display_name(), Some("BPI"));
    }

    #[test]
    fn display_name_falls_back_to_concat() {
        let site = site_from_json(serde_json::json!({
            "id": 1,
            "concat_name": "BPI — Beaubourg"
        }));
        assert_eq!(site.display_name(), Some("BPI — Beaubourg"));
    }

    #[test]
    fn detail_key_prefers_slug() {
        let site = site_from_json(serde_json::json!({"id": 42, "slug": "bpi"}));
        assert_eq!(site.detail_key(), "bpi");
    }

    #[test]
    fn detail_key_falls_back_to_id() {
        let site = site_from_json(serde_json::json!({"id": 42}));
        assert_eq!(site.detail_key(), "42");
    }

    #[test]
    fn coordinate_pair_requires_both_axes() {
        let both = site_from_json(serde_json::json!({
            "id": 1,
            "location": {"coordinates": {"latitude": 48.8, "longitude": 2.3}}
        }));
        assert_eq!(both.coordinate_pair(), Some((48.8, 2.3)));

        let lone_latitude = site_from_json(serde_json::json!({
            "id": 2,
            "location": {"coordinates": {"latitude": 48.8}}
        }));
        assert!(lone_latitude.coordinate_pair().is_none());

        let absent = site_from_json(serde_json::json!({"id": 3}));
        assert!(absent.coordinate_pair().is_none());
    }
}
