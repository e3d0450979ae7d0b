use serde::Serialize;

/// One normalized site produced by the harvest pipeline.
///
/// Optional fields stay `None` when the catalog did not provide them; the
/// exporters render them as empty cells or "unknown". `latitude` and
/// `longitude` are set together or not at all — records are built from a
/// coordinate pair, never from a lone axis.
#[derive(Debug, Clone, Serialize)]
pub struct SiteRecord {
    pub id: Option<i64>,
    pub slug: Option<String>,
    pub name: Option<String>,
    pub route: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub available_seats: Option<u64>,
    pub occupancy_percent: Option<f64>,
    pub estimated_distance_m: Option<f64>,
    pub detail_url: Option<String>,
}

impl SiteRecord {
    /// Both coordinates, or `None` when the site has no usable position.
    #[must_use]
    pub fn coordinate_pair(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}
