//! Point-map rendering of harvested site records.
//!
//! Emits a self-contained Leaflet HTML document (CDN assets): one marker
//! per record with coordinates, centered on the mean of all present
//! coordinate pairs. Records without coordinates still appear in the CSV
//! export but are skipped here.

use seatscan_core::SiteRecord;

/// Map center when no record carries coordinates (Paris).
const DEFAULT_CENTER: (f64, f64) = (48.8566, 2.3522);

const ZOOM: u32 = 10;

/// Renders the interactive map document.
///
/// Each marker carries the site name as tooltip and a popup with the
/// address line, seat count or "unknown", occupancy or "unknown", and a
/// detail link — `detail_url` when the payload provided one, else a link
/// constructed from `site_page_base` and the slug.
#[must_use]
pub fn render_map(records: &[SiteRecord], site_page_base: &str) -> String {
    let (center_lat, center_lon) = map_center(records);

    let mut out = String::new();
    out.push_str(concat!(
        "<!DOCTYPE html>\n",
        "<html>\n",
        "<head>\n",
        "<meta charset=\"utf-8\"/>\n",
        "<title>Library seating map</title>\n",
        "<link rel=\"stylesheet\" href=\"https://unpkg.com/leaflet@1.9.4/dist/leaflet.css\"/>\n",
        "<script src=\"https://unpkg.com/leaflet@1.9.4/dist/leaflet.js\"></script>\n",
        "<style>html, body, #map { height: 100%; margin: 0; }</style>\n",
        "</head>\n",
        "<body>\n",
        "<div id=\"map\"></div>\n",
        "<script>\n",
    ));
    out.push_str(&format!(
        "var map = L.map(\"map\").setView([{center_lat}, {center_lon}], {ZOOM});\n"
    ));
    out.push_str(concat!(
        "L.tileLayer(\"https://tile.openstreetmap.org/{z}/{x}/{y}.png\", ",
        "{ maxZoom: 19, attribution: \"&copy; OpenStreetMap contributors\" }",
        ").addTo(map);\n",
    ));

    for record in records {
        let Some((lat, lon)) = record.coordinate_pair() else {
            continue;
        };
        let name = record.name.as_deref().unwrap_or_default();
        let popup = popup_html(record, site_page_base);
        out.push_str(&format!(
            "L.marker([{lat}, {lon}]).addTo(map).bindTooltip(\"{}\").bindPopup(\"{}\");\n",
            escape_js(&escape_html(name)),
            escape_js(&popup),
        ));
    }

    out.push_str("</script>\n</body>\n</html>\n");
    out
}

/// Arithmetic mean of all present coordinate pairs, or the fixed default
/// when none exist.
fn map_center(records: &[SiteRecord]) -> (f64, f64) {
    let coords: Vec<(f64, f64)> = records
        .iter()
        .filter_map(SiteRecord::coordinate_pair)
        .collect();
    if coords.is_empty() {
        return DEFAULT_CENTER;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = coords.len() as f64;
    let lat = coords.iter().map(|c| c.0).sum::<f64>() / n;
    let lon = coords.iter().map(|c| c.1).sum::<f64>() / n;
    (lat, lon)
}

fn popup_html(record: &SiteRecord, site_page_base: &str) -> String {
    let name = escape_html(record.name.as_deref().unwrap_or_default());
    let address = escape_html(&format!(
        "{} {}",
        record.route.as_deref().unwrap_or_default(),
        record.city.as_deref().unwrap_or_default(),
    ));
    let seats = record
        .available_seats
        .map_or_else(|| "unknown".to_owned(), |n| n.to_string());
    let occupancy = record
        .occupancy_percent
        .map_or_else(|| "unknown".to_owned(), |p| p.to_string());
    let detail_url = record.detail_url.clone().unwrap_or_else(|| {
        format!(
            "{}/{}",
            site_page_base.trim_end_matches('/'),
            record.slug.as_deref().unwrap_or_default()
        )
    });

    format!(
        "<strong>{name}</strong><br/>{address}<br/>Available seats: {seats}<br/>Occupancy: {occupancy}%<br/><a href=\"{}\" target=\"_blank\">Site detail</a>",
        escape_html(&detail_url),
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Escapes text for embedding in a double-quoted JS string literal.
/// `</` is broken up so popup content can never terminate the script tag.
fn escape_js(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace("</", "<\\/")
}
