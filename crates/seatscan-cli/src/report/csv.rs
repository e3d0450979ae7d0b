//! Tabular export of harvested site records.
//!
//! The renderer is a pure function over the record sequence so a fixed
//! input always produces byte-identical output. Absent optional fields
//! render as empty cells; downstream consumers read those as "unknown".

use seatscan_core::SiteRecord;

const COLUMNS: [&str; 9] = [
    "id",
    "slug",
    "name",
    "latitude",
    "longitude",
    "available_seats",
    "occupancy_percent",
    "estimated_distance_m",
    "detail_url",
];

/// Renders the records as CSV: fixed header row, then one row per record
/// in sequence order. UTF-8 throughout, so accented names pass through
/// verbatim.
#[must_use]
pub fn render_csv(records: &[SiteRecord]) -> String {
    let mut out = String::new();
    write_row(&mut out, &COLUMNS.map(str::to_owned));
    for record in records {
        write_row(
            &mut out,
            &[
                display_or_empty(record.id),
                record.slug.clone().unwrap_or_default(),
                record.name.clone().unwrap_or_default(),
                display_or_empty(record.latitude),
                display_or_empty(record.longitude),
                display_or_empty(record.available_seats),
                display_or_empty(record.occupancy_percent),
                display_or_empty(record.estimated_distance_m),
                record.detail_url.clone().unwrap_or_default(),
            ],
        );
    }
    out
}

fn display_or_empty<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Appends one CSV row, quoting fields that contain a separator, quote, or
/// line break (quotes escaped by doubling).
fn write_row(out: &mut String, fields: &[String]) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        } else {
            first = false;
        }
        if needs_quotes(field) {
            out.push('"');
            out.push_str(&field.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(field);
        }
    }
    out.push('\n');
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}
