//! Seat-count extraction from a site's free-text info entries.
//!
//! Two independent passes compose into the full heuristic: a
//! keyword-guided pass that prefers entries explicitly labeled as seat
//! availability, and a blind fallback pass that takes the first number
//! found anywhere. The pipeline chains them with `or_else`; each pass is a
//! pure function so both are testable in isolation.

use crate::text::{first_integer, normalize};
use crate::types::InfoEntry;

/// Keyword phrases denoting "available seats", bilingual, in match
/// priority order. Matching runs over normalized (unaccented, lowercase)
/// text, so the entries are stored pre-normalized.
pub const SEAT_KEYWORDS: &[&str] = &[
    "available",
    "available seats",
    "available places",
    "places disponibles",
    "places disponibles",
    "places",
    "places disponibles (approx)",
    "places disponibles (approx.)",
    "places disponibles approximatives",
    "places disponibles approximative",
];

/// Keyword-guided pass: scans entries in order and, for the first entry
/// whose normalized title+description contains any keyword AND yields an
/// integer, returns that integer.
///
/// An entry that matches a keyword but contains no extractable number is
/// skipped, letting a later entry win.
#[must_use]
pub fn keyword_seat_count(infos: &[InfoEntry], keywords: &[&str]) -> Option<u64> {
    for info in infos {
        let title = normalize(info.title.as_deref().unwrap_or_default());
        let description = normalize(info.description.as_deref().unwrap_or_default());
        let combined = format!("{title} {description}");
        if keywords.iter().any(|kw| combined.contains(kw)) {
            if let Some(n) = first_integer(extraction_text(info)) {
                return Some(n);
            }
        }
    }
    None
}

/// Blind fallback pass: the first integer extracted from any entry's
/// description-or-title, in order, with no keyword requirement.
#[must_use]
pub fn any_seat_count(infos: &[InfoEntry]) -> Option<u64> {
    infos.iter().find_map(|info| first_integer(extraction_text(info)))
}

/// The text an entry's number is read from: the description when
/// non-empty, else the title.
fn extraction_text(info: &InfoEntry) -> &str {
    match info.description.as_deref() {
        Some(d) if !d.is_empty() => d,
        _ => info.title.as_deref().unwrap_or_default(),
    }
}
