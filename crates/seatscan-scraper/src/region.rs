//! Target-region matching over free-text administrative-area strings.

use crate::text::normalize;

/// Returns `true` when the raw region string denotes Île-de-France.
///
/// The match runs over [`normalize`]d text, so accented and unaccented
/// spellings collapse to the same form. Token co-occurrence ("ile" and
/// "france" both present) is ORed with the exact compounds to tolerate
/// orderings like `"FRANCE (ILE DE)"` as well as the usual
/// `"Île-de-France"` / `"Ile de France"`.
#[must_use]
pub fn is_ile_de_france(region: Option<&str>) -> bool {
    let Some(region) = region else {
        return false;
    };
    let r = normalize(region);
    (r.contains("ile") && r.contains("france"))
        || r.contains("ile-de-france")
        || r.contains("ile de france")
}
