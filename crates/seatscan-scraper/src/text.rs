//! Low-level text helpers shared by the region matcher and seat-count
//! extraction.
//!
//! These functions use manual char scanning rather than `regex` to stay
//! dependency-light. Normalization output is only ever used for matching,
//! never shown to the user.

/// Canonicalizes text for matching: folds accented letters to their base
/// letter and lowercases the result.
///
/// Covers the accented Latin letters that occur in the catalog's French
/// text (Latin-1 Supplement and Latin Extended-A). Characters with no
/// diacritic mapping pass through unchanged, so the function is total and
/// idempotent over arbitrary input.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(fold_diacritic)
        .collect()
}

/// Maps a lowercase accented Latin letter to its unaccented base letter.
fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ź' | 'ż' | 'ž' => 'z',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ţ' | 'ť' => 't',
        'ď' | 'đ' => 'd',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ĺ' | 'ļ' | 'ľ' | 'ł' => 'l',
        'ĥ' | 'ħ' => 'h',
        'ŵ' => 'w',
        other => other,
    }
}

/// Returns the value of the first maximal run of ASCII decimal digits in
/// `text`, scanning left to right.
///
/// U+202F NARROW NO-BREAK SPACE is stripped first — the catalog's French
/// text uses it as a thousands separator, so `"1\u{202f}234 places"`
/// extracts `1234`. Conventional `.`/`,` separators are NOT stripped:
/// `"1.234 places"` extracts `1`. This mirrors the upstream text as
/// observed; widening it would change extracted counts on real data.
///
/// Returns `None` when the text contains no digit, or when the digit run
/// does not fit in a `u64`.
#[must_use]
pub fn first_integer(text: &str) -> Option<u64> {
    let cleaned: String = text.chars().filter(|&c| c != '\u{202f}').collect();
    let bytes = cleaned.as_bytes();
    let len = bytes.len();

    let mut i = 0usize;
    while i < len {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < len && bytes[i].is_ascii_digit() {
                i += 1;
            }
            return cleaned[start..i].parse::<u64>().ok();
        }
        i += 1;
    }
    None
}
