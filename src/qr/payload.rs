use once_cell::sync::Lazy;
use regex::Regex;

const VERSE_KEY: &str = "verse=";

static RE_LEADING_INTEGER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?)(?:0[xX]([0-9a-fA-F]*)|(\d+))").unwrap()
});

/// Extract the integer following the first `verse=` in a scanned payload.
///
/// Parsing stops at the first non-digit, so `"?verse=2&lang=fr"` yields 2.
/// A `0x` prefix switches to hex digits. Returns `None` when the key is
/// absent or not followed by digits.
pub fn verse_param(payload: &str) -> Option<i64> {
    let (_, rest) = payload.split_once(VERSE_KEY)?;
    let segment = rest.split(VERSE_KEY).next().unwrap_or(rest);
    let caps = RE_LEADING_INTEGER.captures(segment)?;
    let negative = caps.get(1).is_some_and(|sign| sign.as_str() == "-");

    let magnitude = match (caps.get(2), caps.get(3)) {
        (Some(hex), _) if hex.as_str().is_empty() => return None,
        (Some(hex), _) => i64::from_str_radix(hex.as_str(), 16).ok()?,
        (None, Some(decimal)) => decimal.as_str().parse::<i64>().ok()?,
        (None, None) => return None,
    };
    if negative { magnitude.checked_neg() } else { Some(magnitude) }
}

/// URL encoded into the share QR code.
pub fn share_url(base: &str, include_verse: bool, index: usize) -> String {
    if !include_verse {
        return base.to_string();
    }
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}{VERSE_KEY}{index}")
}
