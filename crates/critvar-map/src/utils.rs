//! Utility functions for matching operations.

use std::fmt::Display;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalizes text for comparison.
///
/// Trims, lowercases, strips diacritics (NFD decomposition with combining
/// marks dropped), and collapses every run of characters outside `[a-z0-9]`
/// into a single space. Non-string values are formatted first, so numeric
/// column headers normalize like their textual form.
pub fn normalize_text(raw: impl Display) -> String {
    let lowered = raw.to_string().trim().to_lowercase();
    let mut normalized = String::with_capacity(lowered.len());
    let mut pending_space = false;
    for ch in lowered.nfd().filter(|c| !is_combining_mark(*c)) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_space && !normalized.is_empty() {
                normalized.push(' ');
            }
            pending_space = false;
            normalized.push(ch);
        } else {
            pending_space = true;
        }
    }
    normalized
}

/// Rounds `value` half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
