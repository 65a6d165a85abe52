//! Result ranking.
//!
//! Every mode is a total order with explicit tie-breaks, so ranking the same
//! input twice always gives the same output.

use std::cmp::Ordering;

use crate::domain::{EnrichedResult, SortMode};

/// Smallest digit count of a mobile-like phone number.
const MOBILE_MIN_DIGITS: usize = 9;

/// Largest digit count of a mobile-like phone number.
const MOBILE_MAX_DIGITS: usize = 15;

/// Whether a phone number looks like a mobile number: 9 to 15 digits once
/// everything that is not a digit is stripped.
pub fn is_mobile_like(phone: &str) -> bool {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    (MOBILE_MIN_DIGITS..=MOBILE_MAX_DIGITS).contains(&digits)
}

/// Rank results for display.
///
/// - `PhoneFirst`: places with a phone before places without; within each
///   group mobile-like numbers first; then by name.
/// - `Alphabetical`: by name.
/// - `None`: input order, unchanged.
///
/// Names compare case-insensitively, then case-sensitively, then by place
/// ID. The sort is stable.
pub fn rank_results(mut results: Vec<EnrichedResult>, mode: SortMode) -> Vec<EnrichedResult> {
    match mode {
        SortMode::None => {}
        SortMode::Alphabetical => results.sort_by(compare_names),
        SortMode::PhoneFirst => results.sort_by(|a, b| {
            // Primary: has a phone
            b.has_phone()
                .cmp(&a.has_phone())
                // Secondary: mobile-like
                .then_with(|| mobile_like(b).cmp(&mobile_like(a)))
                // Tertiary: name
                .then_with(|| compare_names(a, b))
        }),
    }

    results
}

fn mobile_like(result: &EnrichedResult) -> bool {
    result.phone.as_deref().is_some_and(is_mobile_like)
}

fn compare_names(a: &EnrichedResult, b: &EnrichedResult) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}
