//! Canonical forms used on both sides of every comparison and for store lookup keys.
//!
//! Each function returns `None` when nothing meaningful remains, so that an empty or blank
//! field is treated exactly like a missing one.

use itertools::Itertools;

/// Trims, collapses inner whitespace and lowercases a name.
pub fn normalize_name(value: &str) -> Option<String> {
    let normalized = value.split_whitespace().join(" ").to_lowercase();
    (!normalized.is_empty()).then_some(normalized)
}

/// Flattens name parts into the token set used for order-independent name matching.
///
/// Each part contributes its whole normalized form as well as its individual words, so
/// `["Mary Ann", "Smith"]` yields `mary ann`, `mary`, `ann` and `smith`. The result contains no
/// duplicates and keeps first-seen order.
pub fn name_tokens<'a>(parts: impl IntoIterator<Item = &'a String>) -> Vec<String> {
    parts
        .into_iter()
        .filter_map(|part| normalize_name(part))
        .flat_map(|part| {
            let words: Vec<String> = part.split(' ').map(ToOwned::to_owned).collect();
            let whole = (words.len() > 1).then(|| part.clone());
            whole.into_iter().chain(words)
        })
        .unique()
        .collect()
}

pub fn normalize_national_insurance_number(value: &str) -> Option<String> {
    let normalized: String = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();
    (!normalized.is_empty()).then_some(normalized)
}

pub fn normalize_email_address(value: &str) -> Option<String> {
    let normalized = value.trim().to_lowercase();
    (!normalized.is_empty()).then_some(normalized)
}

pub fn normalize_reference_number(value: &str) -> Option<String> {
    let normalized = value.trim();
    (!normalized.is_empty()).then(|| normalized.to_owned())
}
