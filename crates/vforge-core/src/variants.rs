//! Variant combination generation and state selection.

use vforge_model::{Combination, Selector, State, VariantGroup, selector_matches};

/// Cartesian product of the groups' values.
///
/// The first group varies slowest and the last group fastest. Zero groups
/// yields exactly one empty combination.
pub fn combinations(groups: &[VariantGroup]) -> Vec<Combination> {
    let mut out = vec![Combination::new()];
    for group in groups {
        let mut next = Vec::with_capacity(out.len().saturating_mul(group.values.len()));
        for prefix in &out {
            for value in &group.values {
                next.push(prefix.clone().with(group.name.as_str(), value.as_str()));
            }
        }
        out = next;
    }
    out
}

/// Number of combinations `combinations` would produce, without building them.
pub fn combination_count(groups: &[VariantGroup]) -> usize {
    groups
        .iter()
        .fold(1usize, |count, group| count.saturating_mul(group.values.len()))
}

/// True when `selector` is absent or every key maps to the identical value.
pub fn variant_matches_selector(combination: &Combination, selector: Option<&Selector>) -> bool {
    selector_matches(combination, selector)
}

/// States whose selector matches, in declaration order.
pub fn active_states<'a>(states: &'a [State], combination: &Combination) -> Vec<&'a State> {
    states
        .iter()
        .filter(|state| state.matches(combination))
        .collect()
}

/// Replace characters the host reserves in variant names (`,` and `=`) and
/// collapse whitespace.
pub fn normalize_variant_value(value: &str) -> String {
    let replaced: String = value
        .chars()
        .map(|c| if c == ',' || c == '=' { '-' } else { c })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Host-safe member name for a combination, e.g. `state=hover, size=sm`.
pub fn member_name(combination: &Combination) -> String {
    if combination.is_empty() {
        return combination.variant_name();
    }
    combination
        .iter()
        .map(|(group, value)| {
            format!(
                "{}={}",
                normalize_variant_value(group),
                normalize_variant_value(value)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}
