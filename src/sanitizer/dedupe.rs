use std::collections::HashSet;

/// Collapse normalized addresses into an order-preserving unique set.
///
/// The first occurrence of each address wins. The duplicate count is taken
/// against the normalized input length, so whitespace-only entries already
/// removed by normalization never inflate it. When deduplication is
/// disabled the input passes through unchanged with a count of zero.
pub fn dedupe(addresses: Vec<String>, remove_duplicates: bool) -> (Vec<String>, usize) {
    if !remove_duplicates {
        return (addresses, 0);
    }

    let original_count = addresses.len();
    let mut seen = HashSet::with_capacity(original_count);
    let mut unique = Vec::with_capacity(original_count);
    for address in addresses {
        if seen.insert(address.clone()) {
            unique.push(address);
        }
    }

    let duplicates = original_count - unique.len();
    (unique, duplicates)
}
