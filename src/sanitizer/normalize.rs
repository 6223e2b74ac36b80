/// Lexical normalization of raw batch input.
///
/// Each raw chunk (a pasted blob or one CSV cell) is split on newlines,
/// commas and semicolons; every candidate is trimmed and lowercased, and
/// empties are discarded. Output preserves first-seen order. No validation
/// happens here.
pub fn normalize_batch(raw: &[String]) -> Vec<String> {
    raw.iter()
        .flat_map(|chunk| chunk.split(['\n', ',', ';']))
        .map(|candidate| candidate.trim().to_lowercase())
        .filter(|candidate| !candidate.is_empty())
        .collect()
}
