//! Textual boundary for dimensions, player ids and column choices. Anything
//! that is not a plain positive base-10 integer is rejected here instead of
//! being coerced.

pub fn parse_positive_int(raw: &str) -> Option<usize> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<usize>().ok().filter(|&value| value > 0)
}

/// Splits a comma-separated move list. Entries that do not parse are kept as
/// `None` so the caller can play them as rejected moves.
pub fn parse_column_list(raw: &str) -> Vec<Option<usize>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_positive_int)
        .collect()
}
