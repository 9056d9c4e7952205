use super::mask::CompiledMask;

/// Finds all non-overlapping mask occurrences in a single line.
///
/// Returns `(start, end)` byte spans sorted by position. The scan runs left
/// to right; after a match at `p` it resumes at `p + mask_len`, so spans
/// never overlap and the leftmost candidate of any overlapping cluster wins.
/// Pure function of its inputs.
pub fn find_matches(line: &[u8], mask: &CompiledMask) -> Vec<(usize, usize)> {
    let mask_len = mask.len();
    let mut matches = Vec::new();
    if mask_len == 0 || mask_len > line.len() {
        return matches;
    }

    let mut pos = 0;
    while pos + mask_len <= line.len() {
        if mask.matches_at(line, pos) {
            matches.push((pos, pos + mask_len));
            pos += mask_len;
        } else {
            pos += 1;
        }
    }
    matches
}
