//! Edit-distance similarity used to rank suggestions.

/// Classic Levenshtein distance over chars: insertions, deletions and
/// substitutions cost 1, transpositions are not special.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    strsim::levenshtein(s1, s2)
}

/// Similarity in percent: `round(100 * (max_len - distance) / max_len)`.
///
/// Two empty strings are identical (100).
pub fn similarity(a: &str, b: &str) -> u8 {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let (longer, shorter, max_len) = if a_len > b_len {
        (a, b, a_len)
    } else {
        (b, a, b_len)
    };

    if max_len == 0 {
        return 100;
    }

    let distance = levenshtein_distance(longer, shorter);
    let score = ((max_len - distance) as f64 / max_len as f64 * 100.0).round();
    score.clamp(0.0, 100.0) as u8
}
