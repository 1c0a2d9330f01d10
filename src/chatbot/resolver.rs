use super::types::MatchResult;
use std::collections::BTreeSet;

/// Partial similarity between two strings, 0..=100.
///
/// The shorter string is compared against every window of the longer one that has the
/// same number of chars. Each window is scored with the Indel ratio
/// `2 * lcs / (len_a + len_b)`; the best window wins.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    let window_len = shorter.len();
    if window_len == 0 {
        return if longer.is_empty() { 100 } else { 0 };
    }

    let mut best_lcs = 0usize;
    for window in longer.windows(window_len) {
        best_lcs = best_lcs.max(lcs_len(window, shorter));
        if best_lcs == window_len {
            break;
        }
    }

    // Both sides have `window_len` chars, so the ratio reduces to lcs / window_len.
    ((200 * best_lcs + window_len) / (2 * window_len)) as u8
}

/// Length of the longest common subsequence of `a` and `b`.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut diagonal = 0;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}

/// Picks the candidate with the highest [`partial_ratio`] against `query`.
///
/// Ties keep the earliest candidate in set order. An empty candidate set yields
/// [`MatchResult::no_match`].
pub fn resolve(query: &str, candidates: &BTreeSet<String>) -> MatchResult {
    let mut best: Option<MatchResult> = None;

    for candidate in candidates {
        let score = partial_ratio(query, candidate);
        let is_better = best.as_ref().is_none_or(|current| score > current.score);
        if is_better {
            best = Some(MatchResult {
                best_label: candidate.clone(),
                score,
            });
        }
    }

    best.unwrap_or_else(MatchResult::no_match)
}
