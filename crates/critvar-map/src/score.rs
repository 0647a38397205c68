//! Ratcliff-Obershelp similarity between normalized strings.
//!
//! The ratio is `2 * M / (|a| + |b|)` where `M` counts the characters in the
//! matching blocks: the longest common contiguous block, then recursively
//! the longest blocks to its left and to its right. Acceptance thresholds
//! (0.6 default, 0.9 high confidence) are calibrated against this measure,
//! so it must not be swapped for an edit distance or token overlap.

/// Similarity ratio in `[0.0, 1.0]`; `1.0` for identical inputs.
///
/// The arguments are put in a canonical order before matching, which makes
/// the score symmetric even when the longest-block tie breaking would pick
/// different blocks depending on argument order. Two empty strings score
/// `1.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let (first, second) = if (a.len(), &a) <= (b.len(), &b) {
        (&a, &b)
    } else {
        (&b, &a)
    };
    let matched = matched_chars(first, second);
    2.0 * matched as f64 / total as f64
}

/// Total length of all matching blocks between `a` and `b`.
fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }
    matched
}

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Returns `(i, j, size)`. Among blocks of equal size the one starting
/// earliest in `a` wins, then the one starting earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let width = bhi - blo;
    let mut best = (alo, blo, 0);
    if width == 0 || alo >= ahi {
        return best;
    }
    // run[j] = length of the common block ending at a[i-1], b[blo + j]
    let mut prev = vec![0usize; width];
    let mut curr = vec![0usize; width];
    for i in alo..ahi {
        curr.fill(0);
        for (offset, &ch) in b[blo..bhi].iter().enumerate() {
            if ch != a[i] {
                continue;
            }
            let run = if offset == 0 { 1 } else { prev[offset - 1] + 1 };
            curr[offset] = run;
            if run > best.2 {
                best = (i + 1 - run, blo + offset + 1 - run, run);
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(similarity("glucose", "glucose"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(similarity("abc", "xyz"), 0.0);
        assert_eq!(similarity("abc", ""), 0.0);
    }

    #[test]
    fn counts_recursive_blocks() {
        // "glucos" + nothing else in common: 2 * 6 / 14
        assert!(approx(similarity("glucose", "glucosa"), 12.0 / 14.0));
        // "azucar " and "sangre": 2 * 13 / 29
        assert!(approx(
            similarity("azucar sangre", "azucar en sangre"),
            26.0 / 29.0
        ));
        // "consumo " then "frutas": 2 * 14 / 38
        assert!(approx(
            similarity("consumo frutas diario", "consumo de frutas"),
            28.0 / 38.0
        ));
    }

    #[test]
    fn longest_match_prefers_earliest_block() {
        let a: Vec<char> = "abxab".chars().collect();
        let b: Vec<char> = "ab".chars().collect();
        assert_eq!(longest_match(&a, &b, 0, a.len(), 0, b.len()), (0, 0, 2));
    }

    #[test]
    fn is_symmetric_on_asymmetric_tie_breaks() {
        let pairs = [("abcd", "bcda"), ("tide", "diet"), ("ab ba", "ba ab")];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a), "{a} vs {b}");
        }
    }
}
