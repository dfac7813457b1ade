//! Heuristic string similarity scoring for field names.
//!
//! This is a coarse multi-stage heuristic tuned for spreadsheet-derived
//! column identifiers, not an edit-distance metric. The tier values and
//! blend weights are part of the output contract: downstream fuzzy reports
//! are compared across runs, so changing any constant changes results.
//!
//! # Stages
//!
//! 1. Either input empty -> `0.0`
//! 2. Case-folded, trimmed strings equal -> `1.0`
//! 3. Equal after removing common suffix tokens -> `0.9`
//! 4. One cleaned string contained in the other -> `0.8`
//! 5. Weighted blend of character-set Jaccard overlap and length similarity
//!
//! # Example
//!
//! ```
//! use sql_field_mapper::similarity::score;
//!
//! assert_eq!(score("RELNR", "relnr"), 1.0);
//! assert_eq!(score("relnr_r", "relnr"), 0.9);
//! assert_eq!(score("", "relnr"), 0.0);
//! ```

use std::collections::HashSet;

/// Suffix tokens stripped before comparison.
///
/// Removed at every occurrence, not only at the end of the string. The
/// order is fixed: each token is removed from the running result of the
/// previous removal.
pub const CLEAN_TOKENS: [&str; 5] = ["_p", "_r", "_cd", "_dat", "_code"];

/// Weight of the character-overlap term in the blended fallback score.
const CHAR_WEIGHT: f64 = 0.7;

/// Weight of the length-similarity term in the blended fallback score.
const LEN_WEIGHT: f64 = 0.3;

/// Score the similarity of two field names.
///
/// Deterministic pure function returning a value in `[0.0, 1.0]`, where
/// `1.0` means identical after case-folding and trimming.
#[must_use]
pub fn score(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let s1 = a.to_lowercase().trim().to_string();
    let s2 = b.to_lowercase().trim().to_string();

    if s1 == s2 {
        return 1.0;
    }

    let c1 = strip_tokens(&s1);
    let c2 = strip_tokens(&s2);

    if c1 == c2 {
        return 0.9;
    }

    if c1.contains(&c2) || c2.contains(&c1) {
        return 0.8;
    }

    blended_score(&c1, &c2)
}

/// Round a score to three decimal places for reporting.
#[must_use]
pub fn round_score(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Remove every occurrence of each cleanup token.
fn strip_tokens(s: &str) -> String {
    let mut cleaned = s.to_string();
    for token in CLEAN_TOKENS {
        cleaned = cleaned.replace(token, "");
    }
    cleaned
}

/// Blend character-set Jaccard overlap with length similarity.
fn blended_score(c1: &str, c2: &str) -> f64 {
    let set1: HashSet<char> = c1.chars().collect();
    let set2: HashSet<char> = c2.chars().collect();

    let union = set1.union(&set2).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = set1.intersection(&set2).count();
    let char_similarity = intersection as f64 / union as f64;

    let len1 = c1.chars().count();
    let len2 = c2.chars().count();
    let max_len = len1.max(len2);
    let len_similarity = if max_len > 0 {
        1.0 - len1.abs_diff(len2) as f64 / max_len as f64
    } else {
        0.0
    };

    char_similarity * CHAR_WEIGHT + len_similarity * LEN_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_score_zero() {
        assert_eq!(score("", "relnr"), 0.0);
        assert_eq!(score("relnr", ""), 0.0);
        assert_eq!(score("", ""), 0.0);
    }

    #[test]
    fn test_exact_match_case_insensitive() {
        assert_eq!(score("RELNR", "relnr"), 1.0);
        assert_eq!(score("  relnr ", "relnr"), 1.0);
    }

    #[test]
    fn test_token_stripped_match() {
        assert_eq!(score("relnr_r", "relnr"), 0.9);
        assert_eq!(score("tep_code", "tep"), 0.9);
        assert_eq!(score("wap_code_p", "wap"), 0.9);
    }

    #[test]
    fn test_tokens_removed_everywhere_not_just_suffix() {
        // "_p" occurs mid-string in "opn_dat_post_p" twice over
        assert_eq!(score("opn_dat_post_p", "opnost"), 0.9);
    }

    #[test]
    fn test_substring_match() {
        assert_eq!(score("aanvangs", "aanvangs_extra_x"), 0.8);
    }

    #[test]
    fn test_blended_score_in_range() {
        let s = score("polnr_postalg_ts", "zvalidfrom");
        assert!((0.0..1.0).contains(&s));
    }

    #[test]
    fn test_blended_score_value() {
        // cleaned: "abc" vs "axy" -> intersection {a}=1, union {a,b,c,x,y}=5
        // char = 0.2, len = 1.0 -> 0.7*0.2 + 0.3*1.0 = 0.44
        let s = score("abc", "axy");
        assert!((s - 0.44).abs() < 1e-9);
    }

    #[test]
    fn test_score_symmetric() {
        let pairs = [("relnr_r", "relnr"), ("abc", "axy"), ("a", "abcd")];
        for (a, b) in pairs {
            assert_eq!(score(a, b), score(b, a));
        }
    }

    #[test]
    fn test_round_score() {
        assert_eq!(round_score(0.4444444), 0.444);
        assert_eq!(round_score(0.8995), 0.9);
    }
}
