//! Approximate substring matching.
//!
//! A pattern matches a text when some substring of the text is within a
//! bounded number of edits of the pattern. Leading and trailing text is free,
//! so a match anywhere in the field counts the same.

/// Shortest query that can produce a match.
pub const MIN_MATCH_CHAR_LENGTH: usize = 2;

/// Highest field score still counted as a match (0 = exact, 1 = nothing in common).
pub const MATCH_THRESHOLD: f64 = 0.4;

/// Weight of the unmatched share of a field; only orders equally good
/// matches, shorter fields first.
pub const FIELD_LENGTH_WEIGHT: f64 = 0.01;

/// Smallest edit distance between `pattern` and any substring of `text`.
///
/// Levenshtein distance with a free starting column, so the pattern may begin
/// at any position in the text.
pub fn substring_distance(text: &[char], pattern: &[char]) -> usize {
    let m = pattern.len();
    let n = text.len();

    if m == 0 {
        return 0;
    }
    if n == 0 {
        return m;
    }

    // Row 0 is all zeros: skipping any text prefix costs nothing.
    let mut prev = vec![0usize; n + 1];
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if pattern[i - 1] == text[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    // Ending anywhere is free as well.
    prev.into_iter().min().unwrap_or(m)
}

/// Score of `pattern` against one lowercase field, or `None` when it does
/// not match.
///
/// The score is the share of the pattern that had to be edited, plus a small
/// term for the part of the field the pattern does not cover. The threshold
/// applies to the edit share alone.
pub fn field_score(text: &[char], pattern: &[char]) -> Option<f64> {
    if pattern.len() < MIN_MATCH_CHAR_LENGTH || text.is_empty() {
        return None;
    }

    let distance = substring_distance(text, pattern);
    let edits = (distance as f64 / pattern.len() as f64).min(1.0);
    if edits > MATCH_THRESHOLD {
        return None;
    }

    let uncovered = text.len().saturating_sub(pattern.len()) as f64 / text.len() as f64;
    Some((edits + FIELD_LENGTH_WEIGHT * uncovered).min(1.0))
}

/// Best score of `pattern` across several values of the same field.
pub fn best_field_score<'a, I>(values: I, pattern: &[char]) -> Option<f64>
where
    I: IntoIterator<Item = &'a Vec<char>>,
{
    values
        .into_iter()
        .filter_map(|text| field_score(text, pattern))
        .min_by(f64::total_cmp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_exact_substring() {
        assert_eq!(substring_distance(&chars("roter apfel gala"), &chars("apfel")), 0);
    }

    #[test]
    fn test_one_typo() {
        assert_eq!(substring_distance(&chars("apfelkorn"), &chars("apfl")), 1);
        assert_eq!(substring_distance(&chars("birne"), &chars("birme")), 1);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(substring_distance(&chars("apfel"), &[]), 0);
        assert_eq!(substring_distance(&[], &chars("apfel")), 5);
    }

    #[test]
    fn test_pattern_longer_than_text() {
        assert_eq!(substring_distance(&chars("pizza"), &chars("pizzas")), 1);
    }

    #[test]
    fn test_field_score_threshold() {
        assert_eq!(field_score(&chars("pizza"), &chars("pizza")), Some(0.0));

        let text = chars("pizza margherita");
        let exact = field_score(&text, &chars("pizz")).unwrap();
        let typo = field_score(&text, &chars("margerita")).unwrap();
        assert!(exact < 0.01);
        assert!((typo - (1.0 / 9.0 + 0.01 * 7.0 / 16.0)).abs() < 1e-12);
        assert_eq!(field_score(&text, &chars("xyzqv")), None);
    }

    #[test]
    fn test_shorter_field_scores_better() {
        let short = field_score(&chars("apfel"), &chars("ap")).unwrap();
        let long = field_score(&chars("apfelkorn"), &chars("ap")).unwrap();
        assert!(short < long);
        assert!(long <= MATCH_THRESHOLD);
    }

    #[test]
    fn test_single_character_never_matches() {
        assert_eq!(field_score(&chars("apfel"), &chars("a")), None);
    }

    #[test]
    fn test_best_field_score() {
        let values = vec![chars("obst"), chars("alkoholische getränke")];
        assert_eq!(best_field_score(&values, &chars("obst")), Some(0.0));
        assert_eq!(best_field_score(&values, &chars("gemüse")), None);
    }
}
