use std::cmp::Ordering;

use crate::models::FoodRecord;
use crate::search::index::SearchIndex;

/// Most results a single query returns.
pub const MAX_RESULTS: usize = 100;

/// Fuzzy match with the name-based tiers precomputed.
///
/// Each flag outranks every flag after it; the raw fuzzy score only
/// decides between candidates that agree on all of them.
#[derive(Debug)]
struct Candidate<'a> {
    food: &'a FoodRecord,
    score: f64,
    exact: bool,
    word_prefix: bool,
    prefix: bool,
    embedded_word: bool,
    contains: bool,
}

impl<'a> Candidate<'a> {
    fn new(food: &'a FoodRecord, score: f64, query: &str) -> Self {
        let name = food.name.to_lowercase();
        let word_start = format!("{} ", query);

        Self {
            food,
            score,
            exact: name == query,
            word_prefix: name == query || name.starts_with(&word_start),
            prefix: name.starts_with(query),
            embedded_word: name.contains(&format!(" {}", query))
                || name.contains(&format!(",{}", query)),
            contains: name.contains(query),
        }
    }

    fn tiers(&self) -> [bool; 5] {
        [
            self.exact,
            self.word_prefix,
            self.prefix,
            self.embedded_word,
            self.contains,
        ]
    }
}

/// Order two candidates: first differing tier wins, then lower score.
fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    for (tier_a, tier_b) in a.tiers().into_iter().zip(b.tiers()) {
        if tier_a != tier_b {
            // `true` sorts first
            return tier_b.cmp(&tier_a);
        }
    }
    a.score.total_cmp(&b.score)
}

/// Search `index` for `query` and return records best-first.
///
/// Whitespace-only queries return nothing. At most [`MAX_RESULTS`] records
/// are returned; scores stay internal.
pub fn search<'a>(index: &'a SearchIndex, query: &str) -> Vec<&'a FoodRecord> {
    let query = query.trim().to_lowercase();
    if query.is_empty() || index.is_empty() {
        return Vec::new();
    }

    let pattern: Vec<char> = query.chars().collect();
    let mut matches = index.fuzzy_matches(&pattern);

    // Cap on raw fuzzy order first, then re-rank what is left.
    matches.sort_by(|a, b| a.1.total_cmp(&b.1));
    matches.truncate(MAX_RESULTS);

    let mut candidates: Vec<Candidate> = matches
        .into_iter()
        .map(|(food, score)| Candidate::new(food, score, &query))
        .collect();

    candidates.sort_by(compare_candidates);

    candidates.into_iter().map(|c| c.food).collect()
}

impl SearchIndex {
    /// Ranked search; see [`search`].
    pub fn search(&self, query: &str) -> Vec<&FoodRecord> {
        search(self, query)
    }
}
