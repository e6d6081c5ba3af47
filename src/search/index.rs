use tracing::debug;

use crate::models::FoodRecord;
use crate::search::fuzzy::{best_field_score, field_score};

/// Relative weight of each searchable field.
pub const NAME_WEIGHT: f64 = 0.7;
pub const SUBTITLE_WEIGHT: f64 = 0.5;
pub const CATEGORY_WEIGHT: f64 = 0.2;
pub const TAG_WEIGHT: f64 = 0.1;

/// Floor for a perfect field score so the weighted product stays ordered.
const SCORE_EPSILON: f64 = 1e-3;

const TOTAL_WEIGHT: f64 = NAME_WEIGHT + SUBTITLE_WEIGHT + CATEGORY_WEIGHT + TAG_WEIGHT;

/// Lowercased, pre-split search text of one record.
#[derive(Debug, Clone)]
struct IndexEntry {
    name: Option<Vec<char>>,
    subtitle: Option<Vec<char>>,
    categories: Vec<Vec<char>>,
    tags: Vec<Vec<char>>,
}

fn lower_chars(s: &str) -> Vec<char> {
    s.to_lowercase().chars().collect()
}

impl IndexEntry {
    fn from_record(record: &FoodRecord) -> Self {
        Self {
            // Records without a name keep their other fields searchable.
            name: record.has_name().then(|| lower_chars(&record.name)),
            subtitle: record
                .subtitle
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .map(lower_chars),
            categories: record
                .categories
                .iter()
                .flatten()
                .map(|segment| lower_chars(segment))
                .collect(),
            tags: record.tags.iter().map(|tag| lower_chars(tag)).collect(),
        }
    }

    /// Weighted score across matched fields, or `None` if no field matched.
    fn score(&self, pattern: &[char]) -> Option<f64> {
        let fields = [
            (
                self.name.as_ref().and_then(|n| field_score(n, pattern)),
                NAME_WEIGHT,
            ),
            (
                self.subtitle.as_ref().and_then(|s| field_score(s, pattern)),
                SUBTITLE_WEIGHT,
            ),
            (best_field_score(&self.categories, pattern), CATEGORY_WEIGHT),
            (best_field_score(&self.tags, pattern), TAG_WEIGHT),
        ];

        let mut matched = false;
        let mut total = 1.0;
        for (score, weight) in fields {
            if let Some(score) = score {
                matched = true;
                total *= score.max(SCORE_EPSILON).powf(weight / TOTAL_WEIGHT);
            }
        }

        matched.then_some(total)
    }
}

/// Immutable fuzzy-search snapshot over a set of food records.
///
/// Rebuilt wholesale whenever the underlying collection changes; never
/// mutated in place, so shared references can be searched freely.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    records: Vec<FoodRecord>,
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    /// Build an index that owns `records`.
    pub fn new(records: Vec<FoodRecord>) -> Self {
        let entries: Vec<IndexEntry> = records.iter().map(IndexEntry::from_record).collect();
        let unnamed = entries.iter().filter(|e| e.name.is_none()).count();

        debug!(
            records = records.len(),
            unnamed, "built search index"
        );

        Self { records, entries }
    }

    /// Number of indexed records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True for an index built from an empty collection.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The indexed records in insertion order.
    pub fn records(&self) -> &[FoodRecord] {
        &self.records
    }

    /// Records matching `pattern` (already lowercased) with their raw score,
    /// in insertion order.
    pub(crate) fn fuzzy_matches(&self, pattern: &[char]) -> Vec<(&FoodRecord, f64)> {
        self.entries
            .iter()
            .zip(&self.records)
            .filter_map(|(entry, record)| entry.score(pattern).map(|score| (record, score)))
            .collect()
    }
}

/// Build a search index over a copy of `records`.
pub fn build_index(records: &[FoodRecord]) -> SearchIndex {
    SearchIndex::new(records.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::food;

    fn pattern(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_empty_index() {
        let index = build_index(&[]);
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.fuzzy_matches(&pattern("apfel")).is_empty());
    }

    #[test]
    fn test_case_insensitive_name_match() {
        let index = build_index(&[food("F1", "APFEL"), food("F2", "Birne")]);
        let matches = index.fuzzy_matches(&pattern("apfel"));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].0.name, "APFEL");
    }

    #[test]
    fn test_unnamed_record_is_skipped_not_fatal() {
        let mut unnamed = food("Z1", "");
        unnamed.tags = vec!["schnelleKH".to_string()];
        let index = build_index(&[unnamed, food("F1", "Apfel")]);

        assert_eq!(index.len(), 2);
        assert_eq!(index.fuzzy_matches(&pattern("apfel")).len(), 1);
        // Tags on the unnamed record are still indexed.
        assert_eq!(index.fuzzy_matches(&pattern("schnellekh")).len(), 1);
    }

    #[test]
    fn test_subtitle_and_category_fields() {
        let mut flour = food("C1", "Weizenmehl");
        flour.subtitle = Some("Type 405".to_string());
        flour.categories = vec![vec!["Getreide".to_string()]];
        let index = build_index(&[flour]);

        assert_eq!(index.fuzzy_matches(&pattern("type 405")).len(), 1);
        assert_eq!(index.fuzzy_matches(&pattern("getreide")).len(), 1);
    }

    #[test]
    fn test_name_match_outscores_tag_match() {
        let by_name = food("F1", "Zucker");
        let mut by_tag = food("F2", "Honig");
        by_tag.tags = vec!["zucker".to_string()];
        let index = build_index(&[by_tag, by_name]);

        let matches = index.fuzzy_matches(&pattern("zucker"));
        assert_eq!(matches.len(), 2);
        let name_score = matches.iter().find(|(r, _)| r.name == "Zucker").unwrap().1;
        let tag_score = matches.iter().find(|(r, _)| r.name == "Honig").unwrap().1;
        assert!(name_score < tag_score);
    }

    #[test]
    fn test_scores_within_unit_interval() {
        let index = build_index(&[food("F1", "Apfel"), food("F2", "Apfelkorn")]);
        for (_, score) in index.fuzzy_matches(&pattern("apfl")) {
            assert!((0.0..=1.0).contains(&score));
        }
    }
}
