use strsim::jaro_winkler;

use crate::models::FoodRecord;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Food names resembling `query`, most similar first.
///
/// Used when a ranked search comes back empty. Names are compared whole and
/// case-insensitively; each distinct name is offered once.
pub fn suggest<'a, I>(query: &str, foods: I, limit: usize) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a FoodRecord>,
{
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<(&str, f64)> = foods
        .into_iter()
        .filter(|f| f.has_name())
        .map(|f| (f.name.as_str(), jaro_winkler(&f.name.to_lowercase(), &query)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut names: Vec<&str> = Vec::new();
    for (name, _) in candidates {
        if !names.iter().any(|n| n.eq_ignore_ascii_case(name)) {
            names.push(name);
        }
        if names.len() == limit {
            break;
        }
    }
    names
}
