use crate::models::FoodRecord;

/// Code prefix reserved for user-defined foods.
pub const CUSTOM_ID_PREFIX: &str = "A";

/// Minimum digit count of a custom code; longer numbers are not truncated.
pub const CUSTOM_ID_WIDTH: usize = 4;

/// Leading decimal digits of `s` as a number, 0 if there are none.
fn leading_number(s: &str) -> u64 {
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    s[..end].parse().unwrap_or(0)
}

/// Next free code in the custom namespace (`A0001`, `A0002`, ...).
///
/// Always one past the highest number in use, so codes of deleted foods are
/// never handed out again. Codes outside the namespace are ignored and
/// codes without a leading number count as 0.
pub fn next_custom_id(existing: &[FoodRecord]) -> String {
    let max = existing
        .iter()
        .filter_map(|f| f.reference_code.strip_prefix(CUSTOM_ID_PREFIX))
        .map(leading_number)
        .max()
        .unwrap_or(0);

    format!(
        "{}{:0width$}",
        CUSTOM_ID_PREFIX,
        max + 1,
        width = CUSTOM_ID_WIDTH
    )
}
