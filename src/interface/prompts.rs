use dialoguer::{Confirm, Input, Select};

use crate::error::{CarbError, Result};
use crate::models::FoodRecord;
use crate::nutrition::check_amount;
use crate::state::FoodCatalog;

/// How many ranked results the picker offers at once.
const PICK_PAGE_SIZE: usize = 15;

/// Prompt for a search query; empty input ends the session.
pub fn prompt_query() -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("Search food (or press Enter to finish)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    Ok((!input.is_empty()).then(|| input.to_string()))
}

/// Parse an amount typed by the user; a decimal comma is accepted.
pub fn parse_amount(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| CarbError::InvalidInput(format!("'{}' is not a number", input.trim())))?;
    check_amount(value, "amount")
}

/// Prompt for an amount in the food's unit, asking again until it parses.
pub fn prompt_grams(food: &FoodRecord) -> Result<f64> {
    loop {
        let input: String = Input::new()
            .with_prompt(format!("Amount of '{}' in {}", food.name, food.unit_label()))
            .default("100".to_string())
            .interact_text()?;

        match parse_amount(&input) {
            Ok(grams) => return Ok(grams),
            Err(e) => println!("{}", e),
        }
    }
}

/// Let the user choose one of `foods`; `None` if they pick "None of these".
pub fn prompt_select_food<'a>(foods: &[&'a FoodRecord]) -> Result<Option<&'a FoodRecord>> {
    let shown: Vec<&FoodRecord> = foods.iter().take(PICK_PAGE_SIZE).copied().collect();

    let mut options: Vec<String> = shown
        .iter()
        .map(|f| format!("{}  [{}]", f.display_name(), f.reference_code))
        .collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which food?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(shown.get(selection).copied())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Search, choose and weigh one food.
///
/// Returns `None` when the user ends the session with an empty query.
pub fn pick_food<'a, S: AsRef<str>>(
    catalog: &'a FoodCatalog,
    hidden: &[S],
) -> Result<Option<(&'a FoodRecord, f64)>> {
    loop {
        let Some(query) = prompt_query()? else {
            return Ok(None);
        };

        let results = catalog.visible_foods(&query, hidden);
        if results.is_empty() {
            println!("No foods match '{}'.", query);
            continue;
        }

        let Some(food) = prompt_select_food(&results)? else {
            continue;
        };

        let grams = prompt_grams(food)?;
        return Ok(Some((food, grams)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("150").unwrap(), 150.0);
        assert_eq!(parse_amount(" 12,5 ").unwrap(), 12.5);
        assert_eq!(parse_amount("0").unwrap(), 0.0);
        assert!(matches!(parse_amount("abc"), Err(CarbError::InvalidInput(_))));
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("").is_err());
    }
}
