use crate::catalog::FoodGroup;
use crate::models::{CalculationResult, CarbUnit, FoodRecord, Settings};
use crate::nutrition::{energy_for_grams, round_to};
use crate::state::MealStore;

/// Format with German conventions: decimal comma, dot thousands separator,
/// one to two fraction digits. Non-finite values print as "n/a".
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }

    let rounded = round_to(value, 2);
    let mut text = format!("{:.2}", rounded.abs());
    if text.ends_with('0') {
        text.pop();
    }

    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "0"));

    let mut grouped = String::new();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{},{}", sign, grouped, frac_part)
}

fn unit_line(food: &FoodRecord, preferred: CarbUnit) -> String {
    let be = format!("1 BE = {} {}", format_number(food.grams_per_be), food.unit_label());
    let khe = format!("1 KHE = {} {}", format_number(food.grams_per_khe), food.unit_label());
    match preferred {
        CarbUnit::Be => format!("{} | {}", be, khe),
        CarbUnit::Khe => format!("{} | {}", khe, be),
    }
}

fn food_line(food: &FoodRecord, settings: &Settings, favorite: bool) -> String {
    let star = if favorite { "*" } else { " " };
    let custom = if food.is_user_defined { " [eigen]" } else { "" };
    format!(
        "{} {:<40} {:>10}  {} | {} g KH/100 {}{}",
        star,
        food.display_name(),
        food.reference_code,
        unit_line(food, settings.preferred_unit),
        format_number(food.carbs_per_100g),
        food.unit_label(),
        custom
    )
}

/// Display a list of foods.
pub fn display_food_list<F>(foods: &[&FoodRecord], title: &str, settings: &Settings, is_favorite: F)
where
    F: Fn(&FoodRecord) -> bool,
{
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for &food in foods {
        println!("{}", food_line(food, settings, is_favorite(food)));
    }

    println!();
}

/// Display foods sectioned by category.
pub fn display_grouped(groups: &[FoodGroup], settings: &Settings) {
    if groups.is_empty() {
        println!("No foods to show.");
        return;
    }

    for group in groups {
        println!();
        println!("--- {} ({}) ---", group.heading, group.foods.len());
        for food in &group.foods {
            println!("{}", food_line(food, settings, false));
        }
    }
    println!();
}

/// Display "did you mean" names after an empty search.
pub fn display_suggestions(query: &str, names: &[&str]) {
    println!("No foods match '{}'.", query);
    if !names.is_empty() {
        println!("Did you mean: {}?", names.join(", "));
    }
}

/// Display one calculation result.
pub fn display_calculation(food: &FoodRecord, result: &CalculationResult, settings: &Settings) {
    println!();
    println!("{} ({})", food.display_name(), food.reference_code);
    println!("  Amount: {} {}", result.grams, food.unit_label());

    let be = format!("{} BE", format_number(result.be));
    let khe = format!("{} KHE", format_number(result.khe));
    match settings.preferred_unit {
        CarbUnit::Be => println!("  {}  ({})", be, khe),
        CarbUnit::Khe => println!("  {}  ({})", khe, be),
    }
    println!("  Carbohydrates: {} g", format_number(result.carbs));

    if settings.show_energy {
        match energy_for_grams(food, result.grams as f64, settings.energy_unit) {
            Some(energy) => println!("  Energy: {} {}", energy, settings.energy_unit),
            None => println!("  Energy: n/a"),
        }
    }
    println!();
}

/// Display the meal with totals.
pub fn display_meal(meal: &MealStore, settings: &Settings) {
    if meal.is_empty() {
        println!("The meal is empty.");
        return;
    }

    println!();
    println!("=== Meal ===");
    println!();

    let max_name_len = meal
        .items()
        .iter()
        .map(|i| i.food.name.chars().count())
        .max()
        .unwrap_or(10);

    for (i, item) in meal.items().iter().enumerate() {
        let (first, second) = match settings.preferred_unit {
            CarbUnit::Be => (
                format!("{} BE", format_number(item.be)),
                format!("{} KHE", format_number(item.khe)),
            ),
            CarbUnit::Khe => (
                format!("{} KHE", format_number(item.khe)),
                format!("{} BE", format_number(item.be)),
            ),
        };

        println!(
            "{:>3}. {:<width$} {:>6} {:<2} | {:>10} ({})",
            i + 1,
            item.food.name,
            format!("{:.0}", item.grams),
            item.food.unit_label(),
            first,
            second,
            width = max_name_len
        );
    }

    println!();
    println!("--- Total ---");
    println!("BE:  {}", format_number(meal.total_be()));
    println!("KHE: {}", format_number(meal.total_khe()));
    println!("Carbohydrates: {} g", format_number(meal.total_carbs()));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(4.0), "4,0");
        assert_eq!(format_number(4.76), "4,76");
        assert_eq!(format_number(1.7), "1,7");
        assert_eq!(format_number(2.346), "2,35");
        assert_eq!(format_number(1234.5), "1.234,5");
        assert_eq!(format_number(1234567.0), "1.234.567,0");
        assert_eq!(format_number(-2.5), "-2,5");
        assert_eq!(format_number(0.0), "0,0");
        assert_eq!(format_number(f64::NAN), "n/a");
        assert_eq!(format_number(f64::INFINITY), "n/a");
    }
}
