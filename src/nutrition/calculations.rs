use crate::error::{CarbError, Result};
use crate::models::{CalculationResult, EnergyUnit, FoodRecord};
use crate::nutrition::constants::*;

/// Grams per unit derived from a carbohydrate content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedUnits {
    pub grams_per_be: f64,
    pub grams_per_khe: f64,
}

/// Round to `decimals` places, halves away from zero.
///
/// Every conversion in this module goes through here so ties break the same
/// way everywhere.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[inline]
fn round_whole(value: f64) -> i64 {
    round_to(value, 0) as i64
}

/// BE, KHE and carbohydrate grams for `grams` of `food`.
///
/// Input is not validated: negative amounts flow through the arithmetic and
/// a NaN amount yields NaN units (and 0 whole grams).
pub fn compute_nutrition(food: &FoodRecord, grams: f64) -> CalculationResult {
    let be = grams / food.grams_per_be;
    let khe = grams / food.grams_per_khe;
    let carbs = (grams / 100.0) * food.carbs_per_100g;

    CalculationResult {
        grams: round_whole(grams),
        be: round_to(be, UNIT_DECIMALS),
        khe: round_to(khe, UNIT_DECIMALS),
        carbs: round_to(carbs, CARBS_DECIMALS),
    }
}

/// Whole grams of `food` that contain `be` bread units.
pub fn grams_for_be(food: &FoodRecord, be: f64) -> i64 {
    round_whole(be * food.grams_per_be)
}

/// Whole grams of `food` that contain `khe` carbohydrate units.
pub fn grams_for_khe(food: &FoodRecord, khe: f64) -> i64 {
    round_whole(khe * food.grams_per_khe)
}

/// Grams per BE and per KHE for a food with `carbs_per_100g`.
///
/// A zero input produces non-finite values; callers reject zero-carb foods
/// before getting here.
pub fn derive_units_from_carbs(carbs_per_100g: f64) -> DerivedUnits {
    DerivedUnits {
        grams_per_be: round_to(CARBS_PER_BE * 100.0 / carbs_per_100g, 0),
        grams_per_khe: round_to(CARBS_PER_KHE * 100.0 / carbs_per_100g, 0),
    }
}

/// Convert kilocalories to whole kilojoules.
pub fn kcal_to_kj(kcal: f64) -> i64 {
    round_whole(kcal * KJ_PER_KCAL)
}

/// Convert kilojoules to whole kilocalories.
///
/// Not an exact inverse of [`kcal_to_kj`] after rounding; typical
/// magnitudes survive the round trip but that is not guaranteed.
pub fn kj_to_kcal(kj: f64) -> i64 {
    round_whole(kj / KJ_PER_KCAL)
}

/// Energy of `grams` of `food` in `unit`.
///
/// Uses the value recorded for the requested unit and falls back to
/// converting from the other one. `None` when the food has no energy data.
pub fn energy_for_grams(food: &FoodRecord, grams: f64, unit: EnergyUnit) -> Option<i64> {
    let portion = grams / 100.0;
    match unit {
        EnergyUnit::Kcal => food
            .kcal_per_100g
            .map(|kcal| round_whole(kcal * portion))
            .or_else(|| food.kj_per_100g.map(|kj| kj_to_kcal(kj * portion))),
        EnergyUnit::Kj => food
            .kj_per_100g
            .map(|kj| round_whole(kj * portion))
            .or_else(|| food.kcal_per_100g.map(|kcal| kcal_to_kj(kcal * portion))),
    }
}

/// Accept an amount entered by the user (grams, BE or KHE).
///
/// The converters above take any `f64`; callers at the input boundary run
/// amounts through here first so negative or non-finite values never reach
/// them.
pub fn check_amount(value: f64, label: &str) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(CarbError::InvalidInput(format!(
            "{} must be a number of zero or more, got {}",
            label, value
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{food, white_bread};

    fn apple() -> FoodRecord {
        FoodRecord {
            carbs_per_100g: 11.4,
            grams_per_be: 105.0,
            grams_per_khe: 88.0,
            ..food("F110100", "Apfel")
        }
    }

    #[test]
    fn test_round_to_half_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(4.7619, 2), 4.76);
        assert_eq!(round_to(17.1, 1), 17.1);
    }

    #[test]
    fn test_compute_nutrition_100g() {
        let result = compute_nutrition(&white_bread(), 100.0);
        assert_eq!(result.grams, 100);
        assert_eq!(result.be, 4.0);
        assert_eq!(result.khe, 4.76);
        assert_eq!(result.carbs, 48.0);
    }

    #[test]
    fn test_compute_nutrition_apple() {
        let result = compute_nutrition(&apple(), 150.0);
        assert_eq!(result.grams, 150);
        assert_eq!(result.be, 1.43);
        assert_eq!(result.khe, 1.7);
        assert!((result.carbs - 17.1).abs() < 1e-9);
    }

    #[test]
    fn test_grams_rounded() {
        assert_eq!(compute_nutrition(&white_bread(), 123.7).grams, 124);
    }

    #[test]
    fn test_zero_grams() {
        let result = compute_nutrition(&white_bread(), 0.0);
        assert_eq!(result.grams, 0);
        assert_eq!(result.be, 0.0);
        assert_eq!(result.khe, 0.0);
        assert_eq!(result.carbs, 0.0);
    }

    #[test]
    fn test_negative_grams_pass_through() {
        let result = compute_nutrition(&white_bread(), -50.0);
        assert_eq!(result.grams, -50);
        assert_eq!(result.be, -2.0);
        assert_eq!(result.carbs, -24.0);
    }

    #[test]
    fn test_nan_grams_propagate() {
        let result = compute_nutrition(&white_bread(), f64::NAN);
        assert!(result.be.is_nan());
        assert!(result.carbs.is_nan());
    }

    #[test]
    fn test_grams_for_units() {
        let bread = white_bread();
        assert_eq!(grams_for_be(&bread, 1.0), 25);
        assert_eq!(grams_for_be(&bread, 2.0), 50);
        assert_eq!(grams_for_be(&bread, 0.5), 13);
        assert_eq!(grams_for_khe(&bread, 1.0), 21);
        assert_eq!(grams_for_khe(&bread, 3.0), 63);
        assert_eq!(grams_for_be(&apple(), 1.0), 105);
        assert_eq!(grams_for_khe(&apple(), 1.0), 88);
    }

    #[test]
    fn test_derive_units() {
        let bread = derive_units_from_carbs(48.0);
        assert_eq!(bread.grams_per_be, 25.0);
        assert_eq!(bread.grams_per_khe, 21.0);

        let apple = derive_units_from_carbs(11.4);
        assert_eq!(apple.grams_per_be, 105.0);
        assert_eq!(apple.grams_per_khe, 88.0);

        let sugar = derive_units_from_carbs(80.0);
        assert_eq!(sugar.grams_per_be, 15.0);
        assert_eq!(sugar.grams_per_khe, 13.0);
    }

    #[test]
    fn test_derive_units_zero_carbs_is_not_finite() {
        let units = derive_units_from_carbs(0.0);
        assert!(!units.grams_per_be.is_finite());
        assert!(!units.grams_per_khe.is_finite());
    }

    #[test]
    fn test_energy_conversion() {
        assert_eq!(kcal_to_kj(100.0), 418);
        assert_eq!(kcal_to_kj(250.0), 1046);
        assert_eq!(kj_to_kcal(418.0), 100);
        for kcal in [100_i64, 250, 1000] {
            let kj = kcal_to_kj(kcal as f64);
            assert_eq!(kj_to_kcal(kj as f64), kcal);
        }
    }

    #[test]
    fn test_energy_for_grams() {
        let bread = white_bread();
        assert_eq!(energy_for_grams(&bread, 50.0, EnergyUnit::Kcal), Some(125));
        assert_eq!(energy_for_grams(&bread, 50.0, EnergyUnit::Kj), Some(523));
        assert_eq!(energy_for_grams(&apple(), 50.0, EnergyUnit::Kcal), None);

        let mut kj_only = apple();
        kj_only.kj_per_100g = Some(418.0);
        assert_eq!(energy_for_grams(&kj_only, 100.0, EnergyUnit::Kcal), Some(100));
    }

    #[test]
    fn test_check_amount() {
        assert_eq!(check_amount(0.0, "grams").unwrap(), 0.0);
        assert_eq!(check_amount(123.7, "grams").unwrap(), 123.7);
        assert!(matches!(check_amount(-50.0, "grams"), Err(CarbError::InvalidInput(_))));
        assert!(check_amount(-1.0, "BE").is_err());
        assert!(check_amount(f64::NAN, "grams").is_err());
        assert!(check_amount(f64::INFINITY, "KHE").is_err());
    }
}
