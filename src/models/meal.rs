use serde::{Deserialize, Serialize};

use crate::models::FoodRecord;

/// One food committed to the current meal.
///
/// `be` and `khe` are snapshots of the calculation at add-time and are not
/// recomputed when the referenced food is edited later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealLineItem {
    pub food: FoodRecord,
    pub grams: f64,
    pub be: f64,
    pub khe: f64,
}

impl MealLineItem {
    pub fn new(food: FoodRecord, grams: f64, be: f64, khe: f64) -> Self {
        Self {
            food,
            grams,
            be,
            khe,
        }
    }

    /// Carbohydrate grams of this portion, recomputed from the food.
    #[inline]
    pub fn carbs(&self) -> f64 {
        (self.grams / 100.0) * self.food.carbs_per_100g
    }
}

/// Result of converting a gram amount of one food.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Input amount rounded to whole grams.
    pub grams: i64,
    /// Bread units, 2 decimals.
    pub be: f64,
    /// Carbohydrate units, 2 decimals.
    pub khe: f64,
    /// Carbohydrate grams, 1 decimal.
    pub carbs: f64,
}
