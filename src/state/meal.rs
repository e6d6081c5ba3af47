use crate::error::{CarbError, Result};
use crate::models::{FoodRecord, MealLineItem};
use crate::nutrition::compute_nutrition;

/// Foods collected into the current meal, with running totals.
#[derive(Debug, Clone, Default)]
pub struct MealStore {
    items: Vec<MealLineItem>,
}

impl MealStore {
    pub fn new(items: Vec<MealLineItem>) -> Self {
        Self { items }
    }

    /// Append a line with precomputed units.
    pub fn add_item(&mut self, food: FoodRecord, grams: f64, be: f64, khe: f64) -> &MealLineItem {
        self.items.push(MealLineItem::new(food, grams, be, khe));
        &self.items[self.items.len() - 1]
    }

    /// Compute BE/KHE for `grams` of `food` and append the snapshot.
    pub fn add_calculated(&mut self, food: &FoodRecord, grams: f64) -> &MealLineItem {
        let result = compute_nutrition(food, grams);
        self.add_item(food.clone(), grams, result.be, result.khe)
    }

    /// Remove the line at `index` (0-based).
    pub fn remove_item(&mut self, index: usize) -> Result<MealLineItem> {
        if index >= self.items.len() {
            return Err(CarbError::InvalidInput(format!(
                "meal has {} items, no item {}",
                self.items.len(),
                index + 1
            )));
        }
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[MealLineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the BE snapshots.
    pub fn total_be(&self) -> f64 {
        self.items.iter().map(|i| i.be).sum()
    }

    /// Sum of the KHE snapshots.
    pub fn total_khe(&self) -> f64 {
        self.items.iter().map(|i| i.khe).sum()
    }

    /// Carbohydrate grams, recomputed from each line's food.
    pub fn total_carbs(&self) -> f64 {
        self.items.iter().map(MealLineItem::carbs).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{food, white_bread};

    #[test]
    fn test_add_calculated_snapshots_units() {
        let mut meal = MealStore::default();
        let item = meal.add_calculated(&white_bread(), 100.0);
        assert_eq!(item.be, 4.0);
        assert_eq!(item.khe, 4.76);
        assert_eq!(meal.len(), 1);
    }

    #[test]
    fn test_totals() {
        let mut meal = MealStore::default();
        meal.add_calculated(&white_bread(), 50.0);
        meal.add_calculated(&food("F1", "Apfel"), 120.0);

        assert_float_absolute_eq!(meal.total_be(), 3.0, 1e-9);
        assert_float_absolute_eq!(meal.total_khe(), 2.38 + 1.2, 1e-9);
        assert_float_absolute_eq!(meal.total_carbs(), 24.0 + 12.0, 1e-9);
    }

    #[test]
    fn test_snapshot_survives_food_edit() {
        let mut meal = MealStore::default();
        let mut bread = white_bread();
        meal.add_calculated(&bread, 100.0);

        bread.grams_per_be = 50.0;
        assert_eq!(meal.items()[0].be, 4.0);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut meal = MealStore::default();
        meal.add_item(white_bread(), 25.0, 1.0, 1.19);
        meal.add_item(food("F1", "Apfel"), 120.0, 1.0, 1.2);

        let removed = meal.remove_item(0).unwrap();
        assert_eq!(removed.food.name, "Weißbrot");
        assert_eq!(meal.items()[0].food.name, "Apfel");
        assert!(matches!(meal.remove_item(5), Err(CarbError::InvalidInput(_))));

        meal.clear();
        assert!(meal.is_empty());
        assert_eq!(meal.total_be(), 0.0);
    }

    #[test]
    fn test_duplicate_foods_are_separate_lines() {
        let mut meal = MealStore::default();
        meal.add_calculated(&white_bread(), 25.0);
        meal.add_calculated(&white_bread(), 25.0);
        assert_eq!(meal.len(), 2);
        assert_float_absolute_eq!(meal.total_be(), 2.0, 1e-9);
    }
}
