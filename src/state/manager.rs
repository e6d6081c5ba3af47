use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::catalog::{belongs_to_any_category, next_custom_id};
use crate::error::{CarbError, Result};
use crate::models::FoodRecord;
use crate::nutrition::derive_units_from_carbs;
use crate::search::{search, suggest, SearchIndex};

/// Category heading given to user-defined foods without one.
pub const CUSTOM_CATEGORY: &str = "Eigene Lebensmittel";

/// Values a user enters when creating or editing a custom food.
#[derive(Debug, Clone, Default)]
pub struct CustomFoodInput {
    pub name: String,
    pub subtitle: Option<String>,
    pub carbs_per_100g: f64,
    /// Overrides the value derived from `carbs_per_100g`.
    pub grams_per_be: Option<f64>,
    /// Overrides the value derived from `carbs_per_100g`.
    pub grams_per_khe: Option<f64>,
    pub category: Option<String>,
    pub measurement_unit: Option<String>,
    pub kcal_per_100g: Option<f64>,
    pub kj_per_100g: Option<f64>,
}

fn carb_level_tag(carbs_per_100g: f64) -> &'static str {
    if carbs_per_100g < 10.0 {
        "wenigeKH"
    } else if carbs_per_100g <= 30.0 {
        "mittlereKH"
    } else {
        "vieleKH"
    }
}

impl CustomFoodInput {
    /// Reject input the unit converter cannot handle.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CarbError::InvalidInput("name must not be empty".to_string()));
        }
        if !self.carbs_per_100g.is_finite() || self.carbs_per_100g <= 0.0 {
            return Err(CarbError::InvalidInput(format!(
                "carbohydrates per 100 g must be greater than 0, got {}",
                self.carbs_per_100g
            )));
        }
        for (label, value) in [("gBE", self.grams_per_be), ("gKHE", self.grams_per_khe)] {
            if let Some(v) = value {
                if !v.is_finite() || v <= 0.0 {
                    return Err(CarbError::InvalidInput(format!(
                        "{} must be greater than 0, got {}",
                        label, v
                    )));
                }
            }
        }
        Ok(())
    }

    fn into_record(self, reference_code: String) -> FoodRecord {
        let derived = derive_units_from_carbs(self.carbs_per_100g);
        let category = self
            .category
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| CUSTOM_CATEGORY.to_string());

        FoodRecord {
            name: self.name.trim().to_string(),
            subtitle: self.subtitle.filter(|s| !s.trim().is_empty()),
            reference_code,
            carbs_per_100g: self.carbs_per_100g,
            grams_per_be: self.grams_per_be.unwrap_or(derived.grams_per_be),
            grams_per_khe: self.grams_per_khe.unwrap_or(derived.grams_per_khe),
            categories: vec![vec![category]],
            tags: vec![carb_level_tag(self.carbs_per_100g).to_string()],
            measurement_unit: self.measurement_unit,
            kcal_per_100g: self.kcal_per_100g,
            kj_per_100g: self.kj_per_100g,
            is_user_defined: true,
        }
    }
}

/// Packaged and user-defined foods, favourites and the search index over
/// both.
///
/// Every change to the food collections rebuilds the index from scratch.
pub struct FoodCatalog {
    packaged: Vec<FoodRecord>,
    custom: Vec<FoodRecord>,
    favorites: BTreeSet<String>,
    index: SearchIndex,
}

impl FoodCatalog {
    /// Create a catalog and build its index.
    pub fn new(packaged: Vec<FoodRecord>, custom: Vec<FoodRecord>, favorites: Vec<String>) -> Self {
        let custom = custom
            .into_iter()
            .map(|mut f| {
                f.is_user_defined = true;
                f
            })
            .collect();

        let mut catalog = Self {
            packaged,
            custom,
            favorites: favorites.into_iter().collect(),
            index: SearchIndex::default(),
        };
        catalog.rebuild_index();
        info!(
            packaged = catalog.packaged.len(),
            custom = catalog.custom.len(),
            "catalog ready"
        );
        catalog
    }

    /// Replace the packaged foods, e.g. after reloading the data file.
    pub fn replace_packaged(&mut self, foods: Vec<FoodRecord>) {
        self.packaged = foods;
        self.rebuild_index();
    }

    fn rebuild_index(&mut self) {
        let all: Vec<FoodRecord> = self.all_foods().cloned().collect();
        self.index = SearchIndex::new(all);
        debug!(records = self.index.len(), "search index rebuilt");
    }

    /// The current search snapshot.
    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// Packaged foods followed by custom foods.
    pub fn all_foods(&self) -> impl Iterator<Item = &FoodRecord> {
        self.packaged.iter().chain(self.custom.iter())
    }

    pub fn custom_foods(&self) -> &[FoodRecord] {
        &self.custom
    }

    /// Number of foods across both collections.
    pub fn len(&self) -> usize {
        self.packaged.len() + self.custom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packaged.is_empty() && self.custom.is_empty()
    }

    /// Foods to show for `query` with the `hidden` category prefixes removed.
    ///
    /// A blank query lists every visible food in catalog order; otherwise the
    /// ranked search results are returned.
    pub fn visible_foods<S: AsRef<str>>(&self, query: &str, hidden: &[S]) -> Vec<&FoodRecord> {
        let shown = |food: &&FoodRecord| !belongs_to_any_category(food, hidden);

        if query.trim().is_empty() {
            return self.all_foods().filter(shown).collect();
        }

        search(&self.index, query).into_iter().filter(shown).collect()
    }

    /// "Did you mean" names for `query` among the foods not in `hidden`.
    pub fn suggest_names<S: AsRef<str>>(
        &self,
        query: &str,
        hidden: &[S],
        limit: usize,
    ) -> Vec<&str> {
        let shown = self
            .all_foods()
            .filter(|food| !belongs_to_any_category(food, hidden));
        suggest(query, shown, limit)
    }

    /// Drop every custom food and favourite, keeping the packaged foods.
    pub fn clear_user_data(&mut self) {
        self.custom.clear();
        self.favorites.clear();
        info!("custom foods and favourites cleared");
        self.rebuild_index();
    }

    /// First food whose reference code equals `code`.
    pub fn find_by_code(&self, code: &str) -> Option<&FoodRecord> {
        self.all_foods().find(|f| f.reference_code == code)
    }

    /// Resolve user input to a food: an exact reference code first, then the
    /// best search hit.
    pub fn resolve(&self, query: &str) -> Result<&FoodRecord> {
        let query = query.trim();
        if let Some(food) = self.find_by_code(query) {
            return Ok(food);
        }
        search(&self.index, query)
            .into_iter()
            .next()
            .ok_or_else(|| CarbError::FoodNotFound(query.to_string()))
    }

    /// Validate and store a new custom food under the next free code.
    pub fn add_custom_food(&mut self, input: CustomFoodInput) -> Result<&FoodRecord> {
        input.validate()?;

        let code = next_custom_id(&self.custom);
        let record = input.into_record(code);
        info!(code = %record.reference_code, name = %record.name, "custom food added");

        self.custom.push(record);
        self.rebuild_index();
        let last = self.custom.len() - 1;
        Ok(&self.custom[last])
    }

    /// Replace the custom food stored under `code`, keeping its code.
    pub fn update_custom_food(&mut self, code: &str, input: CustomFoodInput) -> Result<&FoodRecord> {
        input.validate()?;

        let position = self
            .custom
            .iter()
            .position(|f| f.reference_code == code)
            .ok_or_else(|| CarbError::FoodNotFound(code.to_string()))?;

        self.custom[position] = input.into_record(code.to_string());
        info!(code, "custom food updated");
        self.rebuild_index();
        Ok(&self.custom[position])
    }

    /// Remove every custom food stored under `code` and unfavourite it.
    ///
    /// Returns how many records were removed.
    pub fn delete_custom_food(&mut self, code: &str) -> Result<usize> {
        let before = self.custom.len();
        self.custom.retain(|f| f.reference_code != code);
        let removed = before - self.custom.len();

        if removed == 0 {
            return Err(CarbError::FoodNotFound(code.to_string()));
        }

        self.favorites.remove(code);
        info!(code, removed, "custom food deleted");
        self.rebuild_index();
        Ok(removed)
    }

    /// Flip the favourite flag of `code`. Returns true if it is now a favourite.
    pub fn toggle_favorite(&mut self, code: &str) -> bool {
        if self.favorites.remove(code) {
            false
        } else {
            self.favorites.insert(code.to_string());
            true
        }
    }

    pub fn is_favorite(&self, code: &str) -> bool {
        self.favorites.contains(code)
    }

    /// Favourited codes, sorted.
    pub fn favorite_codes(&self) -> Vec<String> {
        self.favorites.iter().cloned().collect()
    }

    /// Every food whose code is a favourite, duplicates included.
    pub fn favorite_foods(&self) -> Vec<&FoodRecord> {
        self.all_foods()
            .filter(|f| self.favorites.contains(&f.reference_code))
            .collect()
    }
}
