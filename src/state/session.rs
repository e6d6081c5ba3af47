use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::models::{FoodRecord, MealLineItem, Settings};
use crate::nutrition::check_amount;
use crate::state::manager::FoodCatalog;
use crate::state::meal::MealStore;
use crate::state::persistence::{load_catalog, load_user_data, save_user_data, UserData};

/// Catalog, meal and settings of one run, tied to the user data file they
/// were loaded from.
///
/// Every change made through a `Session` method is written back before the
/// method returns, so an error later in the run cannot lose it.
pub struct Session {
    data_path: PathBuf,
    pub catalog: FoodCatalog,
    pub meal: MealStore,
    pub settings: Settings,
}

impl Session {
    /// Load the packaged database and the user data file.
    ///
    /// A missing database leaves only the custom foods; a missing or corrupt
    /// user data file starts from defaults.
    pub fn load(catalog_path: &Path, data_path: &Path) -> Result<Self> {
        let packaged = if catalog_path.exists() {
            load_catalog(catalog_path)?
        } else {
            warn!(path = %catalog_path.display(), "food database not found, only custom foods available");
            Vec::new()
        };

        let data = load_user_data(data_path);
        debug!(
            custom = data.custom_foods.len(),
            favorites = data.favorites.len(),
            meal = data.meal.len(),
            "user data loaded"
        );

        Ok(Self {
            data_path: data_path.to_path_buf(),
            catalog: FoodCatalog::new(packaged, data.custom_foods, data.favorites),
            meal: MealStore::new(data.meal),
            settings: data.settings,
        })
    }

    /// Snapshot of everything that goes into the user data file.
    pub fn user_data(&self) -> UserData {
        UserData {
            custom_foods: self.catalog.custom_foods().to_vec(),
            favorites: self.catalog.favorite_codes(),
            meal: self.meal.items().to_vec(),
            settings: self.settings.clone(),
        }
    }

    pub fn save(&self) -> Result<()> {
        save_user_data(&self.data_path, &self.user_data())?;
        debug!(path = %self.data_path.display(), "user data saved");
        Ok(())
    }

    /// Validate `grams`, add `food` to the meal and save.
    pub fn add_to_meal(&mut self, food: &FoodRecord, grams: f64) -> Result<MealLineItem> {
        let grams = check_amount(grams, "amount")?;
        let item = self.meal.add_calculated(food, grams).clone();
        self.save()?;
        Ok(item)
    }

    /// Forget custom foods, favourites, the meal and settings, then save.
    pub fn reset(&mut self) -> Result<()> {
        self.catalog.clear_user_data();
        self.meal.clear();
        self.settings = Settings::default();
        info!(path = %self.data_path.display(), "user data reset");
        self.save()
    }
}
