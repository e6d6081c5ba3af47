mod manager;
mod meal;
mod persistence;
mod session;

pub use manager::{CustomFoodInput, FoodCatalog, CUSTOM_CATEGORY};
pub use meal::MealStore;
pub use persistence::{
    export_meal_csv, load_catalog, load_user_data, save_user_data, CatalogFile, UserData,
};
pub use session::Session;
