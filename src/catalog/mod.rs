pub mod filters;
pub mod grouping;
pub mod ids;

pub use filters::{belongs_to_any_category, belongs_to_category, is_prepared_meal, BlsCategory};
pub use grouping::{group_by_category, FoodGroup, CATEGORY_ORDER};
pub use ids::{next_custom_id, CUSTOM_ID_PREFIX, CUSTOM_ID_WIDTH};
