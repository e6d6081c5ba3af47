pub mod calculations;
pub mod constants;

pub use calculations::{
    check_amount, compute_nutrition, derive_units_from_carbs, energy_for_grams, grams_for_be,
    grams_for_khe, kcal_to_kj, kj_to_kcal, round_to, DerivedUnits,
};
pub use constants::*;
