/// Carbohydrate grams in one bread unit (BE).
pub const CARBS_PER_BE: f64 = 12.0;

/// Carbohydrate grams in one carbohydrate unit (KHE).
pub const CARBS_PER_KHE: f64 = 10.0;

/// Kilojoules per kilocalorie.
pub const KJ_PER_KCAL: f64 = 4.184;

/// Decimal places for BE and KHE results.
pub const UNIT_DECIMALS: u32 = 2;

/// Decimal places for carbohydrate grams.
pub const CARBS_DECIMALS: u32 = 1;
