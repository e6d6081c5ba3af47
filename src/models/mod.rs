mod food;
mod meal;
mod settings;

#[cfg(test)]
pub(crate) use food::fixtures;
pub use food::{FoodRecord, CODE_SEPARATOR};
pub use meal::{CalculationResult, MealLineItem};
pub use settings::{CarbUnit, EnergyUnit, Settings};
