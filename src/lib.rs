#[cfg(test)]
#[macro_use]
extern crate assert_float_eq;

pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod nutrition;
pub mod search;
pub mod state;

pub use error::{CarbError, Result};
pub use models::{CalculationResult, FoodRecord, MealLineItem, Settings};
pub use search::{build_index, search, SearchIndex};
pub use state::{FoodCatalog, MealStore, Session};
