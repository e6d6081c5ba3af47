use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;
use crate::models::{FoodRecord, MealLineItem, Settings};

/// On-disk shape of the packaged food database.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogFile {
    pub lebensmittel: Vec<FoodRecord>,
}

/// Everything the user changes: custom foods, favourites, the current meal
/// and settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserData {
    pub custom_foods: Vec<FoodRecord>,
    pub favorites: Vec<String>,
    pub meal: Vec<MealLineItem>,
    pub settings: Settings,
}

/// Load the packaged food database.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<FoodRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let file: CatalogFile = serde_json::from_str(&content)?;

    info!(path = %path.display(), foods = file.lebensmittel.len(), "loaded food database");
    Ok(file.lebensmittel)
}

/// Load user data.
///
/// A missing file yields defaults. An unreadable or corrupt file is logged
/// and also yields defaults, so a broken data file never blocks the catalog.
pub fn load_user_data<P: AsRef<Path>>(path: P) -> UserData {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return UserData::default(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read user data, using defaults");
            return UserData::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(data) => data,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "corrupt user data, using defaults");
            UserData::default()
        }
    }
}

/// Save user data as pretty JSON.
pub fn save_user_data<P: AsRef<Path>>(path: P, data: &UserData) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write the meal as CSV with a trailing totals row.
pub fn export_meal_csv<P: AsRef<Path>>(path: P, items: &[MealLineItem]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["name", "code", "grams", "be", "khe", "carbs"])?;

    for item in items {
        wtr.write_record([
            item.food.name.clone(),
            item.food.reference_code.clone(),
            format!("{:.0}", item.grams),
            format!("{:.2}", item.be),
            format!("{:.2}", item.khe),
            format!("{:.1}", item.carbs()),
        ])?;
    }

    let total_grams: f64 = items.iter().map(|i| i.grams).sum();
    let total_be: f64 = items.iter().map(|i| i.be).sum();
    let total_khe: f64 = items.iter().map(|i| i.khe).sum();
    let total_carbs: f64 = items.iter().map(MealLineItem::carbs).sum();

    wtr.write_record([
        "total".to_string(),
        String::new(),
        format!("{:.0}", total_grams),
        format!("{:.2}", total_be),
        format!("{:.2}", total_khe),
        format!("{:.1}", total_carbs),
    ])?;

    wtr.flush()?;
    Ok(())
}
