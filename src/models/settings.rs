use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CarbError;

/// Carbohydrate unit shown first in results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarbUnit {
    #[default]
    #[serde(rename = "BE")]
    Be,
    #[serde(rename = "KHE")]
    Khe,
}

impl fmt::Display for CarbUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarbUnit::Be => write!(f, "BE"),
            CarbUnit::Khe => write!(f, "KHE"),
        }
    }
}

impl FromStr for CarbUnit {
    type Err = CarbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "be" => Ok(CarbUnit::Be),
            "khe" => Ok(CarbUnit::Khe),
            other => Err(CarbError::InvalidInput(format!(
                "unknown carb unit '{}', expected BE or KHE",
                other
            ))),
        }
    }
}

/// Energy unit used when energy display is enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    #[default]
    #[serde(rename = "kcal")]
    Kcal,
    #[serde(rename = "kJ")]
    Kj,
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnergyUnit::Kcal => write!(f, "kcal"),
            EnergyUnit::Kj => write!(f, "kJ"),
        }
    }
}

impl FromStr for EnergyUnit {
    type Err = CarbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kcal" => Ok(EnergyUnit::Kcal),
            "kj" => Ok(EnergyUnit::Kj),
            other => Err(CarbError::InvalidInput(format!(
                "unknown energy unit '{}', expected kcal or kJ",
                other
            ))),
        }
    }
}

/// User preferences persisted alongside custom foods and the meal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub preferred_unit: CarbUnit,
    pub show_energy: bool,
    pub energy_unit: EnergyUnit,
    /// Reference-code prefixes whose foods are hidden from lists and search.
    pub hidden_categories: Vec<String>,
}

impl Settings {
    /// Hide or unhide a category prefix. Hiding twice or unhiding an unknown
    /// prefix leaves the list unchanged.
    pub fn toggle_hidden_category(&mut self, category: &str, hide: bool) {
        let present = self.is_category_hidden(category);
        if hide && !present {
            self.hidden_categories.push(category.to_string());
        } else if !hide && present {
            self.hidden_categories.retain(|c| c != category);
        }
    }

    pub fn is_category_hidden(&self, category: &str) -> bool {
        self.hidden_categories.iter().any(|c| c == category)
    }
}
