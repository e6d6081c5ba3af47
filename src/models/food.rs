use serde::{Deserialize, Serialize};

/// Separator used when several reference codes were merged into one record.
pub const CODE_SEPARATOR: char = '+';

/// A food entry with its carbohydrate data.
///
/// Field names on the wire follow the packaged `lebensmittel` JSON file.
/// `reference_code` is not unique across the catalog: grouped records and
/// user edits can produce duplicates, so nothing keys a map on it alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(rename = "blsCode", default)]
    pub reference_code: String,

    /// Carbohydrate grams per 100 g of product.
    #[serde(rename = "kh")]
    pub carbs_per_100g: f64,

    /// Grams that contain one bread unit (12 g carbohydrate).
    #[serde(rename = "gBE")]
    pub grams_per_be: f64,

    /// Grams that contain one carbohydrate unit (10 g carbohydrate).
    #[serde(rename = "gKHE")]
    pub grams_per_khe: f64,

    #[serde(default)]
    pub categories: Vec<Vec<String>>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(rename = "unit", default, skip_serializing_if = "Option::is_none")]
    pub measurement_unit: Option<String>,

    #[serde(rename = "kcal", default, skip_serializing_if = "Option::is_none")]
    pub kcal_per_100g: Option<f64>,

    #[serde(rename = "kj", default, skip_serializing_if = "Option::is_none")]
    pub kj_per_100g: Option<f64>,

    #[serde(rename = "isCustom", default)]
    pub is_user_defined: bool,
}

impl FoodRecord {
    /// Whether the record carries a searchable name.
    #[inline]
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// First segment of the first category path, used for display sections.
    pub fn primary_category(&self) -> Option<&str> {
        self.categories
            .first()
            .and_then(|path| path.first())
            .map(String::as_str)
    }

    /// Unit label for amounts of this food ("g" unless overridden, e.g. "ml").
    pub fn unit_label(&self) -> &str {
        self.measurement_unit.as_deref().unwrap_or("g")
    }

    /// The original codes this record was built from.
    pub fn code_segments(&self) -> impl Iterator<Item = &str> {
        self.reference_code.split(CODE_SEPARATOR)
    }

    /// Display name including the subtitle, if any.
    pub fn display_name(&self) -> String {
        match &self.subtitle {
            Some(sub) if !sub.is_empty() => format!("{} ({})", self.name, sub),
            _ => self.name.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::FoodRecord;

    /// Minimal record for tests: 10 g carbs, 120 g per BE, 100 g per KHE.
    pub fn food(code: &str, name: &str) -> FoodRecord {
        FoodRecord {
            name: name.to_string(),
            subtitle: None,
            reference_code: code.to_string(),
            carbs_per_100g: 10.0,
            grams_per_be: 120.0,
            grams_per_khe: 100.0,
            categories: vec![vec!["Test".to_string()]],
            tags: Vec::new(),
            measurement_unit: None,
            kcal_per_100g: None,
            kj_per_100g: None,
            is_user_defined: false,
        }
    }

    pub fn white_bread() -> FoodRecord {
        FoodRecord {
            carbs_per_100g: 48.0,
            grams_per_be: 25.0,
            grams_per_khe: 21.0,
            categories: vec![vec!["Brot & Backwaren".to_string()]],
            tags: vec!["vieleKH".to_string()],
            kcal_per_100g: Some(250.0),
            ..food("B123456", "Weißbrot")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::food;
    use super::*;

    #[test]
    fn test_deserialize_packaged_shape() {
        let json = r#"{
            "name": "Apfel",
            "subtitle": "roh",
            "kh": 11.4,
            "gBE": 105,
            "gKHE": 88,
            "categories": [["Obst"]],
            "tags": ["wenigeKH"],
            "blsCode": "F110100"
        }"#;

        let record: FoodRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Apfel");
        assert_eq!(record.subtitle.as_deref(), Some("roh"));
        assert_eq!(record.reference_code, "F110100");
        assert_eq!(record.grams_per_be, 105.0);
        assert_eq!(record.primary_category(), Some("Obst"));
        assert_eq!(record.unit_label(), "g");
        assert!(!record.is_user_defined);
    }

    #[test]
    fn test_missing_name_defaults_to_empty() {
        let json = r#"{"kh": 10, "gBE": 120, "gKHE": 100, "blsCode": "Z1"}"#;
        let record: FoodRecord = serde_json::from_str(json).unwrap();
        assert!(!record.has_name());
        assert!(record.categories.is_empty());
        assert_eq!(record.primary_category(), None);
    }

    #[test]
    fn test_code_segments() {
        let record = food("R9A2000+R9A2200+R9A2100", "Sauce");
        let segments: Vec<&str> = record.code_segments().collect();
        assert_eq!(segments, vec!["R9A2000", "R9A2200", "R9A2100"]);
    }

    #[test]
    fn test_beverage_unit() {
        let mut record = food("N100000", "Orangensaft");
        record.measurement_unit = Some("ml".to_string());
        assert_eq!(record.unit_label(), "ml");
    }

    #[test]
    fn test_display_name() {
        let mut record = food("C1", "Weizenmehl");
        assert_eq!(record.display_name(), "Weizenmehl");
        record.subtitle = Some("Type 405, 550".to_string());
        assert_eq!(record.display_name(), "Weizenmehl (Type 405, 550)");
    }
}
