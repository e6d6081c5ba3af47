use std::fmt;

use crate::models::FoodRecord;

/// Food categories of the national food code, keyed by the leading letter
/// of a reference code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlsCategory {
    BrotBackwaren,
    Getreide,
    Suessgebaeck,
    Teigwaren,
    Obst,
    Gemuese,
    HuelsenfruechteNuesse,
    Kartoffeln,
    Milchprodukte,
    Getraenke,
    AlkoholischeGetraenke,
    FetteOele,
    GewuerzeSaucen,
    Suesswaren,
    FischMeeresfruechte,
    Fleisch,
    GefluegelWild,
    Wurstwaren,
    Fertiggerichte,
    FertiggerichteSuess,
}

impl BlsCategory {
    pub const ALL: [BlsCategory; 20] = [
        BlsCategory::BrotBackwaren,
        BlsCategory::Getreide,
        BlsCategory::Suessgebaeck,
        BlsCategory::Teigwaren,
        BlsCategory::Obst,
        BlsCategory::Gemuese,
        BlsCategory::HuelsenfruechteNuesse,
        BlsCategory::Kartoffeln,
        BlsCategory::Milchprodukte,
        BlsCategory::Getraenke,
        BlsCategory::AlkoholischeGetraenke,
        BlsCategory::FetteOele,
        BlsCategory::GewuerzeSaucen,
        BlsCategory::Suesswaren,
        BlsCategory::FischMeeresfruechte,
        BlsCategory::Fleisch,
        BlsCategory::GefluegelWild,
        BlsCategory::Wurstwaren,
        BlsCategory::Fertiggerichte,
        BlsCategory::FertiggerichteSuess,
    ];

    /// Reference-code prefix of this category.
    pub fn prefix(self) -> &'static str {
        match self {
            BlsCategory::BrotBackwaren => "B",
            BlsCategory::Getreide => "C",
            BlsCategory::Suessgebaeck => "D",
            BlsCategory::Teigwaren => "E",
            BlsCategory::Obst => "F",
            BlsCategory::Gemuese => "G",
            BlsCategory::HuelsenfruechteNuesse => "H",
            BlsCategory::Kartoffeln => "K",
            BlsCategory::Milchprodukte => "M",
            BlsCategory::Getraenke => "N",
            BlsCategory::AlkoholischeGetraenke => "P",
            BlsCategory::FetteOele => "Q",
            BlsCategory::GewuerzeSaucen => "R",
            BlsCategory::Suesswaren => "S",
            BlsCategory::FischMeeresfruechte => "T",
            BlsCategory::Fleisch => "U",
            BlsCategory::GefluegelWild => "V",
            BlsCategory::Wurstwaren => "W",
            BlsCategory::Fertiggerichte => "X",
            BlsCategory::FertiggerichteSuess => "Y",
        }
    }

    /// German display name.
    pub fn label(self) -> &'static str {
        match self {
            BlsCategory::BrotBackwaren => "Brot & Backwaren",
            BlsCategory::Getreide => "Getreide",
            BlsCategory::Suessgebaeck => "Süßgebäck",
            BlsCategory::Teigwaren => "Teigwaren",
            BlsCategory::Obst => "Obst",
            BlsCategory::Gemuese => "Gemüse",
            BlsCategory::HuelsenfruechteNuesse => "Hülsenfrüchte & Nüsse",
            BlsCategory::Kartoffeln => "Kartoffeln",
            BlsCategory::Milchprodukte => "Milchprodukte",
            BlsCategory::Getraenke => "Getränke",
            BlsCategory::AlkoholischeGetraenke => "Alkoholische Getränke",
            BlsCategory::FetteOele => "Fette & Öle",
            BlsCategory::GewuerzeSaucen => "Gewürze & Saucen",
            BlsCategory::Suesswaren => "Süßwaren",
            BlsCategory::FischMeeresfruechte => "Fisch & Meeresfrüchte",
            BlsCategory::Fleisch => "Fleisch",
            BlsCategory::GefluegelWild => "Geflügel & Wild",
            BlsCategory::Wurstwaren => "Wurstwaren",
            BlsCategory::Fertiggerichte => "Fertiggerichte",
            BlsCategory::FertiggerichteSuess => "Fertiggerichte (süß)",
        }
    }

    /// Look up a category by its code prefix (exact case).
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.prefix() == prefix)
    }
}

impl fmt::Display for BlsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.prefix())
    }
}

/// True if any `+` segment of the food's reference code starts with
/// `prefix`. Case-sensitive.
pub fn belongs_to_category(food: &FoodRecord, prefix: &str) -> bool {
    food.code_segments().any(|segment| segment.starts_with(prefix))
}

/// True if the food belongs to at least one of `prefixes`.
pub fn belongs_to_any_category<S: AsRef<str>>(food: &FoodRecord, prefixes: &[S]) -> bool {
    prefixes
        .iter()
        .any(|prefix| belongs_to_category(food, prefix.as_ref()))
}

/// Prepared meals carry an `X` (savoury) or `Y` (sweet) code.
pub fn is_prepared_meal(food: &FoodRecord) -> bool {
    belongs_to_any_category(
        food,
        &[
            BlsCategory::Fertiggerichte.prefix(),
            BlsCategory::FertiggerichteSuess.prefix(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::food;

    fn coded(code: &str) -> FoodRecord {
        food(code, "Test Food")
    }

    #[test]
    fn test_prefix_match() {
        assert!(belongs_to_category(&coded("X123456"), "X"));
        assert!(belongs_to_category(&coded("XABCDEF"), "X"));
        assert!(belongs_to_category(&coded("X"), "X"));
        assert!(!belongs_to_category(&coded("Y123456"), "X"));
    }

    #[test]
    fn test_case_and_position_sensitive() {
        assert!(!belongs_to_category(&coded("p123456"), "P"));
        assert!(!belongs_to_category(&coded("AP12345"), "P"));
        assert!(!belongs_to_category(&coded(""), "X"));
    }

    #[test]
    fn test_any_category() {
        assert!(belongs_to_any_category(&coded("X123456"), &["X", "Y"]));
        assert!(belongs_to_any_category(&coded("P123456"), &["P", "N"]));
        assert!(!belongs_to_any_category(&coded("B123456"), &["X", "Y", "P"]));
        assert!(!belongs_to_any_category::<&str>(&coded("X123456"), &[]));
        assert!(!belongs_to_any_category(&coded(""), &["X", "Y", "P"]));
    }

    #[test]
    fn test_composite_codes() {
        assert!(belongs_to_any_category(&coded("R9A2000+R9A2200"), &["R"]));
        assert!(belongs_to_any_category(&coded("R9A2000+R9A2200+R9A2100"), &["R"]));
        assert!(belongs_to_any_category(&coded("B123+Y456"), &["Y"]));
        assert!(!belongs_to_any_category(&coded("B123+Y456"), &["X"]));
    }

    #[test]
    fn test_prepared_meal() {
        assert!(is_prepared_meal(&coded("X000001")));
        assert!(is_prepared_meal(&coded("Y")));
        assert!(!is_prepared_meal(&coded("x123456")));
        assert!(!is_prepared_meal(&coded("1X23456")));
        assert!(!is_prepared_meal(&coded("N123456")));
    }

    #[test]
    fn test_category_lookup() {
        assert_eq!(BlsCategory::from_prefix("P"), Some(BlsCategory::AlkoholischeGetraenke));
        assert_eq!(BlsCategory::from_prefix("p"), None);
        assert_eq!(BlsCategory::Obst.label(), "Obst");
        assert_eq!(BlsCategory::ALL.len(), 20);
    }
}
