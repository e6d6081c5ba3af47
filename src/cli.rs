use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// carbme: bread-unit calculator with fuzzy food search and meal tracking.
#[derive(Parser, Debug)]
#[command(name = "carbme")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the packaged food database (`{"lebensmittel": [...]}`).
    #[arg(short, long, env = "CARBME_CATALOG", default_value = "lebensmittel-daten.json")]
    pub catalog: PathBuf,

    /// Path to the user data file (custom foods, favourites, meal, settings).
    #[arg(short, long, env = "CARBME_DATA", default_value = "carbme_data.json")]
    pub data: PathBuf,

    /// Log debug output to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Amount to convert; exactly one must be given.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct AmountArgs {
    /// Amount in grams (or ml for beverages).
    #[arg(short, long)]
    pub grams: Option<f64>,

    /// Bread units to convert to grams.
    #[arg(long)]
    pub be: Option<f64>,

    /// Carbohydrate units to convert to grams.
    #[arg(long)]
    pub khe: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search foods by name, subtitle, category or tag.
    Search {
        /// Search text.
        query: String,
    },

    /// List all visible foods.
    List {
        /// Section the list by category.
        #[arg(long)]
        grouped: bool,

        /// Only prepared meals (savoury and sweet).
        #[arg(long)]
        prepared: bool,
    },

    /// Convert an amount of a food into BE, KHE and carbohydrates.
    Calc {
        /// Reference code or search text.
        food: String,

        #[command(flatten)]
        amount: AmountArgs,
    },

    /// Convert between kcal and kJ.
    Energy {
        /// Kilocalories to convert to kJ.
        #[arg(long, conflicts_with = "kj", required_unless_present = "kj")]
        kcal: Option<f64>,

        /// Kilojoules to convert to kcal.
        #[arg(long)]
        kj: Option<f64>,
    },

    /// Work with the current meal.
    #[command(subcommand)]
    Meal(MealCommand),

    /// Manage user-defined foods.
    #[command(subcommand)]
    Custom(CustomCommand),

    /// Toggle a food's favourite flag by reference code.
    Favorite {
        code: String,
    },

    /// List favourite foods.
    Favorites,

    /// Show or change settings.
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// Interactively search foods and add them to the meal.
    Pick,
}

#[derive(Subcommand, Debug)]
pub enum MealCommand {
    /// Add a food to the meal.
    Add {
        /// Reference code or search text.
        food: String,

        /// Amount in grams (or ml).
        #[arg(short, long)]
        grams: f64,
    },

    /// Show the meal and its totals.
    List,

    /// Remove one line (1-based, as shown by `meal list`).
    Remove {
        position: usize,
    },

    /// Remove every line.
    Clear,

    /// Write the meal to a CSV file.
    Export {
        path: PathBuf,
    },
}

/// Fields of a custom food.
#[derive(Args, Debug)]
pub struct CustomFoodArgs {
    #[arg(long)]
    pub name: String,

    /// Carbohydrates per 100 g.
    #[arg(long)]
    pub carbs: f64,

    #[arg(long)]
    pub subtitle: Option<String>,

    /// Grams per BE; derived from --carbs when omitted.
    #[arg(long)]
    pub gbe: Option<f64>,

    /// Grams per KHE; derived from --carbs when omitted.
    #[arg(long)]
    pub gkhe: Option<f64>,

    #[arg(long)]
    pub category: Option<String>,

    /// Measurement unit, e.g. "ml" for beverages.
    #[arg(long)]
    pub unit: Option<String>,

    /// Kilocalories per 100 g.
    #[arg(long)]
    pub kcal: Option<f64>,

    /// Kilojoules per 100 g.
    #[arg(long)]
    pub kj: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum CustomCommand {
    /// Create a custom food.
    Add(CustomFoodArgs),

    /// Replace a custom food, keeping its code.
    Edit {
        code: String,

        #[command(flatten)]
        food: CustomFoodArgs,
    },

    /// Delete a custom food.
    Delete {
        code: String,
    },

    /// List custom foods.
    List,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Print current settings.
    Show,

    /// Preferred carbohydrate unit (BE or KHE).
    Unit { unit: String },

    /// Show energy in calculations (on/off).
    Energy { enabled: OnOff },

    /// Energy unit (kcal or kJ).
    EnergyUnit { unit: String },

    /// Hide a category by code prefix, e.g. P for alcoholic drinks.
    Hide { prefix: String },

    /// Show a previously hidden category again.
    Unhide { prefix: String },

    /// List all categories and their prefixes.
    Categories,

    /// Delete custom foods, favourites and the meal, and restore default
    /// settings.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnOff {
    On,
    Off,
}
