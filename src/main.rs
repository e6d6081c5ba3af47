use clap::Parser;
use tracing_subscriber::EnvFilter;

use carbme_rs::catalog::{group_by_category, is_prepared_meal, BlsCategory};
use carbme_rs::cli::{
    AmountArgs, Cli, Command, CustomCommand, CustomFoodArgs, MealCommand, OnOff, SettingsCommand,
};
use carbme_rs::error::{CarbError, Result};
use carbme_rs::interface::{
    display_calculation, display_food_list, display_grouped, display_meal, display_suggestions,
    format_number, pick_food, prompt_yes_no,
};
use carbme_rs::models::{CarbUnit, EnergyUnit, Settings};
use carbme_rs::nutrition::{
    check_amount, compute_nutrition, grams_for_be, grams_for_khe, kcal_to_kj, kj_to_kcal,
};
use carbme_rs::state::{export_meal_csv, CustomFoodInput, Session};

/// How many "did you mean" names to offer after an empty search.
const SUGGESTION_LIMIT: usize = 5;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let load = || Session::load(&cli.catalog, &cli.data);

    match cli.command {
        Command::Energy { kcal, kj } => cmd_energy(kcal, kj),
        Command::Search { query } => cmd_search(&load()?, &query),
        Command::List { grouped, prepared } => cmd_list(&load()?, grouped, prepared),
        Command::Calc { food, amount } => cmd_calc(&load()?, &food, &amount),
        Command::Meal(sub) => cmd_meal(&mut load()?, sub),
        Command::Custom(sub) => cmd_custom(&mut load()?, sub),
        Command::Favorite { code } => cmd_favorite(&mut load()?, &code),
        Command::Favorites => {
            let session = load()?;
            let foods = session.catalog.favorite_foods();
            display_food_list(&foods, "Favourites", &session.settings, |_| true);
            Ok(())
        }
        Command::Settings(sub) => cmd_settings(&mut load()?, sub),
        Command::Pick => cmd_pick(&mut load()?),
    }
}

/// Ranked search with suggestions when nothing matches.
fn cmd_search(session: &Session, query: &str) -> Result<()> {
    let results = session
        .catalog
        .visible_foods(query, &session.settings.hidden_categories);

    if results.is_empty() {
        let names =
            session
                .catalog
                .suggest_names(query, &session.settings.hidden_categories, SUGGESTION_LIMIT);
        display_suggestions(query, &names);
        return Ok(());
    }

    let title = format!("Results for '{}'", query);
    display_food_list(&results, &title, &session.settings, |f| {
        session.catalog.is_favorite(&f.reference_code)
    });
    Ok(())
}

fn cmd_list(session: &Session, grouped: bool, prepared: bool) -> Result<()> {
    let mut foods = session
        .catalog
        .visible_foods("", &session.settings.hidden_categories);
    if prepared {
        foods.retain(|f| is_prepared_meal(f));
    }

    if grouped {
        let groups = group_by_category(foods);
        display_grouped(&groups, &session.settings);
    } else {
        display_food_list(&foods, "Foods", &session.settings, |f| {
            session.catalog.is_favorite(&f.reference_code)
        });
    }
    Ok(())
}

/// Convert grams, BE or KHE of one food.
fn cmd_calc(session: &Session, query: &str, amount: &AmountArgs) -> Result<()> {
    let food = session.catalog.resolve(query)?;

    let grams = match (amount.grams, amount.be, amount.khe) {
        (Some(grams), _, _) => check_amount(grams, "grams")?,
        (_, Some(be), _) => grams_for_be(food, check_amount(be, "BE")?) as f64,
        (_, _, Some(khe)) => grams_for_khe(food, check_amount(khe, "KHE")?) as f64,
        _ => {
            return Err(CarbError::InvalidInput(
                "give one of --grams, --be or --khe".to_string(),
            ));
        }
    };

    let result = compute_nutrition(food, grams);
    display_calculation(food, &result, &session.settings);
    Ok(())
}

fn cmd_energy(kcal: Option<f64>, kj: Option<f64>) -> Result<()> {
    match (kcal, kj) {
        (Some(kcal), _) => println!("{} kcal = {} kJ", kcal, kcal_to_kj(kcal)),
        (_, Some(kj)) => println!("{} kJ = {} kcal", kj, kj_to_kcal(kj)),
        _ => {
            return Err(CarbError::InvalidInput(
                "give --kcal or --kj".to_string(),
            ));
        }
    }
    Ok(())
}

fn cmd_meal(session: &mut Session, command: MealCommand) -> Result<()> {
    match command {
        MealCommand::Add { food, grams } => {
            let food = session.catalog.resolve(&food)?.clone();
            let item = session.add_to_meal(&food, grams)?;
            println!(
                "Added {} {} {} ({} BE / {} KHE).",
                format_number(item.grams),
                item.food.unit_label(),
                item.food.name,
                format_number(item.be),
                format_number(item.khe)
            );
            Ok(())
        }
        MealCommand::List => {
            display_meal(&session.meal, &session.settings);
            Ok(())
        }
        MealCommand::Remove { position } => {
            let index = position
                .checked_sub(1)
                .ok_or_else(|| CarbError::InvalidInput("positions start at 1".to_string()))?;
            let removed = session.meal.remove_item(index)?;
            println!("Removed {}.", removed.food.name);
            session.save()
        }
        MealCommand::Clear => {
            if session.meal.is_empty() {
                println!("The meal is already empty.");
                return Ok(());
            }
            session.meal.clear();
            println!("Meal cleared.");
            session.save()
        }
        MealCommand::Export { path } => {
            export_meal_csv(&path, session.meal.items())?;
            println!("Exported {} items to {}.", session.meal.len(), path.display());
            Ok(())
        }
    }
}

fn custom_input(args: CustomFoodArgs) -> CustomFoodInput {
    CustomFoodInput {
        name: args.name,
        subtitle: args.subtitle,
        carbs_per_100g: args.carbs,
        grams_per_be: args.gbe,
        grams_per_khe: args.gkhe,
        category: args.category,
        measurement_unit: args.unit,
        kcal_per_100g: args.kcal,
        kj_per_100g: args.kj,
    }
}

fn cmd_custom(session: &mut Session, command: CustomCommand) -> Result<()> {
    match command {
        CustomCommand::Add(args) => {
            let food = session.catalog.add_custom_food(custom_input(args))?;
            println!("Created {} as {}.", food.name, food.reference_code);
            session.save()
        }
        CustomCommand::Edit { code, food } => {
            let food = session.catalog.update_custom_food(&code, custom_input(food))?;
            println!("Updated {} ({}).", food.name, food.reference_code);
            session.save()
        }
        CustomCommand::Delete { code } => {
            let name = session
                .catalog
                .custom_foods()
                .iter()
                .find(|f| f.reference_code == code)
                .map(|f| f.name.clone())
                .ok_or_else(|| CarbError::FoodNotFound(code.clone()))?;

            if !prompt_yes_no(&format!("Delete '{}'?", name), false)? {
                return Ok(());
            }
            session.catalog.delete_custom_food(&code)?;
            println!("Deleted {}.", name);
            session.save()
        }
        CustomCommand::List => {
            let foods: Vec<_> = session.catalog.custom_foods().iter().collect();
            display_food_list(&foods, "Custom foods", &session.settings, |f| {
                session.catalog.is_favorite(&f.reference_code)
            });
            Ok(())
        }
    }
}

fn cmd_favorite(session: &mut Session, code: &str) -> Result<()> {
    let name = session
        .catalog
        .find_by_code(code)
        .map(|f| f.name.clone())
        .ok_or_else(|| CarbError::FoodNotFound(code.to_string()))?;

    if session.catalog.toggle_favorite(code) {
        println!("Added {} to favourites.", name);
    } else {
        println!("Removed {} from favourites.", name);
    }
    session.save()
}

fn cmd_settings(session: &mut Session, command: SettingsCommand) -> Result<()> {
    match command {
        SettingsCommand::Show => {
            print_settings(&session.settings);
            return Ok(());
        }
        SettingsCommand::Categories => {
            for category in BlsCategory::ALL {
                let marker = if session.settings.is_category_hidden(category.prefix()) {
                    " (hidden)"
                } else {
                    ""
                };
                println!("{}{}", category, marker);
            }
            return Ok(());
        }
        SettingsCommand::Reset { yes } => {
            if !yes && !prompt_yes_no("Delete custom foods, favourites and the meal?", false)? {
                return Ok(());
            }
            session.reset()?;
            println!("All user data reset.");
            return Ok(());
        }
        SettingsCommand::Unit { unit } => {
            session.settings.preferred_unit = unit.parse::<CarbUnit>()?;
        }
        SettingsCommand::Energy { enabled } => {
            session.settings.show_energy = enabled == OnOff::On;
        }
        SettingsCommand::EnergyUnit { unit } => {
            session.settings.energy_unit = unit.parse::<EnergyUnit>()?;
        }
        SettingsCommand::Hide { prefix } => {
            let category = known_category(&prefix)?;
            session.settings.toggle_hidden_category(category.prefix(), true);
        }
        SettingsCommand::Unhide { prefix } => {
            let category = known_category(&prefix)?;
            session.settings.toggle_hidden_category(category.prefix(), false);
        }
    }

    print_settings(&session.settings);
    session.save()
}

fn known_category(prefix: &str) -> Result<BlsCategory> {
    BlsCategory::from_prefix(prefix.trim()).ok_or_else(|| {
        CarbError::InvalidInput(format!(
            "unknown category '{}', see 'settings categories'",
            prefix
        ))
    })
}

fn print_settings(settings: &Settings) {
    println!("Preferred unit: {}", settings.preferred_unit);
    println!(
        "Show energy:    {}",
        if settings.show_energy { "on" } else { "off" }
    );
    println!("Energy unit:    {}", settings.energy_unit);
    if settings.hidden_categories.is_empty() {
        println!("Hidden:         (none)");
    } else {
        println!("Hidden:         {}", settings.hidden_categories.join(", "));
    }
}

/// Interactive loop: search, choose, weigh, add to the meal.
fn cmd_pick(session: &mut Session) -> Result<()> {
    if session.catalog.is_empty() {
        println!("No foods loaded. Check --catalog or add custom foods.");
        return Ok(());
    }

    let mut added = 0;
    loop {
        let picked = pick_food(&session.catalog, &session.settings.hidden_categories)?;
        let Some((food, grams)) = picked else {
            break;
        };

        let food = food.clone();
        let result = compute_nutrition(&food, grams);
        display_calculation(&food, &result, &session.settings);
        // Saved per item so an aborted prompt keeps what was already picked.
        session.add_to_meal(&food, grams)?;
        added += 1;
    }

    if added > 0 {
        display_meal(&session.meal, &session.settings);
    }
    Ok(())
}
