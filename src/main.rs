use clap::Parser;
use tracing_subscriber::EnvFilter;

use kcal_swap_rs::calculator::{compute_equivalence, substitute};
use kcal_swap_rs::cli::{Cli, Command};
use kcal_swap_rs::dataset::{shared_dataset, FoodDataset};
use kcal_swap_rs::error::{Result, SwapError};
use kcal_swap_rs::interface::{
    display_food_list, display_groups, display_result, prompt_food, prompt_group,
    prompt_quantity, prompt_yes_no, resolve_food,
};
use kcal_swap_rs::models::{name_key, truncate_for_display, SubstitutionRequest};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kcal_swap_rs=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let dataset = shared_dataset(&cli.file, cli.load_policy())?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Interactive => cmd_interactive(dataset),
        Command::Groups => {
            display_groups(dataset);
            Ok(())
        }
        Command::Foods { group, json } => cmd_foods(dataset, &group, json),
        Command::Swap {
            from,
            grams,
            to,
            json,
        } => cmd_swap(dataset, &from, grams, &to, json),
    }
}

/// List the foods of a group, matched case-insensitively.
fn cmd_foods(dataset: &FoodDataset, group: &str, json: bool) -> Result<()> {
    let key = name_key(group);
    let group = dataset
        .groups()
        .into_iter()
        .find(|g| name_key(g) == key)
        .ok_or_else(|| SwapError::UnknownGroup(group.trim().to_string()))?;

    let foods = dataset.foods_in_group(group);
    if json {
        println!("{}", serde_json::to_string_pretty(&foods)?);
    } else {
        display_food_list(&foods, group);
    }

    Ok(())
}

/// One substitution from command-line arguments.
fn cmd_swap(dataset: &FoodDataset, from: &str, grams: f64, to: &str, json: bool) -> Result<()> {
    let all: Vec<_> = dataset.records().iter().collect();
    let source = resolve_food(&all, from)?;
    let target = resolve_food(&dataset.foods_in_group(&source.group), to)
        .or_else(|_| resolve_food(&all, to))?;

    let request = SubstitutionRequest::new(&source.name, grams, &target.name);
    let result = substitute(dataset, &request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_result(&result);
    }

    Ok(())
}

/// Group, current food, quantity, new food; repeat until the user stops.
fn cmd_interactive(dataset: &FoodDataset) -> Result<()> {
    let groups = dataset.groups();
    if groups.is_empty() {
        println!("Dataset has no foods.");
        return Ok(());
    }

    println!("Loaded {} foods in {} groups", dataset.len(), groups.len());
    println!();

    loop {
        let group = prompt_group(&groups)?;
        let foods = dataset.foods_in_group(group);

        if foods.len() < 2 {
            println!("Group '{}' needs at least two foods to swap.", group);
        } else {
            let source = prompt_food("Current food", &foods)?;
            let grams = prompt_quantity()?;
            println!("Total: {} kcal", truncate_for_display(source.kcal_for(grams)));

            let target = prompt_food("New food", &dataset.substitutes_for(source))?;

            match compute_equivalence(source, grams, target) {
                Ok(result) => display_result(&result),
                Err(e @ SwapError::ZeroCalorieTarget(_)) => eprintln!("Error: {}", e),
                Err(e) => return Err(e),
            }
        }

        if !prompt_yes_no("Another substitution?", true)? {
            break;
        }
    }

    Ok(())
}
