use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::calculator::constants::{
    DEFAULT_QUANTITY_GRAMS, MAX_SUGGESTIONS, SUGGESTION_THRESHOLD,
};
use crate::error::{Result, SwapError};
use crate::models::{name_key, FoodRecord};

/// Prompt for a food group. Returns the chosen group name.
pub fn prompt_group<'a>(groups: &[&'a str]) -> Result<&'a str> {
    if groups.is_empty() {
        return Err(SwapError::InvalidInput("Dataset has no groups".to_string()));
    }

    let selection = Select::new()
        .with_prompt("Select the food group")
        .items(groups)
        .default(0)
        .interact()?;

    Ok(groups[selection])
}

/// Prompt for one food out of `foods`.
pub fn prompt_food<'a>(prompt: &str, foods: &[&'a FoodRecord]) -> Result<&'a FoodRecord> {
    if foods.is_empty() {
        return Err(SwapError::InvalidInput("No foods to choose from".to_string()));
    }

    let names: Vec<&str> = foods.iter().map(|f| f.name.as_str()).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&names)
        .default(0)
        .interact()?;

    Ok(foods[selection])
}

/// Prompt for a quantity in whole grams; re-asks until it is a positive integer.
pub fn prompt_quantity() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Quantity (g)")
        .default(DEFAULT_QUANTITY_GRAMS.to_string())
        .validate_with(|text: &String| -> std::result::Result<(), &'static str> {
            match text.trim().parse::<u32>() {
                Ok(grams) if grams > 0 => Ok(()),
                _ => Err("Enter a whole number of grams greater than 0"),
            }
        })
        .interact_text()?;

    input
        .trim()
        .parse::<u32>()
        .map(f64::from)
        .map_err(|_| SwapError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Match `input` against `foods`: exact (case-insensitive) first.
///
/// When nothing matches exactly, the error message lists the closest names.
pub fn resolve_food<'a>(foods: &[&'a FoodRecord], input: &str) -> Result<&'a FoodRecord> {
    let key = name_key(input);
    if let Some(food) = foods.iter().copied().find(|f| f.key() == key) {
        return Ok(food);
    }

    let suggestions = suggest_names(foods, input);
    let message = if suggestions.is_empty() {
        input.trim().to_string()
    } else {
        format!("{} (did you mean: {}?)", input.trim(), suggestions.join(", "))
    };

    Err(SwapError::FoodNotFound(message))
}

/// Names similar to `input`, best first.
pub fn suggest_names(foods: &[&FoodRecord], input: &str) -> Vec<String> {
    let key = name_key(input);

    let mut candidates: Vec<(&FoodRecord, f64)> = foods
        .iter()
        .map(|f| (*f, jaro_winkler(&f.key(), &key)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    candidates
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(f, _)| f.name.clone())
        .collect()
}
