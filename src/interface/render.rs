use crate::dataset::FoodDataset;
use crate::models::{truncate_for_display, FoodRecord, SubstitutionResult};

/// Display the equivalent quantity followed by the nutrient comparison table.
pub fn display_result(result: &SubstitutionResult) {
    println!();
    println!("=== Equivalence ===");
    println!();
    println!(
        "  {} g of {}",
        result.display_target_grams(),
        result.target.name
    );
    println!(
        "  (equivalent to {} g of {}, {} kcal)",
        truncate_for_display(result.source.grams),
        result.source.name,
        result.display_source_kcal()
    );
    println!();

    display_comparison(result);
}

/// Display calories and macros of both sides, truncated to whole units.
pub fn display_comparison(result: &SubstitutionResult) {
    let source_header = format!(
        "{} ({}g)",
        result.source.name,
        truncate_for_display(result.source.grams)
    );
    let target_header = format!("{} ({}g)", result.target.name, result.display_target_grams());

    let rows = result.nutrient_rows();
    let label_width = rows.iter().map(|r| r.label.len()).max().unwrap_or(8).max(8);
    let source_width = source_header.len().max(6);
    let target_width = target_header.len().max(6);

    println!("--- Nutrition comparison ---");
    println!(
        "{:<lw$}  {:>sw$}  {:>tw$}",
        "Nutrient",
        source_header,
        target_header,
        lw = label_width,
        sw = source_width,
        tw = target_width
    );

    for row in &rows {
        let (source, target) = row.display_values();
        println!(
            "{:<lw$}  {:>sw$}  {:>tw$}",
            row.label,
            source,
            target,
            lw = label_width,
            sw = source_width,
            tw = target_width
        );
    }

    println!();
}

/// Display each group with its number of foods.
pub fn display_groups(dataset: &FoodDataset) {
    let groups = dataset.groups();
    if groups.is_empty() {
        println!("Dataset has no foods.");
        return;
    }

    println!();
    println!("=== Food groups ({}) ===", groups.len());
    println!();

    let width = groups.iter().map(|g| g.len()).max().unwrap_or(10);
    for group in groups {
        println!(
            "  {:<width$}  {:>3} foods",
            group,
            dataset.foods_in_group(group).len(),
            width = width
        );
    }

    println!();
}

/// Display a list of foods with their values per 100 g.
pub fn display_food_list(foods: &[&FoodRecord], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    let width = foods.iter().map(|f| f.name.len()).max().unwrap_or(10);
    for food in foods {
        println!(
            "  {:<width$} - {} kcal, C:{} P:{} F:{} (per 100 g)",
            food.name,
            food.kcal_per_100g,
            food.carbs_per_100g,
            food.protein_per_100g,
            food.fat_per_100g,
            width = width
        );
    }

    println!();
}
