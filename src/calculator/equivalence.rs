use tracing::debug;

use crate::dataset::FoodDataset;
use crate::error::{Result, SwapError};
use crate::models::{FoodRecord, SideSummary, SubstitutionRequest, SubstitutionResult};

/// Compute how much of `target` matches the calories of `source_grams` of `source`.
///
/// `total_kcal = source.kcal / 100 * grams`, then
/// `target_grams = total_kcal / target.kcal * 100`. All values stay at full
/// precision; truncation happens only when rendering.
///
/// Fails with `InvalidQuantity` unless `source_grams` is finite and positive,
/// and with `ZeroCalorieTarget` when the target has no calories.
pub fn compute_equivalence(
    source: &FoodRecord,
    source_grams: f64,
    target: &FoodRecord,
) -> Result<SubstitutionResult> {
    if !source_grams.is_finite() || source_grams <= 0.0 {
        return Err(SwapError::InvalidQuantity(source_grams));
    }

    if target.kcal_per_100g == 0.0 {
        return Err(SwapError::ZeroCalorieTarget(target.name.clone()));
    }

    let source_total_kcal = source.kcal_for(source_grams);
    let target_grams = source_total_kcal / target.kcal_per_100g * 100.0;

    debug!(
        source = %source.name,
        target = %target.name,
        source_grams,
        source_total_kcal,
        target_grams,
        "computed equivalence"
    );

    Ok(SubstitutionResult {
        group: source.group.clone(),
        source_total_kcal,
        target_grams,
        source: side_summary(source, source_grams),
        target: side_summary(target, target_grams),
    })
}

/// Resolve a request against `dataset` and compute it.
///
/// Both names must exist, belong to the same group, and name different foods.
pub fn substitute(dataset: &FoodDataset, request: &SubstitutionRequest) -> Result<SubstitutionResult> {
    let source = dataset.require(&request.source)?;
    let target = dataset
        .find_in_group(&source.group, &request.target)
        .map_or_else(|| dataset.require(&request.target), Ok)?;

    if source.group != target.group {
        return Err(SwapError::GroupMismatch {
            source_group: source.group.clone(),
            target_group: target.group.clone(),
        });
    }

    if source.key() == target.key() {
        return Err(SwapError::SameFood(source.name.clone()));
    }

    compute_equivalence(source, request.source_grams, target)
}

fn side_summary(food: &FoodRecord, grams: f64) -> SideSummary {
    SideSummary {
        name: food.name.clone(),
        grams,
        kcal: food.kcal_for(grams),
        carbs: food.carbs_for(grams),
        protein: food.protein_for(grams),
        fat: food.fat_for(grams),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rice() -> FoodRecord {
        FoodRecord::new("Rice", "Grains", 130.0).with_macros(28.0, 2.7, 0.3)
    }

    fn potato() -> FoodRecord {
        FoodRecord::new("Potato", "Grains", 77.0).with_macros(17.0, 2.0, 0.1)
    }

    #[test]
    fn test_rice_to_potato() {
        let result = compute_equivalence(&rice(), 100.0, &potato()).unwrap();

        assert!((result.source_total_kcal - 130.0).abs() < 1e-9);
        assert!((result.target_grams - 130.0 / 77.0 * 100.0).abs() < 1e-9);
        assert_eq!(result.display_target_grams(), 168);
        assert_eq!(result.display_source_kcal(), 130);
        assert_eq!(result.group, "Grains");
    }

    #[test]
    fn test_target_calories_match_source() {
        let result = compute_equivalence(&rice(), 137.0, &potato()).unwrap();
        assert!((result.target.kcal - result.source.kcal).abs() < 1e-9);
    }

    #[test]
    fn test_same_record_round_trips() {
        let food = rice();
        let result = compute_equivalence(&food, 250.0, &food).unwrap();
        assert!((result.target_grams - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_calorie_target() {
        let water = FoodRecord::new("Water", "Grains", 0.0);
        match compute_equivalence(&rice(), 100.0, &water) {
            Err(SwapError::ZeroCalorieTarget(name)) => assert_eq!(name, "Water"),
            other => panic!("expected ZeroCalorieTarget, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_calorie_source_gives_zero_target() {
        let water = FoodRecord::new("Water", "Grains", 0.0);
        let result = compute_equivalence(&water, 100.0, &rice()).unwrap();
        assert_eq!(result.target_grams, 0.0);
    }

    #[test]
    fn test_rejects_non_positive_quantity() {
        for grams in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                compute_equivalence(&rice(), grams, &potato()),
                Err(SwapError::InvalidQuantity(_))
            ));
        }
    }

    #[test]
    fn test_macros_scale_with_quantity() {
        let single = compute_equivalence(&rice(), 80.0, &potato()).unwrap();
        let double = compute_equivalence(&rice(), 160.0, &potato()).unwrap();

        assert!((double.source.carbs - 2.0 * single.source.carbs).abs() < 1e-9);
        assert!((double.source.protein - 2.0 * single.source.protein).abs() < 1e-9);
        assert!((double.source.fat - 2.0 * single.source.fat).abs() < 1e-9);
        assert!((double.target.carbs - 2.0 * single.target.carbs).abs() < 1e-9);
    }

    #[test]
    fn test_substitute_checks_request() {
        let dataset = FoodDataset::new(vec![
            rice(),
            potato(),
            FoodRecord::new("Chicken", "Proteins", 165.0),
        ]);

        let ok = substitute(&dataset, &SubstitutionRequest::new("rice", 100.0, "POTATO")).unwrap();
        assert_eq!(ok.target.name, "Potato");

        assert!(matches!(
            substitute(&dataset, &SubstitutionRequest::new("Rice", 100.0, "Chicken")),
            Err(SwapError::GroupMismatch { .. })
        ));
        assert!(matches!(
            substitute(&dataset, &SubstitutionRequest::new("Rice", 100.0, "rice")),
            Err(SwapError::SameFood(_))
        ));
        assert!(matches!(
            substitute(&dataset, &SubstitutionRequest::new("Bread", 100.0, "Rice")),
            Err(SwapError::FoodNotFound(_))
        ));
    }
}
