use serde::Serialize;

/// A substitution to compute: swap `source_grams` of `source` for `target`.
///
/// Food names are resolved against a dataset; both must belong to the same
/// group and must differ.
#[derive(Debug, Clone, PartialEq)]
pub struct SubstitutionRequest {
    pub source: String,
    pub source_grams: f64,
    pub target: String,
}

impl SubstitutionRequest {
    pub fn new(source: &str, source_grams: f64, target: &str) -> Self {
        Self {
            source: source.to_string(),
            source_grams,
            target: target.to_string(),
        }
    }
}

/// One food at a given quantity, with its totals at that quantity.
///
/// Values keep full precision; use [`truncate_for_display`] when showing them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideSummary {
    pub name: String,
    pub grams: f64,
    pub kcal: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

/// A single line of the comparison table.
#[derive(Debug, Clone, PartialEq)]
pub struct NutrientRow {
    pub label: &'static str,
    pub source: f64,
    pub target: f64,
}

impl NutrientRow {
    pub fn display_values(&self) -> (i64, i64) {
        (
            truncate_for_display(self.source),
            truncate_for_display(self.target),
        )
    }
}

/// Output of an equivalence computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubstitutionResult {
    pub group: String,
    pub source_total_kcal: f64,
    pub target_grams: f64,
    pub source: SideSummary,
    pub target: SideSummary,
}

impl SubstitutionResult {
    /// Comparison rows in display order: calories, carbs, protein, fat.
    pub fn nutrient_rows(&self) -> Vec<NutrientRow> {
        vec![
            NutrientRow {
                label: "Calories (kcal)",
                source: self.source.kcal,
                target: self.target.kcal,
            },
            NutrientRow {
                label: "Carbohydrates (g)",
                source: self.source.carbs,
                target: self.target.carbs,
            },
            NutrientRow {
                label: "Protein (g)",
                source: self.source.protein,
                target: self.target.protein,
            },
            NutrientRow {
                label: "Fat (g)",
                source: self.source.fat,
                target: self.target.fat,
            },
        ]
    }

    pub fn display_target_grams(&self) -> i64 {
        truncate_for_display(self.target_grams)
    }

    pub fn display_source_kcal(&self) -> i64 {
        truncate_for_display(self.source_total_kcal)
    }
}

/// Values this close to the next whole unit count as that unit when truncating.
const DISPLAY_EPSILON: f64 = 1e-9;

/// Truncate toward zero to whole units. Presentation only.
///
/// A value a hair below an integer truncates to that integer. Plain `int()`
/// truncation would show the target side's 130 kcal as 129, because 130 kcal
/// carried through the division comes back as 129.99999999999997.
#[inline]
pub fn truncate_for_display(value: f64) -> i64 {
    let nearest = value.round();
    if (value - nearest).abs() < DISPLAY_EPSILON {
        nearest as i64
    } else {
        value.trunc() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_toward_zero() {
        assert_eq!(truncate_for_display(168.83), 168);
        assert_eq!(truncate_for_display(0.99), 0);
        assert_eq!(truncate_for_display(-1.7), -1);
        assert_eq!(truncate_for_display(42.0), 42);
        assert_eq!(truncate_for_display(129.999_999_999_999_97), 130);
        assert_eq!(truncate_for_display(129.999), 129);
    }

    #[test]
    fn test_rows_keep_full_precision() {
        let side = |name: &str, grams: f64| SideSummary {
            name: name.to_string(),
            grams,
            kcal: 130.9,
            carbs: 28.6,
            protein: 2.7,
            fat: 0.3,
        };
        let result = SubstitutionResult {
            group: "Grains".to_string(),
            source_total_kcal: 130.9,
            target_grams: 170.0,
            source: side("Rice", 100.7),
            target: side("Potato", 170.0),
        };

        let rows = result.nutrient_rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].label, "Calories (kcal)");
        assert!((rows[1].source - 28.6).abs() < 1e-9);
        assert_eq!(rows[1].display_values(), (28, 28));
        assert_eq!(rows[3].display_values(), (0, 0));
    }
}
