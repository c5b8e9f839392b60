use serde::Serialize;

/// One row of the food-composition table. All nutrient values are per 100 g.
///
/// Missing macronutrient cells load as 0. Serializes with the table's column names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodRecord {
    #[serde(rename = "Alimento")]
    pub name: String,

    #[serde(rename = "Grupo")]
    pub group: String,

    #[serde(rename = "Kcal")]
    pub kcal_per_100g: f64,

    #[serde(rename = "Carbo")]
    pub carbs_per_100g: f64,

    #[serde(rename = "Prot")]
    pub protein_per_100g: f64,

    #[serde(rename = "Gord")]
    pub fat_per_100g: f64,
}

impl FoodRecord {
    pub fn new(name: &str, group: &str, kcal_per_100g: f64) -> Self {
        Self {
            name: name.to_string(),
            group: group.to_string(),
            kcal_per_100g,
            carbs_per_100g: 0.0,
            protein_per_100g: 0.0,
            fat_per_100g: 0.0,
        }
    }

    /// Builder-style setter for the three macros (carbs, protein, fat).
    pub fn with_macros(mut self, carbs: f64, protein: f64, fat: f64) -> Self {
        self.carbs_per_100g = carbs;
        self.protein_per_100g = protein;
        self.fat_per_100g = fat;
        self
    }

    /// Kilocalories in `grams` of this food.
    #[inline]
    pub fn kcal_for(&self, grams: f64) -> f64 {
        scale_per_100g(self.kcal_per_100g, grams)
    }

    #[inline]
    pub fn carbs_for(&self, grams: f64) -> f64 {
        scale_per_100g(self.carbs_per_100g, grams)
    }

    #[inline]
    pub fn protein_for(&self, grams: f64) -> f64 {
        scale_per_100g(self.protein_per_100g, grams)
    }

    #[inline]
    pub fn fat_for(&self, grams: f64) -> f64 {
        scale_per_100g(self.fat_per_100g, grams)
    }

    /// Non-negative, finite nutrient values and non-blank name and group.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.group.trim().is_empty()
            && [
                self.kcal_per_100g,
                self.carbs_per_100g,
                self.protein_per_100g,
                self.fat_per_100g,
            ]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }

    /// Canonical key for lookups (trimmed, lowercase name).
    pub fn key(&self) -> String {
        name_key(&self.name)
    }
}

/// Scale a per-100 g value to an arbitrary quantity.
#[inline]
pub fn scale_per_100g(per_100g: f64, grams: f64) -> f64 {
    per_100g / 100.0 * grams
}

/// Case- and whitespace-insensitive form of a food or group name.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}
