mod food;
mod substitution;

pub use food::{name_key, scale_per_100g, FoodRecord};
pub use substitution::{
    truncate_for_display, NutrientRow, SideSummary, SubstitutionRequest, SubstitutionResult,
};
