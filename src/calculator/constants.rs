/// Dataset column holding the food name.
pub const COL_NAME: &str = "Alimento";

/// Dataset column holding the food group.
pub const COL_GROUP: &str = "Grupo";

/// Dataset column holding kcal per 100 g.
pub const COL_KCAL: &str = "Kcal";

/// Optional macronutrient columns, grams per 100 g.
pub const COL_CARBS: &str = "Carbo";
pub const COL_PROTEIN: &str = "Prot";
pub const COL_FAT: &str = "Gord";

/// Columns every dataset must carry.
pub const REQUIRED_COLUMNS: [&str; 3] = [COL_NAME, COL_GROUP, COL_KCAL];

/// Default dataset path when neither `--file` nor the env var is set.
pub const DEFAULT_DATASET_PATH: &str = "tabela_alimentos.csv";

/// Environment variable overriding the dataset path.
pub const DATASET_ENV_VAR: &str = "KCAL_SWAP_DATASET";

/// Quantity pre-filled in the interactive prompt.
pub const DEFAULT_QUANTITY_GRAMS: u32 = 100;

/// Minimum Jaro-Winkler similarity for a name suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Maximum number of suggestions offered for an unknown name.
pub const MAX_SUGGESTIONS: usize = 5;
