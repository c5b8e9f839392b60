pub mod calculator;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod interface;
pub mod models;

pub use calculator::{compute_equivalence, substitute};
pub use dataset::{foods_in_group, groups_of, load_dataset, FoodDataset, LoadPolicy};
pub use error::{Result, SwapError};
pub use models::{FoodRecord, SubstitutionRequest, SubstitutionResult};
