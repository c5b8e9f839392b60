mod cache;
mod catalog;
mod loader;

pub use cache::{is_loaded, shared_dataset};
pub use catalog::{foods_in_group, groups_of, FoodDataset};
pub use loader::{
    load_dataset, load_dataset_with, read_csv_dataset, read_json_dataset, read_spreadsheet_dataset,
    LoadPolicy,
};
