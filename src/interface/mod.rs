pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_food, prompt_group, prompt_quantity, prompt_yes_no, resolve_food, suggest_names,
};
pub use render::{display_comparison, display_food_list, display_groups, display_result};
