use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::calculator::constants::{DATASET_ENV_VAR, DEFAULT_DATASET_PATH};
use crate::dataset::LoadPolicy;

/// kcal_swap — find how much of one food matches the calories of another in the same group.
#[derive(Parser, Debug)]
#[command(name = "kcal_swap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food table (CSV, or JSON with a .json extension).
    #[arg(short, long, global = true, env = DATASET_ENV_VAR, default_value = DEFAULT_DATASET_PATH)]
    pub file: PathBuf,

    /// Leave out malformed rows instead of failing the whole load.
    #[arg(long, global = true)]
    pub skip_malformed: bool,
}

impl Cli {
    pub fn load_policy(&self) -> LoadPolicy {
        if self.skip_malformed {
            LoadPolicy::SkipMalformed
        } else {
            LoadPolicy::Strict
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pick group, foods and quantity interactively.
    Interactive,

    /// List food groups.
    Groups,

    /// List the foods of a group.
    Foods {
        /// Group name (case-insensitive).
        group: String,

        /// Print the foods as JSON, keyed by the table's column names.
        #[arg(long)]
        json: bool,
    },

    /// Compute one substitution.
    Swap {
        /// Food currently in the diet.
        #[arg(long)]
        from: String,

        /// Grams of the current food.
        #[arg(long, default_value_t = 100.0)]
        grams: f64,

        /// Food to eat instead.
        #[arg(long)]
        to: String,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}
