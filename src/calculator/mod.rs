pub mod constants;
pub mod equivalence;

pub use constants::*;
pub use equivalence::{compute_equivalence, substitute};
