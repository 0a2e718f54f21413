pub mod calculator;
pub mod validation;

pub use calculator::calculate_breakdown;
pub use validation::{validate_multiplier, validate_statistics};
