pub mod models;
pub mod position;

pub use models::*;
pub use position::PositionCategory;
