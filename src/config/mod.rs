pub mod leagues;
pub mod settings;

pub use settings::{database_path, AppConfig, EventWeights, ScoringSettings, ServerSettings};
