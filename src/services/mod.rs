pub mod query;
pub mod recalculation;
pub mod server;
pub mod setup;

pub use query::QueryService;
pub use recalculation::{RecalculationService, RecalculationSummary, SkippedPlayer};
