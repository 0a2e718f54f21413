pub mod aggregator;
pub mod filter;
pub mod pagination;

pub use aggregator::{rank_players, RankingEntry, RankingView};
pub use filter::{FilterParams, RankingFilter};
pub use pagination::Pagination;
