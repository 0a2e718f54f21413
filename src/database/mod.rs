pub mod connection;
pub mod demo;
pub mod leagues;
pub mod players;
pub mod setup;
pub mod source;
pub mod statistics;
pub mod teams;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use source::SqliteStatisticsSource;
