//! SQLite-backed persistence.

pub mod order;
pub mod pool;

pub use order::SqliteOrderRepository;
pub use pool::DatabasePool;
