//! OrderRepository trait definition.
//!
//! Append-only persistence for confirmed orders. The implementation
//! lives in comanda-infra (`SqliteOrderRepository`). Uses native async
//! fn in traits (RPITIT, Rust 2024 edition). There is deliberately no
//! update or delete: status transitions beyond pending belong to the
//! kitchen workflow, not this system.

use comanda_types::error::RepositoryError;
use comanda_types::llm::Message;
use comanda_types::order::OrderRecord;

/// Repository trait for the append-only order store.
pub trait OrderRepository: Send + Sync {
    /// Insert one order row with a server-assigned timestamp and pending
    /// status. Returns the stored record including its assigned id.
    fn record(
        &self,
        transcript: &[Message],
    ) -> impl std::future::Future<Output = Result<OrderRecord, RepositoryError>> + Send;

    /// Get an order by id.
    fn get(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<OrderRecord>, RepositoryError>> + Send;

    /// List orders, most recent first.
    fn list(
        &self,
        limit: Option<i64>,
    ) -> impl std::future::Future<Output = Result<Vec<OrderRecord>, RepositoryError>> + Send;
}
