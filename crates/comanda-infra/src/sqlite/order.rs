//! SQLite order repository implementation.
//!
//! Implements `OrderRepository` from `comanda-core` using sqlx with the
//! split read/write pool: raw queries, a private Row struct, JSON-encoded
//! transcripts. Insert-only by construction; there is no UPDATE or
//! DELETE statement in this file.

use chrono::{DateTime, Utc};
use sqlx::Row;

use comanda_core::order::repository::OrderRepository;
use comanda_types::error::RepositoryError;
use comanda_types::llm::Message;
use comanda_types::order::{OrderRecord, OrderStatus};

use super::pool::DatabasePool;

/// SQLite-backed implementation of `OrderRepository`.
pub struct SqliteOrderRepository {
    pool: DatabasePool,
}

impl SqliteOrderRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Private Row type for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

struct OrderRow {
    id: i64,
    created_at: String,
    transcript: String,
    status: String,
}

impl OrderRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            created_at: row.try_get("created_at")?,
            transcript: row.try_get("transcript")?,
            status: row.try_get("status")?,
        })
    }

    fn into_record(self) -> Result<OrderRecord, RepositoryError> {
        let created_at = parse_datetime(&self.created_at)?;
        let transcript: Vec<Message> = serde_json::from_str(&self.transcript)
            .map_err(|e| RepositoryError::Query(format!("invalid transcript encoding: {e}")))?;
        let status: OrderStatus = self
            .status
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;

        Ok(OrderRecord {
            id: self.id,
            created_at,
            transcript,
            status,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

// ---------------------------------------------------------------------------
// OrderRepository implementation
// ---------------------------------------------------------------------------

impl OrderRepository for SqliteOrderRepository {
    async fn record(&self, transcript: &[Message]) -> Result<OrderRecord, RepositoryError> {
        let created_at = Utc::now();
        let encoded = serde_json::to_string(transcript)
            .map_err(|e| RepositoryError::Query(format!("transcript encoding: {e}")))?;
        let status = OrderStatus::Pending;

        let result = sqlx::query(
            r#"INSERT INTO orders (created_at, transcript, status) VALUES (?, ?, ?)"#,
        )
        .bind(created_at.to_rfc3339())
        .bind(&encoded)
        .bind(status.to_string())
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(OrderRecord {
            id: result.last_insert_rowid(),
            created_at,
            transcript: transcript.to_vec(),
            status,
        })
    }

    async fn get(&self, id: i64) -> Result<Option<OrderRecord>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM orders WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let order_row =
                    OrderRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(order_row.into_record()?))
            }
            None => Ok(None),
        }
    }

    async fn list(&self, limit: Option<i64>) -> Result<Vec<OrderRecord>, RepositoryError> {
        let mut sql = String::from("SELECT * FROM orders ORDER BY id DESC");
        if let Some(limit) = limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            let order_row =
                OrderRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            records.push(order_row.into_record()?);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comanda_types::llm::MessageRole;

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    fn sample_transcript() -> Vec<Message> {
        vec![
            Message::user("Dos tacos al pastor y una agua"),
            Message::assistant("Anotado. Dos Tacos al pastor $5 y una Agua $1. Total $11."),
        ]
    }

    #[tokio::test]
    async fn test_record_assigns_incrementing_ids() {
        let repo = SqliteOrderRepository::new(test_pool().await);

        let first = repo.record(&sample_transcript()).await.unwrap();
        let second = repo.record(&sample_transcript()).await.unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_transcript_roundtrips_through_storage() {
        let repo = SqliteOrderRepository::new(test_pool().await);
        let transcript = sample_transcript();

        let stored = repo.record(&transcript).await.unwrap();
        let fetched = repo.get(stored.id).await.unwrap().unwrap();

        assert_eq!(fetched.transcript, transcript);
        assert_eq!(fetched.transcript[0].role, MessageRole::User);
        assert_eq!(fetched.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let repo = SqliteOrderRepository::new(test_pool().await);
        assert!(repo.get(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_most_recent_first_with_limit() {
        let repo = SqliteOrderRepository::new(test_pool().await);
        for _ in 0..3 {
            repo.record(&sample_transcript()).await.unwrap();
        }

        let all = repo.list(None).await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all[0].id > all[1].id);

        let limited = repo.list(Some(2)).await.unwrap();
        assert_eq!(limited.len(), 2);
    }
}
