//! Order confirmation service.
//!
//! Validates the transcript and delegates to the repository. Failures
//! come back as values for the caller to report; a failed confirmation
//! never aborts the session and may be retried.

use tracing::info;

use comanda_types::error::OrderError;
use comanda_types::llm::Message;
use comanda_types::order::OrderRecord;

use super::repository::OrderRepository;

/// Confirms orders against an append-only repository.
pub struct OrderService<R: OrderRepository> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Record the conversation as a pending order.
    ///
    /// `transcript` must exclude the system message and contain at least
    /// one message; an empty conversation is rejected without touching
    /// the store.
    pub async fn confirm(&self, transcript: &[Message]) -> Result<OrderRecord, OrderError> {
        if transcript.is_empty() {
            return Err(OrderError::EmptyTranscript);
        }

        let record = self.repo.record(transcript).await?;
        info!(order_id = record.id, messages = transcript.len(), "order recorded");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use chrono::Utc;
    use comanda_types::error::RepositoryError;
    use comanda_types::order::OrderStatus;

    #[derive(Default)]
    struct InMemoryOrders {
        rows: Mutex<Vec<OrderRecord>>,
        fail: bool,
    }

    impl OrderRepository for InMemoryOrders {
        async fn record(&self, transcript: &[Message]) -> Result<OrderRecord, RepositoryError> {
            if self.fail {
                return Err(RepositoryError::Query("disk full".to_string()));
            }
            let mut rows = self.rows.lock().unwrap();
            let record = OrderRecord {
                id: rows.len() as i64 + 1,
                created_at: Utc::now(),
                transcript: transcript.to_vec(),
                status: OrderStatus::Pending,
            };
            rows.push(record.clone());
            Ok(record)
        }

        async fn get(&self, id: i64) -> Result<Option<OrderRecord>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == id)
                .cloned())
        }

        async fn list(&self, _limit: Option<i64>) -> Result<Vec<OrderRecord>, RepositoryError> {
            Ok(self.rows.lock().unwrap().clone())
        }
    }

    #[tokio::test]
    async fn test_empty_transcript_rejected_without_row() {
        let service = OrderService::new(InMemoryOrders::default());
        let err = service.confirm(&[]).await.unwrap_err();
        assert!(matches!(err, OrderError::EmptyTranscript));
        assert!(service.repo().list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_confirm_writes_exactly_one_row() {
        let service = OrderService::new(InMemoryOrders::default());
        let transcript = vec![
            Message::user("Dos tacos"),
            Message::assistant("Anotado: dos tacos, $10."),
        ];

        let record = service.confirm(&transcript).await.unwrap();
        assert_eq!(record.status, OrderStatus::Pending);
        assert_eq!(record.transcript, transcript);

        let rows = service.repo().list(None).await.unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn test_storage_failure_surfaces_as_value() {
        let repo = InMemoryOrders {
            fail: true,
            ..Default::default()
        };
        let service = OrderService::new(repo);
        let err = service
            .confirm(&[Message::user("Una agua")])
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::Storage(_)));
    }
}
