//! Order record types for Comanda.
//!
//! An order is a persisted snapshot of a completed ordering conversation:
//! the non-system transcript, a server-assigned timestamp, and a status
//! that is always initialized to pending. The store is append-only;
//! status transitions are handled by an external kitchen workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::llm::Message;

/// Lifecycle status of an order.
///
/// Maps to the CHECK constraint in the SQLite schema:
/// `CHECK (status IN ('pending'))`. This system only ever writes
/// `pending`; later transitions live outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            other => Err(format!("invalid order status: '{other}'")),
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

/// A persisted order row.
///
/// `id` is assigned by SQLite (auto-increment). The transcript excludes
/// the system message and preserves role and content in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub transcript: Vec<Message>,
    pub status: OrderStatus,
}
