use chrono::{DateTime, Utc};

use super::Cents;

/// Expense ids are handed out by the owning ledger from a monotonic counter.
pub type ExpenseId = u64;

/// A single recorded expense. Never edited in place; removal drops the whole record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub id: ExpenseId,
    pub name: String,
    pub amount_cents: Cents,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub(crate) fn new(id: ExpenseId, name: String, amount_cents: Cents) -> Self {
        Self {
            id,
            name,
            amount_cents,
            created_at: Utc::now(),
        }
    }
}
