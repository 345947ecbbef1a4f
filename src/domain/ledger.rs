use super::{Cents, Expense, ExpenseId, Severity, format_cents};

/// Compute the total spent from a list of expenses.
/// Returns `None` if the sum does not fit in `Cents`.
pub fn total_spent(expenses: &[Expense]) -> Option<Cents> {
    expenses
        .iter()
        .try_fold(0 as Cents, |total, expense| total.checked_add(expense.amount_cents))
}

/// The bookkeeping for one session: a fixed total budget and the expenses
/// recorded against it.
///
/// `remaining` is always `total_budget - sum(expenses)`. It is recomputed
/// from the full list after every mutation, never adjusted incrementally.
#[derive(Debug, Clone)]
pub struct BudgetLedger {
    total_budget: Cents,
    spent: Cents,
    remaining: Cents,
    expenses: Vec<Expense>,
    next_id: ExpenseId,
}

/// Read-only copy of ledger state handed to the display layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub total_budget: Cents,
    pub spent: Cents,
    pub remaining: Cents,
    pub expenses: Vec<Expense>,
}

impl LedgerSnapshot {
    pub fn severity(&self) -> Severity {
        Severity::classify(self.total_budget, self.remaining)
    }
}

impl BudgetLedger {
    /// Create a ledger for a positive total budget.
    pub fn new(total_budget: Cents) -> Result<Self, LedgerError> {
        if total_budget <= 0 {
            return Err(LedgerError::InvalidBudget { total_budget });
        }

        Ok(Self {
            total_budget,
            spent: 0,
            remaining: total_budget,
            expenses: Vec::new(),
            next_id: 1,
        })
    }

    /// Record a new expense and recompute the remaining balance.
    /// The name is trimmed; blank names and non-positive amounts are rejected
    /// without touching the ledger.
    pub fn add_expense(&mut self, name: &str, amount_cents: Cents) -> Result<Expense, LedgerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::BlankExpenseName);
        }
        if amount_cents <= 0 {
            return Err(LedgerError::NonPositiveAmount { amount_cents });
        }
        // Reject anything that would make the derived balance unrepresentable.
        self.spent
            .checked_add(amount_cents)
            .and_then(|spent| self.total_budget.checked_sub(spent))
            .ok_or(LedgerError::AmountOutOfRange { amount_cents })?;

        let expense = Expense::new(self.next_id, name.to_string(), amount_cents);
        self.next_id += 1;
        self.expenses.push(expense.clone());
        self.recalculate();

        Ok(expense)
    }

    /// Remove the expense with the given id, if present.
    /// Removing an unknown id is a no-op.
    pub fn remove_expense(&mut self, id: ExpenseId) -> Option<Expense> {
        let position = self.expenses.iter().position(|e| e.id == id)?;
        let removed = self.expenses.remove(position);
        self.recalculate();
        Some(removed)
    }

    fn recalculate(&mut self) {
        // add_expense guarantees the running total fits, and removals only shrink it.
        self.spent = total_spent(&self.expenses).unwrap_or(Cents::MAX);
        self.remaining = self.total_budget.saturating_sub(self.spent);
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            total_budget: self.total_budget,
            spent: self.spent,
            remaining: self.remaining,
            expenses: self.expenses.clone(),
        }
    }

    pub fn total_budget(&self) -> Cents {
        self.total_budget
    }

    pub fn spent(&self) -> Cents {
        self.spent
    }

    pub fn remaining(&self) -> Cents {
        self.remaining
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn severity(&self) -> Severity {
        Severity::classify(self.total_budget, self.remaining)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    InvalidBudget { total_budget: Cents },
    BlankExpenseName,
    NonPositiveAmount { amount_cents: Cents },
    AmountOutOfRange { amount_cents: Cents },
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::InvalidBudget { total_budget } => {
                write!(
                    f,
                    "Budget must be positive, got {}",
                    format_cents(*total_budget)
                )
            }
            LedgerError::BlankExpenseName => write!(f, "Expense name must not be empty"),
            LedgerError::NonPositiveAmount { amount_cents } => {
                write!(
                    f,
                    "Expense amount must be positive, got {}",
                    format_cents(*amount_cents)
                )
            }
            LedgerError::AmountOutOfRange { amount_cents } => {
                write!(
                    f,
                    "Expense of {} would push the total spent out of range",
                    format_cents(*amount_cents)
                )
            }
        }
    }
}

impl std::error::Error for LedgerError {}
