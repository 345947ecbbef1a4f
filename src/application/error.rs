use thiserror::Error;

use crate::domain::LedgerError;

pub const MSG_BOTH_FIELDS_REQUIRED: &str = "Both fields are required";
pub const MSG_INVALID_AMOUNT: &str = "The amount entered is not valid";
pub const MSG_INVALID_BUDGET: &str = "The budget entered is not valid";
pub const MSG_TOO_PRECISE: &str = "Amounts can have at most two decimal places";
pub const MSG_EXPENSE_ADDED: &str = "Expense added successfully";

/// User-input failures. All of them are recovered at the session boundary:
/// they are reported to the projection and leave the ledger unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("{0}")]
    InvalidBudget(String),

    #[error("{0}")]
    InvalidExpense(String),

    #[error("Invalid expense id: {0}")]
    InvalidExpenseId(String),

    #[error("No budget has been set yet")]
    BudgetNotInitialized,

    #[error("The budget has already been set for this session")]
    BudgetAlreadyInitialized,
}

impl AppError {
    /// True when the session has to start over (no ledger could be created).
    pub fn requires_restart(&self) -> bool {
        matches!(self, AppError::InvalidBudget(_))
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InvalidBudget { .. } => AppError::InvalidBudget(MSG_INVALID_BUDGET.into()),
            LedgerError::BlankExpenseName => {
                AppError::InvalidExpense(MSG_BOTH_FIELDS_REQUIRED.into())
            }
            LedgerError::NonPositiveAmount { .. } | LedgerError::AmountOutOfRange { .. } => {
                AppError::InvalidExpense(MSG_INVALID_AMOUNT.into())
            }
        }
    }
}
