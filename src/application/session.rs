use tracing::{debug, info, warn};

use crate::domain::{BudgetLedger, Expense, ExpenseId, LedgerSnapshot};

use super::validation::{parse_budget, parse_expense, parse_expense_id};
use super::{AppError, MSG_EXPENSE_ADDED, UiProjection};

/// A user action captured by the display side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    InitialBudget { raw: String },
    AddExpense { raw_name: String, raw_amount: String },
    DeleteExpense { id: ExpenseId },
}

/// Controller for one budgeting session.
///
/// Owns the ledger exclusively. Every request runs a full
/// validate -> mutate -> notify cycle before returning; on failure the
/// projection gets a validation message and the ledger is left as it was.
pub struct BudgetSession<P> {
    ledger: Option<BudgetLedger>,
    projection: P,
}

impl<P: UiProjection> BudgetSession<P> {
    pub fn new(projection: P) -> Self {
        Self {
            ledger: None,
            projection,
        }
    }

    /// Dispatch a captured intent.
    pub fn handle(&mut self, intent: Intent) -> Result<(), AppError> {
        debug!(?intent, "handling intent");
        match intent {
            Intent::InitialBudget { raw } => self.request_initial_budget(&raw).map(|_| ()),
            Intent::AddExpense {
                raw_name,
                raw_amount,
            } => self
                .request_add_expense(&raw_name, &raw_amount)
                .map(|_| ()),
            Intent::DeleteExpense { id } => self.request_delete_expense(id).map(|_| ()),
        }
    }

    /// Create the ledger from the user's budget entry.
    /// An invalid entry leaves the session without a ledger; the caller should ask again.
    pub fn request_initial_budget(&mut self, raw: &str) -> Result<LedgerSnapshot, AppError> {
        if self.ledger.is_some() {
            return Err(reject(
                &mut self.projection,
                AppError::BudgetAlreadyInitialized,
            ));
        }

        let total_budget = parse_budget(raw).map_err(|e| reject(&mut self.projection, e))?;
        let ledger = BudgetLedger::new(total_budget)
            .map_err(|e| reject(&mut self.projection, e.into()))?;

        let snapshot = ledger.snapshot();
        info!(total_budget, "budget initialized");
        self.projection.on_budget_initialized(&snapshot);
        self.projection
            .on_remaining_changed(ledger.remaining(), ledger.severity());
        self.ledger = Some(ledger);

        Ok(snapshot)
    }

    pub fn request_add_expense(
        &mut self,
        raw_name: &str,
        raw_amount: &str,
    ) -> Result<Expense, AppError> {
        let Some(ledger) = self.ledger.as_mut() else {
            return Err(reject(&mut self.projection, AppError::BudgetNotInitialized));
        };

        let (name, amount_cents) =
            parse_expense(raw_name, raw_amount).map_err(|e| reject(&mut self.projection, e))?;
        let expense = ledger
            .add_expense(&name, amount_cents)
            .map_err(|e| reject(&mut self.projection, e.into()))?;

        let severity = ledger.severity();
        info!(
            id = expense.id,
            amount_cents,
            remaining = ledger.remaining(),
            %severity,
            "expense added"
        );
        self.projection.on_info(MSG_EXPENSE_ADDED);
        self.projection.on_expense_list_changed(ledger.expenses());
        self.projection
            .on_remaining_changed(ledger.remaining(), severity);

        Ok(expense)
    }

    /// Remove an expense. Unknown ids are a silent no-op and produce no notifications.
    pub fn request_delete_expense(&mut self, id: ExpenseId) -> Result<Option<Expense>, AppError> {
        let Some(ledger) = self.ledger.as_mut() else {
            return Err(reject(&mut self.projection, AppError::BudgetNotInitialized));
        };

        let Some(removed) = ledger.remove_expense(id) else {
            debug!(id, "delete of unknown expense ignored");
            return Ok(None);
        };

        let severity = ledger.severity();
        info!(
            id,
            amount_cents = removed.amount_cents,
            remaining = ledger.remaining(),
            %severity,
            "expense removed"
        );
        self.projection.on_expense_list_changed(ledger.expenses());
        self.projection
            .on_remaining_changed(ledger.remaining(), severity);

        Ok(Some(removed))
    }

    /// Same as [`request_delete_expense`](Self::request_delete_expense) for an id typed by the user.
    pub fn request_delete_expense_raw(&mut self, raw_id: &str) -> Result<Option<Expense>, AppError> {
        let id = parse_expense_id(raw_id).map_err(|e| reject(&mut self.projection, e))?;
        self.request_delete_expense(id)
    }

    pub fn is_initialized(&self) -> bool {
        self.ledger.is_some()
    }

    pub fn snapshot(&self) -> Option<LedgerSnapshot> {
        self.ledger.as_ref().map(BudgetLedger::snapshot)
    }

    pub fn projection(&self) -> &P {
        &self.projection
    }

    pub fn projection_mut(&mut self) -> &mut P {
        &mut self.projection
    }

}

fn reject<P: UiProjection>(projection: &mut P, err: AppError) -> AppError {
    warn!(error = %err, "rejected input");
    projection.on_validation_error(&err.to_string());
    err
}
