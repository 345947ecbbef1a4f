// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use tally::application::{BudgetSession, RecordingProjection};
use tally::domain::{BudgetLedger, Cents};

/// Helper to create a headless session with the budget already set.
/// Notifications from initialization are cleared.
pub fn test_session(raw_budget: &str) -> Result<BudgetSession<RecordingProjection>> {
    let mut session = BudgetSession::new(RecordingProjection::new());
    session.request_initial_budget(raw_budget)?;
    session.projection_mut().take();
    Ok(session)
}

/// Test fixture: ledgers with a typical month of spending
pub struct StandardExpenses;

impl StandardExpenses {
    /// 1000.00 budget with rent, groceries and coffee recorded (remaining 245.50)
    pub fn month() -> Result<BudgetLedger> {
        let mut ledger = BudgetLedger::new(100000)?;
        ledger.add_expense("Rent", 60000)?;
        ledger.add_expense("Groceries", 15000)?;
        ledger.add_expense("Coffee", 450)?;
        Ok(ledger)
    }

    /// Sum of amounts as recorded in the ledger
    pub fn sum(ledger: &BudgetLedger) -> Cents {
        ledger.expenses().iter().map(|e| e.amount_cents).sum()
    }
}
