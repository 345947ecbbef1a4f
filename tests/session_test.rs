mod common;

use anyhow::Result;
use common::test_session;
use tally::application::{
    AppError, BudgetSession, Intent, Notification, RecordingProjection,
};
use tally::domain::Severity;

#[test]
fn test_full_session_flow() -> Result<()> {
    let mut session = BudgetSession::new(RecordingProjection::new());

    session.handle(Intent::InitialBudget {
        raw: "1000".into(),
    })?;
    session.handle(Intent::AddExpense {
        raw_name: "Rent".into(),
        raw_amount: "600".into(),
    })?;
    session.handle(Intent::AddExpense {
        raw_name: "Utilities".into(),
        raw_amount: "200".into(),
    })?;

    let projection = session.projection();
    assert_eq!(projection.last_remaining(), Some((20000, Severity::Critical)));
    assert!(projection.errors().is_empty());

    session.handle(Intent::DeleteExpense { id: 1 })?;
    assert_eq!(
        session.projection().last_remaining(),
        Some((80000, Severity::Healthy))
    );

    let snapshot = session.snapshot().expect("ledger should exist");
    assert_eq!(snapshot.expenses.len(), 1);
    assert_eq!(snapshot.expenses[0].name, "Utilities");

    Ok(())
}

#[test]
fn test_expense_list_is_rerendered_in_full() -> Result<()> {
    let mut session = test_session("500")?;
    let a = session.request_add_expense("A", "10")?;
    let b = session.request_add_expense("B", "20")?;
    session.projection_mut().take();

    session.request_delete_expense(a.id)?;

    let notifications = session.projection_mut().take();
    assert_eq!(
        notifications,
        vec![
            Notification::ExpenseListChanged(vec![b]),
            Notification::RemainingChanged {
                remaining: 48000,
                severity: Severity::Healthy
            },
        ]
    );

    Ok(())
}

#[test]
fn test_rejected_inputs_do_not_mutate() -> Result<()> {
    let mut session = test_session("100")?;
    session.request_add_expense("Lunch", "12")?;
    let before = session.snapshot();
    session.projection_mut().take();

    let attempts = [("", "5"), ("  ", "5"), ("X", ""), ("X", "abc"), ("X", "0"), ("X", "-5")];
    for (name, amount) in attempts {
        let err = session.request_add_expense(name, amount).unwrap_err();
        assert!(matches!(err, AppError::InvalidExpense(_)));
    }

    assert_eq!(session.snapshot(), before);
    assert_eq!(
        session.projection().errors(),
        vec![
            "Both fields are required",
            "Both fields are required",
            "The amount entered is not valid",
            "The amount entered is not valid",
            "The amount entered is not valid",
            "The amount entered is not valid",
        ]
    );

    Ok(())
}

#[test]
fn test_invalid_budget_restarts_session() {
    let mut session = BudgetSession::new(RecordingProjection::new());

    for raw in ["", "abc", "0", "-100"] {
        let err = session.request_initial_budget(raw).unwrap_err();
        assert!(err.requires_restart());
        assert!(session.snapshot().is_none());
    }

    // Intents that need a ledger are refused meanwhile
    assert_eq!(
        session.request_delete_expense(1),
        Err(AppError::BudgetNotInitialized)
    );
}

#[test]
fn test_delete_twice_notifies_once() -> Result<()> {
    let mut session = test_session("100")?;
    let expense = session.request_add_expense("Taxi", "30")?;
    session.projection_mut().take();

    assert!(session.request_delete_expense(expense.id)?.is_some());
    let after_first = session.projection_mut().take();
    assert_eq!(after_first.len(), 2);

    assert!(session.request_delete_expense(expense.id)?.is_none());
    assert!(session.projection().notifications().is_empty());
    assert_eq!(session.snapshot().map(|s| s.remaining), Some(10000));

    Ok(())
}

#[test]
fn test_fractional_amounts_are_exact() -> Result<()> {
    let mut session = test_session("0.30")?;
    session.request_add_expense("a", "0.10")?;
    session.request_add_expense("b", "0.20")?;

    let snapshot = session.snapshot().expect("ledger should exist");
    assert_eq!(snapshot.spent, 30);
    assert_eq!(snapshot.remaining, 0);
    assert_eq!(snapshot.severity(), Severity::Critical);

    Ok(())
}

#[test]
fn test_sub_cent_amount_is_rejected_not_rounded() -> Result<()> {
    let mut session = test_session("100")?;

    let err = session.request_add_expense("Gum", "0.001").unwrap_err();
    assert_eq!(
        err,
        AppError::InvalidExpense("Amounts can have at most two decimal places".into())
    );
    assert_eq!(session.snapshot().map(|s| s.remaining), Some(10000));
    assert!(session.snapshot().is_some_and(|s| s.expenses.is_empty()));

    Ok(())
}

#[test]
fn test_exponent_notation_amounts() -> Result<()> {
    let mut session = test_session("1e3")?;
    session.request_add_expense("Rent", "6e2")?;

    assert_eq!(
        session.projection().last_remaining(),
        Some((40000, Severity::Warning))
    );
    Ok(())
}
