use crate::domain::{Cents, Expense, LedgerSnapshot, Severity};

/// Display side of a budget session.
///
/// A projection only ever sees borrowed, immutable views of the ledger. It can
/// render to a terminal, record notifications for tests, or ignore them.
pub trait UiProjection {
    fn on_budget_initialized(&mut self, snapshot: &LedgerSnapshot);
    fn on_expense_list_changed(&mut self, expenses: &[Expense]);
    fn on_remaining_changed(&mut self, remaining: Cents, severity: Severity);
    fn on_validation_error(&mut self, message: &str);
    fn on_info(&mut self, message: &str);
}

impl<P: UiProjection + ?Sized> UiProjection for &mut P {
    fn on_budget_initialized(&mut self, snapshot: &LedgerSnapshot) {
        (**self).on_budget_initialized(snapshot)
    }

    fn on_expense_list_changed(&mut self, expenses: &[Expense]) {
        (**self).on_expense_list_changed(expenses)
    }

    fn on_remaining_changed(&mut self, remaining: Cents, severity: Severity) {
        (**self).on_remaining_changed(remaining, severity)
    }

    fn on_validation_error(&mut self, message: &str) {
        (**self).on_validation_error(message)
    }

    fn on_info(&mut self, message: &str) {
        (**self).on_info(message)
    }
}

/// An owned copy of one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    BudgetInitialized(LedgerSnapshot),
    ExpenseListChanged(Vec<Expense>),
    RemainingChanged { remaining: Cents, severity: Severity },
    ValidationError(String),
    Info(String),
}

/// Projection that keeps every notification it receives, in order.
/// Used to drive a session headless.
#[derive(Debug, Default)]
pub struct RecordingProjection {
    notifications: Vec<Notification>,
}

impl RecordingProjection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Return and clear everything recorded so far.
    pub fn take(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    pub fn last_remaining(&self) -> Option<(Cents, Severity)> {
        self.notifications.iter().rev().find_map(|n| match n {
            Notification::RemainingChanged {
                remaining,
                severity,
            } => Some((*remaining, *severity)),
            _ => None,
        })
    }

    pub fn errors(&self) -> Vec<&str> {
        self.notifications
            .iter()
            .filter_map(|n| match n {
                Notification::ValidationError(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl UiProjection for RecordingProjection {
    fn on_budget_initialized(&mut self, snapshot: &LedgerSnapshot) {
        self.notifications
            .push(Notification::BudgetInitialized(snapshot.clone()));
    }

    fn on_expense_list_changed(&mut self, expenses: &[Expense]) {
        self.notifications
            .push(Notification::ExpenseListChanged(expenses.to_vec()));
    }

    fn on_remaining_changed(&mut self, remaining: Cents, severity: Severity) {
        self.notifications.push(Notification::RemainingChanged {
            remaining,
            severity,
        });
    }

    fn on_validation_error(&mut self, message: &str) {
        self.notifications
            .push(Notification::ValidationError(message.to_string()));
    }

    fn on_info(&mut self, message: &str) {
        self.notifications.push(Notification::Info(message.to_string()));
    }
}
