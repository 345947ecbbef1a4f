//! Parsing of raw user input into ledger arguments.
//!
//! Nothing here touches the ledger; callers only mutate once validation passes.

use crate::domain::{Cents, ExpenseId, ParseCentsError, parse_cents};

use super::{
    AppError, MSG_BOTH_FIELDS_REQUIRED, MSG_INVALID_AMOUNT, MSG_INVALID_BUDGET, MSG_TOO_PRECISE,
};

/// Parse a total budget. Empty, non-numeric, zero and negative input are rejected,
/// and so are amounts finer than a cent.
pub fn parse_budget(raw: &str) -> Result<Cents, AppError> {
    match parse_cents(raw) {
        Ok(cents) if cents > 0 => Ok(cents),
        Err(ParseCentsError::TooPrecise) => Err(AppError::InvalidBudget(MSG_TOO_PRECISE.into())),
        _ => Err(AppError::InvalidBudget(MSG_INVALID_BUDGET.into())),
    }
}

/// Validate an expense entry, returning the trimmed name and the amount in cents.
///
/// A blank name is reported as missing fields. An empty amount is treated the
/// same as a non-numeric or non-positive one.
pub fn parse_expense(raw_name: &str, raw_amount: &str) -> Result<(String, Cents), AppError> {
    let name = raw_name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidExpense(MSG_BOTH_FIELDS_REQUIRED.into()));
    }

    match parse_cents(raw_amount) {
        Ok(cents) if cents > 0 => Ok((name.to_string(), cents)),
        Err(ParseCentsError::TooPrecise) => {
            Err(AppError::InvalidExpense(MSG_TOO_PRECISE.into()))
        }
        _ => Err(AppError::InvalidExpense(MSG_INVALID_AMOUNT.into())),
    }
}

pub fn parse_expense_id(raw: &str) -> Result<ExpenseId, AppError> {
    let raw = raw.trim();
    raw.parse()
        .map_err(|_| AppError::InvalidExpenseId(raw.to_string()))
}
