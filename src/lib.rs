pub mod application;
pub mod cli;
pub mod domain;

pub use application::{BudgetSession, UiProjection};
pub use domain::*;
