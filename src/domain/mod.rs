mod expense;
mod ledger;
mod money;
mod severity;

pub use expense::*;
pub use ledger::*;
pub use money::*;
pub use severity::*;
