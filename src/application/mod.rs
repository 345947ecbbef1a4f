// Application layer - the session controller and the boundary to the display.
// The domain ledger never talks to a projection directly; the session does.

pub mod error;
pub mod projection;
pub mod session;
pub mod validation;

pub use error::*;
pub use projection::*;
pub use session::*;
