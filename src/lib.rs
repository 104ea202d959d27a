pub mod amount;
pub mod console;
pub mod ledger;
pub mod model;
pub mod screen;
pub mod session;

pub use amount::Amount;
pub use console::Console;
pub use ledger::AccountLedger;
pub use model::{Operation, Pin, TransactionRecord};
pub use session::{AuthSession, AuthStatus};
