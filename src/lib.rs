// Expense Tracker - Core Library
// Exposes all modules for use in the demo binary and tests

pub mod clock;
pub mod entities;
pub mod error;
pub mod store;

// Re-export commonly used types
pub use clock::{Clock, IdGenerator, SystemClock, UuidGenerator};
pub use entities::{ExpenseRecord, ExpenseSnapshot, ExpenseUpdate, IntoAmount, SharedExpense};
pub use error::{ExpenseError, Result};
pub use store::ExpenseStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
