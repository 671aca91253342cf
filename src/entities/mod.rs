// Entity Models
//
// An expense has:
// - Stable identity (id) that NEVER changes
// - Values (title, amount) that change through updates
// - Explicit UTC timestamps for creation and last update

pub mod expense;

pub use expense::{ExpenseRecord, ExpenseSnapshot, ExpenseUpdate, IntoAmount, SharedExpense};
