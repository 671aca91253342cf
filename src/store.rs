// 🗂️ Expense Store - in-memory collection of expense records
//
// Holds shared handles, so a caller that kept a handle sees every change
// made through the store and vice versa. Insertion order is preserved and
// every lookup is a linear scan.

use tracing::{debug, trace};

use crate::entities::{ExpenseSnapshot, SharedExpense};
use crate::error::Result;

/// In-memory list of expenses
///
/// No uniqueness check: the same id can appear twice if an id source ever
/// repeats itself.
///
/// # Panics
///
/// Removal, lookups and snapshots read every record through
/// `RefCell::borrow` and panic if a caller is holding a `borrow_mut()` guard
/// on one of them. Adding never reads the record it is given.
#[derive(Debug, Default)]
pub struct ExpenseStore {
    expenses: Vec<SharedExpense>,
}

impl ExpenseStore {
    /// Create new empty store
    pub fn new() -> Self {
        ExpenseStore {
            expenses: Vec::new(),
        }
    }

    /// Append an expense (never fails, never copies)
    pub fn add_expense(&mut self, expense: SharedExpense) {
        match expense.try_borrow() {
            Ok(record) => debug!(id = %record.id(), "expense added"),
            Err(_) => debug!("expense added while mutably borrowed"),
        }
        self.expenses.push(expense);
    }

    /// Remove every expense with this id
    ///
    /// Returns how many were removed; an unknown id removes nothing.
    pub fn remove_expense(&mut self, id: &str) -> usize {
        let before = self.expenses.len();
        self.expenses.retain(|expense| expense.borrow().id() != id);
        let removed = before - self.expenses.len();

        debug!(id, removed, "expense removed");
        removed
    }

    /// First expense with this id, as a live handle
    pub fn get_expense(&self, id: &str) -> Option<SharedExpense> {
        trace!(id, "looking up expense by id");
        self.expenses
            .iter()
            .find(|expense| expense.borrow().id() == id)
            .cloned()
    }

    /// Snapshots of every expense whose title matches, ignoring case
    pub fn get_expense_by_title(&self, title: &str) -> Vec<ExpenseSnapshot> {
        trace!(title, "looking up expenses by title");
        let wanted = title.to_lowercase();
        self.expenses
            .iter()
            .map(|expense| expense.borrow())
            .filter(|expense| expense.title().to_lowercase() == wanted)
            .map(|expense| expense.snapshot())
            .collect()
    }

    /// Snapshots of every expense, in insertion order
    pub fn snapshot(&self) -> Vec<ExpenseSnapshot> {
        self.expenses
            .iter()
            .map(|expense| expense.borrow().snapshot())
            .collect()
    }

    /// Pretty-printed JSON array of all snapshots
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    /// Live handles in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &SharedExpense> {
        self.expenses.iter()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
