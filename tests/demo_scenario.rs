// End-to-end scenario through the public API:
// create two expenses, rename one, look it up, remove the other.

use std::rc::Rc;

use expense_tracker::{ExpenseError, ExpenseRecord, ExpenseStore, ExpenseUpdate};

#[test]
fn test_dinner_and_transport_scenario() {
    let mut store = ExpenseStore::new();

    let dinner = ExpenseRecord::new("Dinner", 45.0).unwrap().into_shared();
    let transport = ExpenseRecord::new("Transport", 20.0).unwrap().into_shared();
    store.add_expense(Rc::clone(&dinner));
    store.add_expense(Rc::clone(&transport));
    assert_eq!(store.len(), 2);

    dinner
        .borrow_mut()
        .update(ExpenseUpdate::new().title("Restaurant").amount(50.0));

    let dinner_id = dinner.borrow().id().to_string();
    let found = store.get_expense(&dinner_id).unwrap().borrow().snapshot();
    assert_eq!(found.title, "Restaurant");
    assert_eq!(found.amount, 50.0);
    assert_eq!(found.id, dinner_id);

    let matches = store.get_expense_by_title("restaurant");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0], dinner.borrow().snapshot());

    let transport_id = transport.borrow().id().to_string();
    assert_eq!(store.remove_expense(&transport_id), 1);

    let remaining = store.snapshot();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0], dinner.borrow().snapshot());
    assert!(store.get_expense(&transport_id).is_none());
}

#[test]
fn test_updated_at_moves_forward_and_created_at_stays() {
    let mut expense = ExpenseRecord::new("Groceries", "82.40").unwrap();
    let created = expense.created_at();

    expense.update(ExpenseUpdate::new());

    assert_eq!(expense.created_at(), created);
    assert!(expense.updated_at() >= expense.created_at());
    assert_eq!(expense.title(), "Groceries");
    assert_eq!(expense.amount(), 82.4);
}

#[test]
fn test_zero_amount_update_keeps_previous_amount() {
    let mut expense = ExpenseRecord::new("Dinner", 45.0).unwrap();
    expense.update(ExpenseUpdate::new().amount(0.0));
    assert_eq!(expense.amount(), 45.0);
}

#[test]
fn test_invalid_amount_propagates() {
    let err = ExpenseRecord::new("Dinner", "forty-five").unwrap_err();
    assert!(matches!(err, ExpenseError::InvalidAmount { .. }));
    assert_eq!(err.to_string(), "Invalid amount: \"forty-five\" is not a number");
}

#[test]
fn test_snapshot_timestamps_are_utc_iso8601() {
    let expense = ExpenseRecord::new("Parking", 6).unwrap();
    let snapshot = expense.snapshot();

    assert!(snapshot.created_at.ends_with("+00:00"));
    let parsed = chrono::DateTime::parse_from_rfc3339(&snapshot.created_at).unwrap();
    assert_eq!(parsed.offset().local_minus_utc(), 0);
}
