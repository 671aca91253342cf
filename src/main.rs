use anyhow::Result;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

use expense_tracker::{ExpenseRecord, ExpenseStore, ExpenseUpdate, VERSION};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("expense_tracker=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(version = VERSION, "running expense tracker demo");
    run_demo()
}

fn run_demo() -> Result<()> {
    let mut store = ExpenseStore::new();

    // 1. Create and add expenses
    let dinner = ExpenseRecord::new("Dinner", 45.0)?.into_shared();
    let transport = ExpenseRecord::new("Transport", 20.0)?.into_shared();
    store.add_expense(Rc::clone(&dinner));
    store.add_expense(Rc::clone(&transport));

    // 2. Modify an expense through the caller's handle
    dinner
        .borrow_mut()
        .update(ExpenseUpdate::new().title("Restaurant").amount(50.0));

    // 3. Retrieve by id
    let dinner_id = dinner.borrow().id().to_string();
    if let Some(record) = store.get_expense(&dinner_id) {
        println!("{}", record.borrow().snapshot().to_json()?);
    }

    // 4. Find by title
    for matching in store.get_expense_by_title("restaurant") {
        println!("{}", matching.to_json()?);
    }

    // 5. Remove an expense
    let transport_id = transport.borrow().id().to_string();
    store.remove_expense(&transport_id);

    // 6. Display everything left
    println!("{}", store.to_json()?);

    Ok(())
}
