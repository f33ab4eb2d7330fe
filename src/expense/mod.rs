//! The expense ledger: entry validation, paginated display and summary
//! statistics over an in-memory, insertion-ordered collection.

mod create_endpoint;
mod delete_endpoint;
mod domain;
mod expenses_page;
mod ledger;
mod summary;

pub use create_endpoint::create_expense_endpoint;
pub use delete_endpoint::delete_expense_endpoint;
pub use domain::{CategoryName, Expense, ExpenseFormData};
pub use expenses_page::get_expenses_page;
pub use ledger::ExpenseLedger;
