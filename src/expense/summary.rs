//! Summary statistics derived from the expense ledger.
//!
//! Everything here is a pure function over a snapshot of the ledger: values
//! are recomputed on each query and nothing is stored redundantly.

use crate::expense::Expense;

/// The fixed period, in days, that the average is computed over.
const AVERAGE_PERIOD_DAYS: f64 = 30.0;

/// The number of expenses shown in the top expenses list.
const TOP_EXPENSES_COUNT: usize = 3;

/// The sum of all expense amounts. Zero for an empty ledger.
pub fn total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|expense| expense.amount).sum()
}

/// The average amount spent per day over a fixed 30-day period.
///
/// Zero for an empty ledger. The divisor is constant, so no division-by-zero
/// guard is needed.
pub fn average_daily(expenses: &[Expense]) -> f64 {
    total(expenses) / AVERAGE_PERIOD_DAYS
}

/// The three largest expenses, in descending order of amount.
///
/// The sort is stable: expenses with equal amounts keep their relative order
/// from the ledger. The ledger itself is never reordered.
pub fn top_expenses(expenses: &[Expense]) -> Vec<Expense> {
    let mut sorted = expenses.to_vec();
    sorted.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    sorted.truncate(TOP_EXPENSES_COUNT);

    sorted
}
