//! The in-memory expense ledger.

use crate::{Error, expense::Expense};

/// An insertion-ordered collection of expenses, held in memory for the
/// lifetime of the server session.
///
/// Records have no stable identifier, so deletion is strictly positional and
/// positions must be recomputed after every mutation. No ordering by amount
/// or category is imposed; ordered views (e.g. top expenses) are derived,
/// non-destructive projections.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
}

impl ExpenseLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `expense` to the end of the ledger.
    pub fn append(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Remove and return the expense at `position`.
    ///
    /// All records after `position` shift down by one.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::NotFound] if `position` is past
    /// the end of the ledger.
    pub fn delete(&mut self, position: usize) -> Result<Expense, Error> {
        if position >= self.expenses.len() {
            return Err(Error::NotFound);
        }

        Ok(self.expenses.remove(position))
    }

    /// The current records, in insertion order.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The number of records in the ledger.
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the ledger has no records.
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        expense::{CategoryName, Expense, ExpenseLedger},
    };

    fn create_test_ledger(entries: &[(&str, f64)]) -> ExpenseLedger {
        let mut ledger = ExpenseLedger::new();

        for (category, amount) in entries {
            ledger.append(Expense::new(CategoryName::new_unchecked(category), *amount));
        }

        ledger
    }

    #[test]
    fn append_preserves_insertion_order() {
        let ledger = create_test_ledger(&[("Food", 50.0), ("Rent", 1000.0), ("Transit", 20.0)]);

        let categories: Vec<&str> = ledger
            .expenses()
            .iter()
            .map(|expense| expense.category.as_ref())
            .collect();

        assert_eq!(categories, ["Food", "Rent", "Transit"]);
    }

    #[test]
    fn delete_removes_exactly_one_record() {
        let mut ledger = create_test_ledger(&[("Food", 50.0), ("Rent", 1000.0), ("Transit", 20.0)]);

        let deleted = ledger.delete(1).unwrap();

        assert_eq!(deleted.category.as_ref(), "Rent");
        let categories: Vec<&str> = ledger
            .expenses()
            .iter()
            .map(|expense| expense.category.as_ref())
            .collect();
        assert_eq!(categories, ["Food", "Transit"]);
    }

    #[test]
    fn delete_out_of_range_is_not_found() {
        let mut ledger = create_test_ledger(&[("Food", 50.0)]);

        assert_eq!(ledger.delete(1), Err(Error::NotFound));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn positions_shift_after_delete() {
        let mut ledger = create_test_ledger(&[("a", 1.0), ("b", 2.0), ("c", 3.0), ("d", 4.0)]);

        // Deleting position 1 twice removes "b" and then "c", which has
        // shifted into position 1.
        ledger.delete(1).unwrap();
        ledger.delete(1).unwrap();

        let categories: Vec<&str> = ledger
            .expenses()
            .iter()
            .map(|expense| expense.category.as_ref())
            .collect();
        assert_eq!(categories, ["a", "d"]);
    }
}
