//! Core expense domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// A validated, non-empty expense category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// Leading and trailing whitespace is trimmed before validation.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategory] if `name` is empty
    /// after trimming.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyCategory)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the non-empty invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryName::new(s)
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a raw amount string as a positive, finite number of dollars.
///
/// # Errors
///
/// This function will return an [Error::InvalidAmount] carrying the raw input
/// if it does not parse as a number, is not finite, or is not strictly
/// greater than zero.
pub fn parse_amount(raw: &str) -> Result<f64, Error> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
        .ok_or_else(|| Error::InvalidAmount(raw.trim().to_string()))
}

/// A single expense record.
///
/// Expenses are immutable once created and have no stable identifier: a
/// record is identified only by its position in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// What the money was spent on.
    pub category: CategoryName,
    /// How much was spent. Always positive and finite.
    pub amount: f64,
}

impl Expense {
    /// Create an expense from an already-validated category and amount.
    pub fn new(category: CategoryName, amount: f64) -> Self {
        Self { category, amount }
    }
}

/// Form data for expense creation.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExpenseFormData {
    /// The raw category text.
    pub category: String,
    /// The raw amount text.
    pub amount: String,
    /// The page size of the table the form was submitted from, so the
    /// redirect after a successful add keeps the user's chosen page size.
    pub per_page: Option<u64>,
}

#[cfg(test)]
mod category_name_tests {
    use crate::{Error, expense::CategoryName};

    #[test]
    fn trims_surrounding_whitespace() {
        let got = CategoryName::new("  Food  ").unwrap();

        assert_eq!(got.as_ref(), "Food");
    }

    #[test]
    fn rejects_empty_string() {
        assert_eq!(CategoryName::new(""), Err(Error::EmptyCategory));
    }

    #[test]
    fn rejects_whitespace_only_string() {
        assert_eq!(CategoryName::new("  "), Err(Error::EmptyCategory));
    }
}
