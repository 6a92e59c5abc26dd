//! Transaction model and the static category catalog.

pub mod category;
pub mod transaction;

pub use category::{
    all_categories, categories_for, default_category_for, find_category, CategoryOption,
    CategoryScope, EXPENSE_CATEGORIES, INCOME_CATEGORIES,
};
pub use transaction::{NewTransaction, Transaction, TransactionType};
