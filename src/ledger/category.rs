use serde::Serialize;

use super::transaction::TransactionType;

/// Which transaction types a catalog entry applies to.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CategoryScope {
    Income,
    Expense,
    Both,
}

impl CategoryScope {
    pub fn applies_to(&self, kind: TransactionType) -> bool {
        match self {
            CategoryScope::Both => true,
            CategoryScope::Income => kind == TransactionType::Income,
            CategoryScope::Expense => kind == TransactionType::Expense,
        }
    }
}

/// Static catalog entry offered when recording a transaction.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CategoryOption {
    /// Key stored on the transaction.
    pub value: &'static str,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub scope: CategoryScope,
}

const fn expense(value: &'static str, label: &'static str) -> CategoryOption {
    CategoryOption {
        value,
        label,
        scope: CategoryScope::Expense,
    }
}

const fn income(value: &'static str, label: &'static str) -> CategoryOption {
    CategoryOption {
        value,
        label,
        scope: CategoryScope::Income,
    }
}

pub const EXPENSE_CATEGORIES: &[CategoryOption] = &[
    expense("Food", "Food & Dining"),
    expense("Housing", "Housing"),
    expense("Transportation", "Transportation"),
    expense("Utilities", "Utilities"),
    expense("Entertainment", "Entertainment"),
    expense("Healthcare", "Healthcare"),
    expense("Shopping", "Shopping"),
    expense("Personal", "Personal Care"),
    expense("Other", "Other"),
];

pub const INCOME_CATEGORIES: &[CategoryOption] = &[
    income("Salary", "Salary"),
    income("Freelance", "Freelance"),
    income("Investments", "Investments"),
    income("Gifts", "Gifts"),
    income("Other", "Other"),
];

/// Ordered catalog entries valid for `kind`.
pub fn categories_for(kind: TransactionType) -> &'static [CategoryOption] {
    match kind {
        TransactionType::Income => INCOME_CATEGORIES,
        TransactionType::Expense => EXPENSE_CATEGORIES,
    }
}

/// Category preselected whenever an input form switches to `kind`.
pub fn default_category_for(kind: TransactionType) -> &'static str {
    categories_for(kind)
        .first()
        .map(|option| option.value)
        .unwrap_or("Other")
}

/// Income entries followed by expense entries.
pub fn all_categories() -> impl Iterator<Item = &'static CategoryOption> {
    INCOME_CATEGORIES.iter().chain(EXPENSE_CATEGORIES.iter())
}

pub fn find_category(kind: TransactionType, value: &str) -> Option<&'static CategoryOption> {
    categories_for(kind)
        .iter()
        .find(|option| option.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_first_entries() {
        assert_eq!(default_category_for(TransactionType::Expense), "Food");
        assert_eq!(default_category_for(TransactionType::Income), "Salary");
    }

    #[test]
    fn catalog_scopes_match_their_lists() {
        assert!(EXPENSE_CATEGORIES
            .iter()
            .all(|option| option.scope.applies_to(TransactionType::Expense)));
        assert!(INCOME_CATEGORIES
            .iter()
            .all(|option| option.scope.applies_to(TransactionType::Income)));
        assert_eq!(all_categories().count(), 14);
    }

    #[test]
    fn other_exists_for_both_types() {
        let income_other = find_category(TransactionType::Income, "Other").unwrap();
        let expense_other = find_category(TransactionType::Expense, "Other").unwrap();
        assert_eq!(income_other.scope, CategoryScope::Income);
        assert_eq!(expense_other.scope, CategoryScope::Expense);
        assert!(find_category(TransactionType::Income, "Food").is_none());
    }

    #[test]
    fn option_serializes_with_type_key() {
        let value = serde_json::to_value(categories_for(TransactionType::Expense)[0]).unwrap();
        assert_eq!(value["value"], "Food");
        assert_eq!(value["label"], "Food & Dining");
        assert_eq!(value["type"], "expense");
    }
}
