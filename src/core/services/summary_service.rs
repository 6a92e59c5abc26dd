//! Totals and category breakdowns derived from a transaction list.

use std::collections::HashMap;

use serde::Serialize;

use crate::ledger::{Transaction, TransactionType};

/// Aggregate income, expense, and balance for a set of transactions.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryData {
    pub total_balance: f64,
    pub total_income: f64,
    pub total_expense: f64,
}

/// One category's slice of total expenses.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    /// Share of total expenses, 0 to 100.
    pub percentage: f64,
}

pub struct SummaryService;

impl SummaryService {
    pub fn summarize(transactions: &[Transaction]) -> SummaryData {
        let (total_income, total_expense) =
            transactions
                .iter()
                .fold((0.0, 0.0), |(income, expense), txn| match txn.kind {
                    TransactionType::Income => (income + txn.amount, expense),
                    TransactionType::Expense => (income, expense + txn.amount),
                });
        SummaryData {
            total_balance: total_income - total_expense,
            total_income,
            total_expense,
        }
    }

    /// Expense totals per category, largest first. Categories with equal
    /// totals keep the order in which they were first seen. Returns an empty
    /// list when there are no expenses.
    pub fn breakdown_by_category(transactions: &[Transaction]) -> Vec<CategoryShare> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut totals: Vec<(&str, f64)> = Vec::new();
        let mut total = 0.0;

        for txn in transactions.iter().filter(|txn| txn.is_expense()) {
            match index.get(txn.category.as_str()) {
                Some(&slot) => totals[slot].1 += txn.amount,
                None => {
                    index.insert(txn.category.as_str(), totals.len());
                    totals.push((txn.category.as_str(), txn.amount));
                }
            }
            total += txn.amount;
        }

        if totals.is_empty() || total <= 0.0 {
            return Vec::new();
        }

        // sort_by is stable, which preserves first-seen order on ties.
        totals.sort_by(|a, b| b.1.total_cmp(&a.1));
        totals
            .into_iter()
            .map(|(category, amount)| CategoryShare {
                category: category.to_string(),
                amount,
                percentage: amount / total * 100.0,
            })
            .collect()
    }

    pub fn has_expenses(transactions: &[Transaction]) -> bool {
        transactions.iter().any(Transaction::is_expense)
    }
}
