use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::RejectReason;

/// Direction of money for a transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// Applies the ledger sign convention: expenses are negative.
    pub fn signed(&self, amount: f64) -> f64 {
        match self {
            TransactionType::Income => amount,
            TransactionType::Expense => -amount,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single recorded income or expense event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub date: DateTime<Utc>,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    pub fn signed_amount(&self) -> f64 {
        self.kind.signed(self.amount)
    }
}

/// User input for a transaction that has not been accepted by the ledger yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub name: String,
    pub amount: f64,
    pub kind: TransactionType,
    pub category: String,
}

impl NewTransaction {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        kind: TransactionType,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            kind,
            category: category.into(),
        }
    }

    pub fn validate(&self) -> Result<(), RejectReason> {
        if self.name.trim().is_empty() {
            return Err(RejectReason::EmptyName);
        }
        if !self.amount.is_finite() {
            return Err(RejectReason::NonFiniteAmount);
        }
        if self.amount <= 0.0 {
            return Err(RejectReason::NonPositiveAmount);
        }
        Ok(())
    }

    /// Validates the draft and stamps it with a fresh id and timestamp.
    pub fn into_transaction(self, date: DateTime<Utc>) -> Result<Transaction, RejectReason> {
        self.validate()?;
        Ok(Transaction {
            id: Uuid::new_v4(),
            name: self.name,
            amount: self.amount,
            kind: self.kind,
            category: self.category,
            date,
        })
    }
}
