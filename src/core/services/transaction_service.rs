//! Read-side helpers for browsing transaction history.

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::ledger::Transaction;

const SHORT_DATE_FORMAT: &str = "%b %-d";

pub struct TransactionService;

impl TransactionService {
    /// Transactions whose name or category contains `query`, ignoring case.
    /// A blank query keeps everything; otherwise the query is matched as
    /// typed, surrounding spaces included. Order is preserved.
    pub fn filter<'a>(transactions: &'a [Transaction], query: &str) -> Vec<&'a Transaction> {
        if query.trim().is_empty() {
            return transactions.iter().collect();
        }
        let needle = query.to_lowercase();
        transactions
            .iter()
            .filter(|txn| {
                txn.name.to_lowercase().contains(&needle)
                    || txn.category.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Month and day in the local timezone, e.g. `Oct 18`.
    pub fn short_date(date: &DateTime<Utc>) -> String {
        Self::short_date_in(date, &Local)
    }

    pub fn short_date_in<Tz: TimeZone>(date: &DateTime<Utc>, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        date.with_timezone(tz).format(SHORT_DATE_FORMAT).to_string()
    }
}
