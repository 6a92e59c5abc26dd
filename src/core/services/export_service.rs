//! Spreadsheet-friendly export of the transaction list.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

use crate::errors::LedgerError;
use crate::ledger::Transaction;
use crate::utils::persistence::write_atomic;

pub const EXPORT_HEADER: &str = "Date,Name,Category,Type,Amount";
const EXPORT_DATE_FORMAT: &str = "%-m/%-d/%Y";
const FILE_DATE_FORMAT: &str = "%Y-%m-%d";

pub struct ExportService;

impl ExportService {
    /// Renders the header and one row per transaction, dated in local time.
    pub fn to_delimited_text(transactions: &[Transaction]) -> String {
        Self::to_delimited_text_in(transactions, &Local)
    }

    /// Same as [`ExportService::to_delimited_text`] with an explicit timezone
    /// for the calendar date column.
    pub fn to_delimited_text_in<Tz: TimeZone>(transactions: &[Transaction], tz: &Tz) -> String {
        let mut lines = Vec::with_capacity(transactions.len() + 1);
        lines.push(EXPORT_HEADER.to_string());
        for txn in transactions {
            lines.push(format_row(txn, tz));
        }
        lines.join("\n")
    }

    /// `expenses_export_<YYYY-MM-DD>.csv` for the given day.
    pub fn export_file_name(date: NaiveDate) -> String {
        format!("expenses_export_{}.csv", date.format(FILE_DATE_FORMAT))
    }

    pub fn can_export(transactions: &[Transaction]) -> bool {
        !transactions.is_empty()
    }

    /// Writes today's export into `dir` and returns the file path.
    pub fn write_export(dir: &Path, transactions: &[Transaction]) -> Result<PathBuf, LedgerError> {
        let path = dir.join(Self::export_file_name(Utc::now().date_naive()));
        write_atomic(&path, &Self::to_delimited_text(transactions))?;
        tracing::info!(path = %path.display(), rows = transactions.len(), "export written");
        Ok(path)
    }
}

fn format_row<Tz: TimeZone>(txn: &Transaction, tz: &Tz) -> String {
    let date = local_date(&txn.date, tz);
    format!(
        "{},\"{}\",{},{},{}",
        date.format(EXPORT_DATE_FORMAT),
        txn.name,
        txn.category,
        txn.kind,
        format_amount(txn.signed_amount())
    )
}

/// Shortest round-trip decimal, in exponent form (`1e-7`, `-1e+21`) when the
/// magnitude falls outside `[1e-6, 1e21)`, as ECMAScript `Number#toString` does.
fn format_amount(value: f64) -> String {
    let magnitude = value.abs();
    if value.is_finite() && value != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        };
    }
    value.to_string()
}

fn local_date<Tz: TimeZone>(date: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    date.with_timezone(tz).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{NewTransaction, TransactionType};
    use chrono::FixedOffset;

    fn txn_at(
        name: &str,
        amount: f64,
        kind: TransactionType,
        category: &str,
        date: DateTime<Utc>,
    ) -> Transaction {
        NewTransaction::new(name, amount, kind, category)
            .into_transaction(date)
            .unwrap()
    }

    #[test]
    fn empty_list_exports_header_only() {
        assert_eq!(ExportService::to_delimited_text_in(&[], &Utc), EXPORT_HEADER);
        assert!(!ExportService::can_export(&[]));
    }

    #[test]
    fn rows_follow_list_order_with_signed_amounts() {
        let date = Utc.with_ymd_and_hms(2025, 1, 5, 10, 0, 0).unwrap();
        let list = vec![
            txn_at("Coffee, large", 5.5, TransactionType::Expense, "Food", date),
            txn_at("Salary", 1000.0, TransactionType::Income, "Salary", date),
        ];
        let text = ExportService::to_delimited_text_in(&list, &Utc);

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            [
                EXPORT_HEADER,
                "1/5/2025,\"Coffee, large\",Food,expense,-5.5",
                "1/5/2025,\"Salary\",Salary,income,1000",
            ]
        );
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn extreme_amounts_use_exponent_notation() {
        assert_eq!(format_amount(-5.5), "-5.5");
        assert_eq!(format_amount(1000.0), "1000");
        assert_eq!(format_amount(0.000001), "0.000001");
        assert_eq!(format_amount(1e20), "100000000000000000000");
        assert_eq!(format_amount(1e-7), "1e-7");
        assert_eq!(format_amount(-1.5e-7), "-1.5e-7");
        assert_eq!(format_amount(-1e21), "-1e+21");

        let date = Utc.with_ymd_and_hms(2025, 1, 5, 10, 0, 0).unwrap();
        let list = vec![txn_at("Jackpot", 1e21, TransactionType::Expense, "Other", date)];
        let text = ExportService::to_delimited_text_in(&list, &Utc);
        assert!(text.ends_with(",Other,expense,-1e+21"), "unexpected row: {text}");
    }

    #[test]
    fn date_column_uses_the_calendar_day_of_the_given_zone() {
        let date = Utc.with_ymd_and_hms(2025, 3, 31, 22, 30, 0).unwrap();
        let list = vec![txn_at("Late taxi", 12.0, TransactionType::Expense, "Transportation", date)];
        let ahead = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();

        let text = ExportService::to_delimited_text_in(&list, &ahead);
        assert!(text.ends_with("4/1/2025,\"Late taxi\",Transportation,expense,-12"));
    }

    #[test]
    fn embedded_quotes_are_written_verbatim() {
        let date = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
        let mut txn = txn_at("Book", 20.0, TransactionType::Expense, "Shopping", date);
        txn.name = "The \"Rust\" Book".into();

        let text = ExportService::to_delimited_text_in(&[txn], &Utc);
        assert!(text.contains(",\"The \"Rust\" Book\","));
    }

    #[test]
    fn export_file_name_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(
            ExportService::export_file_name(date),
            "expenses_export_2026-10-18.csv"
        );
    }
}
