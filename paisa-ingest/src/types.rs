use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Normalized output of the statement parser.
///
/// Fields mirror the statement text: `date` and `amount` stay as the strings
/// the statement printed (amount with thousands separators stripped), and the
/// direction lives in `kind` rather than the sign of the amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementTransaction {
    /// Transaction datetime as printed, e.g. `"Jan 05, 2024 10:30 am"`.
    pub date: String,
    /// Direction or method token, e.g. `DEBIT` / `CREDIT`.
    pub kind: String,
    /// Amount magnitude as a clean decimal string, e.g. `"1234.56"`.
    pub amount: String,
    pub description: String,
    pub transaction_id: Option<String>,
    /// Bank settlement reference, when the statement printed one.
    pub utr: Option<String>,
    pub payment_method: Option<String>,
}

impl StatementTransaction {
    /// Parse the statement datetime string into a typed timestamp.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.date, "%b %d, %Y %I:%M %p").ok()
    }

    /// Parse the clean amount string into a number.
    pub fn amount_value(&self) -> Option<f64> {
        self.amount.parse().ok()
    }

    /// A record needs a date, an amount, and a direction token to be usable.
    pub fn is_valid(&self) -> bool {
        !self.date.is_empty() && !self.amount.is_empty() && !self.kind.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn txn(date: &str, kind: &str, amount: &str) -> StatementTransaction {
        StatementTransaction {
            date: date.to_string(),
            kind: kind.to_string(),
            amount: amount.to_string(),
            description: "UPI payment".to_string(),
            transaction_id: None,
            utr: None,
            payment_method: None,
        }
    }

    #[test]
    fn test_timestamp_parses_statement_format() {
        let t = txn("Jan 05, 2024 10:30 am", "DEBIT", "250.00");
        let ts = t.timestamp().unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(ts.hour(), 10);
        assert_eq!(ts.minute(), 30);
    }

    #[test]
    fn test_timestamp_pm_and_junk() {
        let t = txn("Dec 31, 2023 11:45 pm", "CREDIT", "10.00");
        assert_eq!(t.timestamp().unwrap().hour(), 23);

        let bad = txn("not a date", "DEBIT", "10.00");
        assert!(bad.timestamp().is_none());
    }

    #[test]
    fn test_amount_value() {
        assert_eq!(txn("Jan 05, 2024 10:30 am", "DEBIT", "1234.56").amount_value(), Some(1234.56));
        assert_eq!(txn("Jan 05, 2024 10:30 am", "DEBIT", "").amount_value(), None);
    }

    #[test]
    fn test_validity_requires_date_amount_kind() {
        assert!(txn("Jan 05, 2024 10:30 am", "DEBIT", "250.00").is_valid());
        assert!(!txn("", "DEBIT", "250.00").is_valid());
        assert!(!txn("Jan 05, 2024 10:30 am", "", "250.00").is_valid());
        assert!(!txn("Jan 05, 2024 10:30 am", "DEBIT", "").is_valid());
    }
}
