//! PhonePe statement parser (text)
//!
//! Expected extracted-text shape, one header per statement page:
//!   Date   Transaction Details   Type   Amount
//!   Jan 05, 2024 10:30 am DEBIT ₹ 250.00 Swiggy Order
//!   Transaction ID T2401051030123456789
//!   UTR No. 400123456789
//!   Paid by XXXXXX1234
//!
//! PDF text extraction collapses layout unpredictably, so column whitespace
//! is matched as runs rather than exact spacing.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::errors::{ExtractionFailure, ParseError};
use crate::types::StatementTransaction;

fn header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"Date\s+Transaction\s+Details\s+Type\s+Amount").expect("invalid header regex")
    })
}

// DATETIME TYPE ₹AMOUNT DESCRIPTION, description running until the next
// "Transaction ID" label or the end of the section.
fn txn_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"(?is)(?P<date>[A-Za-z]{3} \d{2}, \d{4} \d{2}:\d{2} (?:am|pm))\s+",
            r"(?P<kind>\w+)\s+",
            r"₹\s*(?P<amount>[\d,]+(?:\.\d{2})?)\s+",
            r"(?P<desc>.+?)",
            r"(?:Transaction ID|$)"
        ))
        .expect("invalid transaction regex")
    })
}

fn txn_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Transaction ID\s+([^\n]+)").expect("invalid txn id regex"))
}

fn utr_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"UTR No\.\s+([^\n]+)").expect("invalid utr regex"))
}

fn paid_by_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Paid by\s+([^\n]+)").expect("invalid paid by regex"))
}

/// Parse extracted PhonePe statement text into transactions, in document
/// order.
///
/// Empty input means the extraction collaborator failed and maps to
/// `ParseError::Extraction`; text that parses mechanically but yields no
/// valid transaction maps to `ParseError::NoTransactions`. Callers surface
/// the two differently.
pub fn parse_statement_text(text: &str) -> Result<Vec<StatementTransaction>, ParseError> {
    if text.trim().is_empty() {
        return Err(ExtractionFailure::Unknown("extracted text is empty".to_string()).into());
    }

    let mut out = Vec::new();
    let mut dropped = 0usize;
    let mut sections = 0usize;

    for section in header_re().split(text) {
        sections += 1;

        // One label scan per section. A section normally holds a single
        // transaction; when it holds more, every record from the section
        // gets the same labels (see DESIGN.md).
        let transaction_id = first_capture(txn_id_re(), section);
        let utr = first_capture(utr_re(), section);
        let payment_method = first_capture(paid_by_re(), section);

        for caps in txn_re().captures_iter(section) {
            let txn = StatementTransaction {
                date: caps["date"].trim().to_string(),
                kind: caps["kind"].trim().to_string(),
                amount: caps["amount"].trim().replace(',', ""),
                description: collapse_whitespace(&caps["desc"]),
                transaction_id: transaction_id.clone(),
                utr: utr.clone(),
                payment_method: payment_method.clone(),
            };

            if txn.is_valid() {
                out.push(txn);
            } else {
                dropped += 1;
            }
        }
    }

    debug!(
        "parsed {} transactions across {} sections ({} dropped)",
        out.len(),
        sections,
        dropped
    );

    if out.is_empty() {
        return Err(ParseError::NoTransactions);
    }
    Ok(out)
}

fn first_capture(re: &Regex, section: &str) -> Option<String> {
    re.captures(section)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Collapse embedded newlines and whitespace runs to single spaces.
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
