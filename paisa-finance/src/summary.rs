//! Summary aggregation over parsed statement transactions.

use std::collections::HashMap;

use paisa_core::Category;
use paisa_ingest::StatementTransaction;
use serde::{Deserialize, Serialize};

use crate::category_rules::classify;

/// Running amount total and row count for one slice of the statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub total: f64,
    pub count: usize,
}

impl Totals {
    fn add(&mut self, amount: f64) {
        self.total += amount;
        self.count += 1;
    }
}

/// Derived view over a transaction sequence.
///
/// Never the source of truth — recompute from the transactions whenever they
/// change. `average_amount`, `min_amount`, and `max_amount` are `None` for an
/// empty sequence; callers must check rather than display a silent zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub total_transactions: usize,
    pub total_amount: f64,
    pub average_amount: Option<f64>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    /// Rows whose type token is DEBIT, case-insensitively.
    pub debit: Totals,
    /// Rows whose type token is CREDIT, case-insensitively.
    pub credit: Totals,
    pub category_breakdown: HashMap<Category, Totals>,
}

/// Compute summary statistics over a transaction sequence.
///
/// Amounts are the parser's clean decimal strings (separators already
/// stripped); a row whose amount fails to parse is excluded from the numeric
/// aggregates but still counted in `total_transactions`.
pub fn summarize(txns: &[StatementTransaction]) -> TransactionSummary {
    let mut total = 0.0;
    let mut numeric = 0usize;
    let mut min: Option<f64> = None;
    let mut max: Option<f64> = None;
    let mut debit = Totals::default();
    let mut credit = Totals::default();
    let mut breakdown: HashMap<Category, Totals> = HashMap::new();

    for txn in txns {
        let Some(amount) = txn.amount_value() else {
            continue;
        };

        total += amount;
        numeric += 1;
        min = Some(min.map_or(amount, |m| m.min(amount)));
        max = Some(max.map_or(amount, |m| m.max(amount)));

        if txn.kind.eq_ignore_ascii_case("DEBIT") {
            debit.add(amount);
        } else if txn.kind.eq_ignore_ascii_case("CREDIT") {
            credit.add(amount);
        }

        breakdown
            .entry(classify(&txn.description))
            .or_default()
            .add(amount);
    }

    TransactionSummary {
        total_transactions: txns.len(),
        total_amount: total,
        average_amount: (numeric > 0).then(|| total / numeric as f64),
        min_amount: min,
        max_amount: max,
        debit,
        credit,
        category_breakdown: breakdown,
    }
}
