//! Reducer-style store for parsed transactions and their derived summary.
//!
//! The caller owns a `State` per analysis session and threads it through
//! `reduce` explicitly; there is no global instance. Re-uploading an
//! overlapping statement is expected, so merging deduplicates on the
//! (date, amount, description) key while keeping first-seen order.

use std::collections::HashSet;

use paisa_ingest::StatementTransaction;
use serde::{Deserialize, Serialize};

use crate::summary::TransactionSummary;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub transactions: Vec<StatementTransaction>,
    pub summary: Option<TransactionSummary>,
}

#[derive(Debug, Clone)]
pub enum Action {
    /// Merge newly parsed transactions, discarding duplicates of rows
    /// already held.
    AddTransactions(Vec<StatementTransaction>),
    /// Replace the cached summary view.
    UpdateSummary(TransactionSummary),
    /// Reset to the initial state.
    Clear,
}

/// Apply one action, producing the next state.
pub fn reduce(state: State, action: Action) -> State {
    match action {
        Action::AddTransactions(incoming) => {
            let State {
                transactions: existing,
                summary,
            } = state;
            let mut seen: HashSet<(String, String, String)> = HashSet::new();
            let mut transactions = Vec::with_capacity(existing.len() + incoming.len());
            for txn in existing.into_iter().chain(incoming) {
                let key = (txn.date.clone(), txn.amount.clone(), txn.description.clone());
                if seen.insert(key) {
                    transactions.push(txn);
                }
            }
            State {
                transactions,
                summary,
            }
        }
        Action::UpdateSummary(summary) => State {
            summary: Some(summary),
            ..state
        },
        Action::Clear => State::default(),
    }
}
