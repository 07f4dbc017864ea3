//! paisa-finance: category rules, summary aggregation, and the transaction store.

pub mod category_rules;
pub mod store;
pub mod summary;

pub use category_rules::classify;
pub use store::{Action, State, reduce};
pub use summary::{Totals, TransactionSummary, summarize};
