use indoc::indoc;
use paisa_core::Category;
use paisa_finance::store::{Action, State, reduce};
use paisa_finance::summary::summarize;
use paisa_finance::classify;
use paisa_ingest::parsers::phonepe::parse_statement_text;

const STATEMENT: &str = indoc! {"
    PhonePe Transaction Statement
    01 Jan, 2024 - 31 Jan, 2024

    Date   Transaction Details   Type   Amount
    Jan 05, 2024 10:30 am DEBIT ₹ 250.00 Swiggy Order
    Transaction ID T2401051030123456789
    UTR No. 400123456789
    Paid by XXXXXX1234

    Date   Transaction Details   Type   Amount
    Jan 04, 2024 06:45 pm DEBIT ₹ 1,899.00 Flipkart purchase
    Transaction ID T2401041845987654321
    UTR No. 400198765432
    Paid by XXXXXX1234

    Date   Transaction Details   Type   Amount
    Jan 03, 2024 09:00 am CREDIT ₹ 12,000.00 Received from Anil Kumar
    Transaction ID T2401030900111222333
    UTR No. 400111222333
"};

/// Full pipeline over a realistic multi-page statement: parse, classify,
/// aggregate.
#[test]
fn test_statement_analysis_pipeline() {
    let txns = parse_statement_text(STATEMENT).unwrap();
    assert_eq!(txns.len(), 3);

    // Document order, newest first, exactly as printed.
    assert_eq!(txns[0].description, "Swiggy Order");
    assert_eq!(txns[1].description, "Flipkart purchase");
    assert_eq!(txns[2].description, "Received from Anil Kumar");

    assert_eq!(txns[1].amount, "1899.00");
    assert_eq!(txns[1].utr.as_deref(), Some("400198765432"));
    assert_eq!(txns[2].kind, "CREDIT");
    assert_eq!(txns[2].payment_method, None);

    assert_eq!(classify(&txns[0].description), Category::FoodAndDining);
    assert_eq!(classify(&txns[1].description), Category::Shopping);
    assert_eq!(classify(&txns[2].description), Category::Others);

    let summary = summarize(&txns);
    assert_eq!(summary.total_transactions, 3);
    assert!((summary.total_amount - 14149.0).abs() < 1e-9);
    assert_eq!(summary.min_amount, Some(250.0));
    assert_eq!(summary.max_amount, Some(12000.0));
    assert_eq!(summary.debit.count, 2);
    assert!((summary.debit.total - 2149.0).abs() < 1e-9);
    assert_eq!(summary.credit.count, 1);
    assert!((summary.credit.total - 12000.0).abs() < 1e-9);
}

/// The documented single-block scenario end to end.
#[test]
fn test_single_block_scenario() {
    let text = "Date   Transaction Details   Type   Amount\n\
                Jan 05, 2024 10:30 am DEBIT ₹ 250.00 Swiggy Order Transaction ID XYZ789";

    let txns = parse_statement_text(text).unwrap();
    assert_eq!(txns.len(), 1);

    let t = &txns[0];
    assert_eq!(t.date, "Jan 05, 2024 10:30 am");
    assert_eq!(t.kind, "DEBIT");
    assert_eq!(t.amount, "250.00");
    assert_eq!(t.description, "Swiggy Order");
    assert_eq!(t.transaction_id.as_deref(), Some("XYZ789"));

    assert_eq!(classify(&t.description), Category::FoodAndDining);

    let summary = summarize(&txns);
    assert_eq!(summary.total_transactions, 1);
    assert!((summary.total_amount - 250.0).abs() < 1e-9);
    assert_eq!(summary.average_amount, Some(250.0));
}

/// Re-uploading an overlapping statement must not duplicate rows.
#[test]
fn test_store_merges_repeated_uploads() {
    let first = parse_statement_text(STATEMENT).unwrap();
    let second = parse_statement_text(STATEMENT).unwrap();

    let state = reduce(State::default(), Action::AddTransactions(first));
    let state = reduce(state, Action::AddTransactions(second));
    assert_eq!(state.transactions.len(), 3);

    let summary = summarize(&state.transactions);
    let state = reduce(state, Action::UpdateSummary(summary));
    assert_eq!(state.summary.as_ref().unwrap().total_transactions, 3);
}

/// The whole analysis state serializes for the JSON output surface.
#[test]
fn test_state_json_round_trip() {
    let txns = parse_statement_text(STATEMENT).unwrap();
    let state = reduce(State::default(), Action::AddTransactions(txns));
    let summary = summarize(&state.transactions);
    let state = reduce(state, Action::UpdateSummary(summary));

    let json = serde_json::to_string(&state).unwrap();
    let back: State = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}
