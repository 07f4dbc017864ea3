use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use paisa_core::Category;
use paisa_finance::store::{Action, State, reduce};
use paisa_finance::summary::summarize;
use paisa_finance::classify;
use paisa_ingest::errors::{ExtractionFailure, ParseError};
use paisa_ingest::parsers::phonepe::parse_statement_text;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "paisa", version, about = "PhonePe statement analyzer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze extracted statement text files
    Analyze {
        /// Statement text files (output of the PDF text extraction step)
        files: Vec<PathBuf>,

        /// Limit number of transactions printed (default: 10)
        #[arg(long, default_value_t = 10)]
        limit: usize,

        /// Emit the full analysis as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Analyze { files, limit, json } => analyze(files, limit, json),
    }
}

fn analyze(files: Vec<PathBuf>, limit: usize, json: bool) -> Result<()> {
    if files.is_empty() {
        bail!("no statement files given (pass one or more text files)");
    }

    let mut state = State::default();

    for path in &files {
        let text = std::fs::read_to_string(path).map_err(|err| {
            let failure = ExtractionFailure::from_reason(&err.to_string());
            anyhow::anyhow!("{}: {}", path.display(), failure.guidance())
        })?;

        let txns = match parse_statement_text(&text) {
            Ok(txns) => txns,
            Err(ParseError::Extraction(failure)) => {
                bail!("{}: {}", path.display(), failure.guidance());
            }
            Err(err @ ParseError::NoTransactions) => {
                return Err(err).with_context(|| {
                    format!(
                        "{}: is this a PhonePe transaction statement?",
                        path.display()
                    )
                });
            }
        };

        state = reduce(state, Action::AddTransactions(txns));
    }

    let summary = summarize(&state.transactions);
    state = reduce(state, Action::UpdateSummary(summary));

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print_report(&state, limit);
    }

    Ok(())
}

fn print_report(state: &State, limit: usize) {
    let Some(summary) = &state.summary else {
        return;
    };

    println!("Transactions: {}", summary.total_transactions);
    println!("Total amount: ₹{:.2}", summary.total_amount);
    if let Some(avg) = summary.average_amount {
        println!("Average:      ₹{avg:.2}");
    }
    if let (Some(min), Some(max)) = (summary.min_amount, summary.max_amount) {
        println!("Range:        ₹{min:.2} – ₹{max:.2}");
    }
    println!(
        "Debits:       {} totalling ₹{:.2}",
        summary.debit.count, summary.debit.total
    );
    println!(
        "Credits:      {} totalling ₹{:.2}",
        summary.credit.count, summary.credit.total
    );

    println!("\nBy category:");
    for category in Category::ALL {
        let Some(totals) = summary.category_breakdown.get(&category) else {
            continue;
        };
        println!(
            "  {:<18} {:>4} | ₹{:.2}",
            category.label(),
            totals.count,
            totals.total
        );
    }

    println!("\nLatest transactions:");
    for txn in state.transactions.iter().take(limit) {
        println!(
            "  {} | {:<6} | ₹{:>10} | {} [{}]",
            txn.date,
            txn.kind,
            txn.amount,
            txn.description,
            classify(&txn.description).label()
        );
    }
    if state.transactions.len() > limit {
        println!("  ... and {} more", state.transactions.len() - limit);
    }
}
