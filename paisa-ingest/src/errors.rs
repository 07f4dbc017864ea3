//! Error taxonomy for the extraction boundary and the parser.
//!
//! The PDF-to-text step is an external collaborator; the core only sees its
//! failure message. `ExtractionFailure` classifies that message so callers can
//! show the right guidance, and `ParseError` separates "extraction broke" from
//! "this text holds no transactions" — the caller handles the two differently.

use thiserror::Error;

/// Why the upstream text extraction step produced no usable text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionFailure {
    #[error("the PDF is password protected")]
    PasswordProtected,
    #[error("the PDF does not allow content extraction")]
    ExtractionRestricted,
    #[error("text extraction failed: {0}")]
    Unknown(String),
}

impl ExtractionFailure {
    /// Classify a failure message propagated from the extraction collaborator.
    pub fn from_reason(reason: &str) -> Self {
        let lower = reason.to_lowercase();
        if lower.contains("password") {
            ExtractionFailure::PasswordProtected
        } else if lower.contains("content extraction") || lower.contains("restrict") {
            ExtractionFailure::ExtractionRestricted
        } else {
            ExtractionFailure::Unknown(reason.to_string())
        }
    }

    /// User-facing guidance for this failure.
    pub fn guidance(&self) -> &'static str {
        match self {
            ExtractionFailure::PasswordProtected => {
                "This PDF is password protected. Please provide the password and try again."
            }
            ExtractionFailure::ExtractionRestricted => {
                "This PDF has restrictions that prevent content extraction. Please check the PDF permissions."
            }
            ExtractionFailure::Unknown(_) => {
                "An unknown error occurred while processing the PDF."
            }
        }
    }
}

/// Terminal parse outcomes. Neither is retryable for the same input, and no
/// partial transaction list accompanies either.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Extraction(#[from] ExtractionFailure),
    #[error("no transactions found in the statement text")]
    NoTransactions,
}
