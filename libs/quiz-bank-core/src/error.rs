//! Error types for quiz-bank-core.

use thiserror::Error;

/// Result type alias using QuizBankError.
pub type Result<T> = std::result::Result<T, QuizBankError>;

/// Errors that can occur while encoding or reading quiz data.
///
/// Parsing the markdown bank never fails; malformed lines are skipped.
#[derive(Debug, Error)]
pub enum QuizBankError {
    #[error("failed to encode quiz data")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode quiz data")]
    Decode(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn decode_error_keeps_serde_cause_as_source() {
        let cause = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let cause_text = cause.to_string();
        let error = QuizBankError::Decode(cause);
        assert_eq!(error.to_string(), "failed to decode quiz data");
        assert_eq!(error.source().map(|s| s.to_string()), Some(cause_text));
    }
}
