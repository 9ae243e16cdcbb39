//! JSON encoding of the quiz data file.

use crate::error::{QuizBankError, Result};
use crate::types::TopicGroup;

/// Encode topic groups as pretty JSON with two-space indentation.
///
/// Non-ASCII text is written as is.
pub fn to_json(groups: &[TopicGroup]) -> Result<String> {
    serde_json::to_string_pretty(groups).map_err(QuizBankError::Encode)
}

/// Decode a quiz data file back into topic groups.
pub fn from_json(content: &str) -> Result<Vec<TopicGroup>> {
    serde_json::from_str(content).map_err(QuizBankError::Decode)
}
