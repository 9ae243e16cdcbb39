//! Core quiz bank library used by the converter binaries.
//!
//! Provides:
//! - Line-oriented parser for the markdown quiz bank dialect
//! - Option line parsing and question type classification
//! - Image lookup seam for illustrated questions
//! - JSON encoding of the quiz data file and per-topic summaries

pub mod classify;
pub mod cursor;
pub mod dialect;
pub mod error;
pub mod image;
pub mod options;
pub mod output;
pub mod parser;
pub mod summary;
pub mod types;

pub use classify::classify;
pub use dialect::Dialect;
pub use error::{QuizBankError, Result};
pub use image::{ImageClassifier, KeywordImageClassifier};
pub use output::{from_json, to_json};
pub use parser::{parse, QuizBankParser};
pub use summary::{BankSummary, TopicCount};
pub use types::{
    ChoiceOption, MatchingPair, Question, QuestionKind, QuestionType, RankedOption, TopicGroup,
};
