//! Per-topic question counts.

use serde::Deserialize;

use crate::error::{QuizBankError, Result};
use crate::types::TopicGroup;

/// Question count for one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicCount {
    pub topic: String,
    pub questions: usize,
}

/// Question counts for a whole bank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BankSummary {
    pub topics: Vec<TopicCount>,
    pub total_questions: usize,
}

/// Topic as plain data; questions are only counted.
#[derive(Deserialize)]
struct PlainTopic {
    topic: String,
    questions: Vec<serde_json::Value>,
}

impl BankSummary {
    pub fn from_groups(groups: &[TopicGroup]) -> Self {
        Self::from_counts(
            groups
                .iter()
                .map(|g| TopicCount { topic: g.topic.clone(), questions: g.questions.len() }),
        )
    }

    /// Count questions in a quiz data file without interpreting them.
    pub fn from_json(content: &str) -> Result<Self> {
        let topics: Vec<PlainTopic> =
            serde_json::from_str(content).map_err(QuizBankError::Decode)?;
        Ok(Self::from_counts(
            topics
                .into_iter()
                .map(|t| TopicCount { topic: t.topic, questions: t.questions.len() }),
        ))
    }

    fn from_counts(counts: impl Iterator<Item = TopicCount>) -> Self {
        let topics: Vec<TopicCount> = counts.collect();
        let total_questions = topics.iter().map(|t| t.questions).sum();
        Self { topics, total_questions }
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }
}
