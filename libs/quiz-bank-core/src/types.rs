//! Core types for the quiz data file.

use serde::{Deserialize, Serialize};

/// Question type discriminant as written in the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    FillInTheBlank,
    Matching,
    Ranking,
}

/// Option of a multiple-choice or fill-in-the-blank question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    pub text: String,
    pub is_correct: bool,
}

impl ChoiceOption {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }
}

/// One symbol/description pair of a matching question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingPair {
    pub symbol: String,
    pub description: String,
    pub is_correct: bool,
}

impl MatchingPair {
    /// Create a pair. Every pair is a correct association.
    pub fn new(symbol: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            description: description.into(),
            is_correct: true,
        }
    }
}

/// Entry of a ranking question; `rank` carries the expected position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedOption {
    pub text: String,
    pub is_correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u64>,
}

/// Question body, discriminated by question type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice { options: Vec<ChoiceOption> },
    FillInTheBlank { options: Vec<ChoiceOption> },
    Matching { options: Vec<MatchingPair> },
    Ranking { options: Vec<RankedOption> },
}

impl QuestionKind {
    pub fn question_type(&self) -> QuestionType {
        match self {
            Self::MultipleChoice { .. } => QuestionType::MultipleChoice,
            Self::FillInTheBlank { .. } => QuestionType::FillInTheBlank,
            Self::Matching { .. } => QuestionType::Matching,
            Self::Ranking { .. } => QuestionType::Ranking,
        }
    }

    pub fn option_count(&self) -> usize {
        match self {
            Self::MultipleChoice { options } | Self::FillInTheBlank { options } => options.len(),
            Self::Matching { options } => options.len(),
            Self::Ranking { options } => options.len(),
        }
    }

    /// True only for multiple choice with more than one correct option.
    pub fn multi_select(&self) -> bool {
        match self {
            Self::MultipleChoice { options } => options.iter().filter(|o| o.is_correct).count() > 1,
            _ => false,
        }
    }
}

/// A single quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "QuestionRecord", from = "QuestionRecord")]
pub struct Question {
    /// `{topic}_{n}`, counting from 1 within the topic.
    pub id: String,
    pub text: String,
    pub kind: QuestionKind,
    pub explanation: String,
    pub image: Option<String>,
}

impl Question {
    pub fn question_type(&self) -> QuestionType {
        self.kind.question_type()
    }

    pub fn multi_select(&self) -> bool {
        self.kind.multi_select()
    }

    pub fn option_count(&self) -> usize {
        self.kind.option_count()
    }
}

/// Wire shape of a question as read by the quiz application.
#[derive(Serialize, Deserialize)]
struct QuestionRecord {
    id: String,
    question: String,
    #[serde(flatten)]
    kind: QuestionKind,
    #[serde(default)]
    explanation: String,
    #[serde(rename = "multiSelect", default)]
    multi_select: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
}

impl From<Question> for QuestionRecord {
    fn from(q: Question) -> Self {
        let multi_select = q.multi_select();
        Self {
            id: q.id,
            question: q.text,
            kind: q.kind,
            explanation: q.explanation,
            multi_select,
            image: q.image,
        }
    }
}

impl From<QuestionRecord> for Question {
    // multiSelect is derived from the options, so the stored flag is dropped.
    fn from(r: QuestionRecord) -> Self {
        Self {
            id: r.id,
            text: r.question,
            kind: r.kind,
            explanation: r.explanation,
            image: r.image,
        }
    }
}

/// Questions grouped under one topic header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicGroup {
    pub topic: String,
    pub questions: Vec<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn question(kind: QuestionKind) -> Question {
        Question {
            id: "Bits_1".to_string(),
            text: "Pick one".to_string(),
            kind,
            explanation: String::new(),
            image: None,
        }
    }

    #[test]
    fn multi_select_counts_correct_options() {
        let single = QuestionKind::MultipleChoice {
            options: vec![ChoiceOption::new("a", true), ChoiceOption::new("b", false)],
        };
        let multi = QuestionKind::MultipleChoice {
            options: vec![ChoiceOption::new("a", true), ChoiceOption::new("b", true)],
        };
        assert!(!single.multi_select());
        assert!(multi.multi_select());
    }

    #[test]
    fn fill_in_the_blank_is_never_multi_select() {
        let kind = QuestionKind::FillInTheBlank {
            options: vec![ChoiceOption::new("a", true), ChoiceOption::new("b", true)],
        };
        assert!(!kind.multi_select());
    }

    #[test]
    fn serializes_wire_keys() {
        let q = question(QuestionKind::MultipleChoice {
            options: vec![ChoiceOption::new("a", true)],
        });
        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "Bits_1",
                "question": "Pick one",
                "type": "multiple_choice",
                "options": [{ "text": "a", "isCorrect": true }],
                "explanation": "",
                "multiSelect": false
            })
        );
    }

    #[test]
    fn key_order_is_stable() {
        let mut q = question(QuestionKind::FillInTheBlank {
            options: vec![ChoiceOption::new("a", true)],
        });
        q.image = Some("logic_interface.png".to_string());
        let text = serde_json::to_string(&q).unwrap();
        let keys = [
            "\"id\"",
            "\"question\"",
            "\"type\"",
            "\"options\"",
            "\"explanation\"",
            "\"multiSelect\"",
            "\"image\"",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|key| text.find(key).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn ranking_omits_missing_rank() {
        let q = question(QuestionKind::Ranking {
            options: vec![
                RankedOption { text: "first".into(), is_correct: false, rank: Some(1) },
                RankedOption { text: "loose".into(), is_correct: false, rank: None },
            ],
        });
        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(value["options"][0]["rank"], json!(1));
        assert!(value["options"][1].get("rank").is_none());
    }

    #[test]
    fn matching_pairs_are_correct() {
        let pair = MatchingPair::new("&", "Bitwise AND");
        let value = serde_json::to_value(&pair).unwrap();
        assert_eq!(
            value,
            json!({ "symbol": "&", "description": "Bitwise AND", "isCorrect": true })
        );
    }

    #[test]
    fn deserializes_tagged_question() {
        let value = json!({
            "id": "Ops_2",
            "question": "Match the operators",
            "type": "matching",
            "options": [{ "symbol": "|", "description": "Bitwise OR", "isCorrect": true }],
            "explanation": "",
            "multiSelect": false
        });
        let q: Question = serde_json::from_value(value).unwrap();
        assert_eq!(q.question_type(), QuestionType::Matching);
        assert_eq!(q.text, "Match the operators");
        assert_eq!(
            q.kind,
            QuestionKind::Matching { options: vec![MatchingPair::new("|", "Bitwise OR")] }
        );
    }

    #[test]
    fn question_type_names() {
        assert_eq!(
            serde_json::to_value(QuestionType::MultipleChoice).unwrap(),
            json!("multiple_choice")
        );
    }
}
