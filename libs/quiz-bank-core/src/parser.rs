//! Markdown parser for quiz bank files.
//!
//! # Format
//! ```markdown
//! ##### Bit Manipulation
//!
//! **Which operator sets a bit?**
//! &
//! | 1
//! ^
//!
//!
//! **Which sensor is shown?**
//! IMAGE
//! Capacitive 1
//! Resistive
//! ```
//!
//! A line starting with `#####` opens a topic. Any other non-blank line
//! starts a question; lines wrapped in `**` on both ends continue a rich
//! question. An `IMAGE` line right after the question marks it as
//! illustrated. Option lines follow until a run of blank lines, a new topic,
//! or a new rich question.

use crate::classify::classify;
use crate::cursor::LineCursor;
use crate::dialect::Dialect;
use crate::image::{ImageClassifier, KeywordImageClassifier};
use crate::options::{OptionBlock, OptionMode};
use crate::types::{Question, QuestionKind, TopicGroup};

/// Parse a quiz bank with the default dialect and image table.
pub fn parse(content: &str) -> Vec<TopicGroup> {
    QuizBankParser::<KeywordImageClassifier>::default().parse(content)
}

/// Single-pass quiz bank parser.
pub struct QuizBankParser<C = KeywordImageClassifier> {
    dialect: Dialect,
    images: C,
}

impl Default for QuizBankParser {
    fn default() -> Self {
        Self::new(Dialect::default(), KeywordImageClassifier::default())
    }
}

impl<C: ImageClassifier> QuizBankParser<C> {
    pub fn new(dialect: Dialect, images: C) -> Self {
        Self { dialect, images }
    }

    /// Parse the whole document into topic groups.
    pub fn parse(&self, content: &str) -> Vec<TopicGroup> {
        let mut cursor = LineCursor::new(content);
        let mut groups = Vec::new();
        let mut current: Option<TopicBuilder> = None;

        while let Some(line) = cursor.peek() {
            if line.is_empty() {
                cursor.advance();
                continue;
            }

            if let Some(name) = self.dialect.topic_header(line) {
                flush(current.take(), &mut groups);
                current = Some(TopicBuilder::new(name));
                cursor.advance();
                continue;
            }

            let Some(draft) = self.read_question(&mut cursor) else {
                continue;
            };

            match current.as_mut() {
                Some(topic) => topic.push(draft),
                None => tracing::debug!(text = %draft.text, "dropping question outside of a topic"),
            }
        }

        flush(current, &mut groups);
        groups
    }

    /// Read one question starting at the cursor. Always consumes the
    /// question line; returns `None` when nothing worth keeping was found.
    fn read_question(&self, cursor: &mut LineCursor<'_>) -> Option<DraftQuestion> {
        let line = cursor.next_line()?;
        let first = self.dialect.question_text(line);
        if first.is_empty() {
            return None;
        }

        let mut text = first.to_string();
        if self.dialect.is_rich(line) {
            while let Some(next) = cursor.peek() {
                if next.is_empty() || !self.dialect.is_rich(next) {
                    break;
                }
                text.push('\n');
                text.push_str(self.dialect.question_text(next));
                cursor.advance();
            }
        }

        let mut image = None;
        if self.take_image_cue(cursor) {
            image = self.images.classify(&text);
            if image.is_none() {
                text.push_str(&self.dialect.missing_image_suffix);
            }
        }

        let block = self.read_options(cursor, OptionMode::for_question(&text, &self.dialect));
        match classify(&text, block, &self.dialect) {
            Some(kind) => Some(DraftQuestion { text, kind, image }),
            None => {
                tracing::debug!(text = %text, "dropping question without options");
                None
            }
        }
    }

    /// Consume an image placeholder that follows, possibly after blank lines.
    fn take_image_cue(&self, cursor: &mut LineCursor<'_>) -> bool {
        match cursor.skip_to_non_blank() {
            Some((idx, line)) if line == self.dialect.image_token => {
                cursor.seek(idx + 1);
                true
            }
            _ => false,
        }
    }

    fn read_options(&self, cursor: &mut LineCursor<'_>, mode: OptionMode) -> OptionBlock {
        let limit = mode.blank_run_limit(&self.dialect);
        let mut block = OptionBlock::new(mode);
        let mut blanks = 0;

        while let Some(line) = cursor.peek() {
            if line.is_empty() {
                blanks += 1;
                if blanks >= limit {
                    break;
                }
                cursor.advance();
                continue;
            }
            blanks = 0;

            if self.dialect.is_header(line) || self.dialect.is_rich(line) {
                break;
            }
            if !block.push_line(line, &self.dialect) {
                tracing::debug!(line, "skipping option line");
            }
            cursor.advance();
        }

        block
    }
}

/// Question whose id is assigned once it joins a topic.
struct DraftQuestion {
    text: String,
    kind: QuestionKind,
    image: Option<String>,
}

struct TopicBuilder {
    topic: String,
    questions: Vec<Question>,
}

impl TopicBuilder {
    fn new(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
            questions: Vec::new(),
        }
    }

    fn push(&mut self, draft: DraftQuestion) {
        let id = format!("{}_{}", self.topic, self.questions.len() + 1);
        self.questions.push(Question {
            id,
            text: draft.text,
            kind: draft.kind,
            explanation: String::new(),
            image: draft.image,
        });
    }
}

fn flush(topic: Option<TopicBuilder>, groups: &mut Vec<TopicGroup>) {
    let Some(topic) = topic else {
        return;
    };
    if topic.topic.is_empty() || topic.questions.is_empty() {
        tracing::debug!(topic = %topic.topic, "skipping empty topic");
        return;
    }
    groups.push(TopicGroup {
        topic: topic.topic,
        questions: topic.questions,
    });
}
