//! Structural tokens of the quiz bank markup.

use serde::{Deserialize, Serialize};

/// Markup constants recognized by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dialect {
    /// Prefix of a topic header line.
    pub topic_marker: String,
    /// Emphasis marker wrapping rich question lines on both ends.
    pub emphasis: String,
    /// Placeholder line announcing a diagram.
    pub image_token: String,
    /// Appended to the question text when no image file is known.
    pub missing_image_suffix: String,
    /// Lowercase keyword marking a matching question.
    pub matching_keyword: String,
    /// Lowercase keyword marking a ranking question.
    pub ranking_keyword: String,
    /// Trailing token marking a correct option.
    pub correct_marker: String,
    /// Blank lines that end an ordinary option block.
    pub blank_run_limit: usize,
    /// Blank lines that end a matching option block.
    pub matching_blank_run_limit: usize,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            topic_marker: "#####".to_string(),
            emphasis: "**".to_string(),
            image_token: "IMAGE".to_string(),
            missing_image_suffix: " (See image)".to_string(),
            matching_keyword: "match".to_string(),
            ranking_keyword: "sort".to_string(),
            correct_marker: "1".to_string(),
            blank_run_limit: 2,
            matching_blank_run_limit: 4,
        }
    }
}

impl Dialect {
    /// Topic name if `line` is a header.
    pub fn topic_header<'a>(&self, line: &'a str) -> Option<&'a str> {
        line.strip_prefix(self.topic_marker.as_str()).map(str::trim)
    }

    pub fn is_header(&self, line: &str) -> bool {
        line.starts_with(self.topic_marker.as_str())
    }

    /// Whether the line is wrapped in emphasis markers on both ends.
    pub fn is_rich(&self, line: &str) -> bool {
        line.starts_with(self.emphasis.as_str()) && line.ends_with(self.emphasis.as_str())
    }

    /// Question text of a question line: surrounding emphasis characters and
    /// whitespace removed.
    pub fn question_text<'a>(&self, line: &'a str) -> &'a str {
        line.trim_matches(|c: char| self.emphasis.contains(c)).trim()
    }

    pub fn mentions_matching(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.matching_keyword)
    }

    pub fn mentions_ranking(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.ranking_keyword)
    }
}
