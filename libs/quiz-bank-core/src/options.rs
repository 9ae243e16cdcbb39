//! Option line parsing.
//!
//! How a line is read depends on the [`OptionMode`] picked from the
//! question text before the option block starts:
//!
//! ```text
//! & Bitwise AND        matching: symbol, description
//! Desk-checking 1      ranking: text, rank 1
//! 0.104 ms 1           plain: text "0.104 ms", correct
//! 1. Enable pin        plain: text "Enable pin", not correct
//! ```

use crate::dialect::Dialect;
use crate::types::{ChoiceOption, MatchingPair, RankedOption};

/// How option lines of a question are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMode {
    Plain,
    Matching,
    Ranking,
}

impl OptionMode {
    /// Pick the mode from keywords in the question text. Matching wins over ranking.
    pub fn for_question(text: &str, dialect: &Dialect) -> Self {
        if dialect.mentions_matching(text) {
            Self::Matching
        } else if dialect.mentions_ranking(text) {
            Self::Ranking
        } else {
            Self::Plain
        }
    }

    /// Consecutive blank lines that end the option block.
    pub fn blank_run_limit(self, dialect: &Dialect) -> usize {
        match self {
            Self::Matching => dialect.matching_blank_run_limit,
            Self::Plain | Self::Ranking => dialect.blank_run_limit,
        }
    }
}

/// Options collected for one question, shaped by the mode they were read in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionBlock {
    Plain(Vec<ChoiceOption>),
    Matching(Vec<MatchingPair>),
    Ranking(Vec<RankedOption>),
}

impl OptionBlock {
    pub fn new(mode: OptionMode) -> Self {
        match mode {
            OptionMode::Plain => Self::Plain(Vec::new()),
            OptionMode::Matching => Self::Matching(Vec::new()),
            OptionMode::Ranking => Self::Ranking(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Plain(options) => options.len(),
            Self::Matching(options) => options.len(),
            Self::Ranking(options) => options.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse `line` in this block's mode and keep the option if one results.
    ///
    /// Returns whether an option was added.
    pub fn push_line(&mut self, line: &str, dialect: &Dialect) -> bool {
        match self {
            Self::Plain(options) => push_some(options, parse_plain(line, dialect)),
            Self::Matching(options) => push_some(options, parse_matching(line)),
            Self::Ranking(options) => push_some(options, parse_ranked(line, dialect)),
        }
    }
}

fn push_some<T>(options: &mut Vec<T>, option: Option<T>) -> bool {
    match option {
        Some(option) => {
            options.push(option);
            true
        }
        None => false,
    }
}

/// Parse `symbol description`, split on the first whitespace run.
pub fn parse_matching(line: &str) -> Option<MatchingPair> {
    let (symbol, description) = line.trim().split_once(char::is_whitespace)?;
    let (symbol, description) = (symbol.trim(), description.trim());
    if symbol.is_empty() || description.is_empty() {
        return None;
    }
    Some(MatchingPair::new(symbol, description))
}

/// Parse a plain option: optional `N. ` prefix, optional trailing marker.
pub fn parse_plain(line: &str, dialect: &Dialect) -> Option<ChoiceOption> {
    let (text, is_correct) = strip_option_cues(line, dialect);
    keep_text(text, dialect).map(|text| ChoiceOption::new(text, is_correct))
}

/// Parse a ranking option. A trailing integer is the rank; a correctness
/// marker is removed from the text but never counts.
pub fn parse_ranked(line: &str, dialect: &Dialect) -> Option<RankedOption> {
    let (rest, rank) = split_rank(line.trim());
    let (text, _) = strip_option_cues(rest, dialect);
    keep_text(text, dialect).map(|text| RankedOption {
        text: text.to_string(),
        is_correct: false,
        rank,
    })
}

fn keep_text<'a>(text: &'a str, dialect: &Dialect) -> Option<&'a str> {
    if text.is_empty() || text == dialect.image_token {
        None
    } else {
        Some(text)
    }
}

fn strip_option_cues<'a>(line: &'a str, dialect: &Dialect) -> (&'a str, bool) {
    let body = strip_ordinal(line.trim());
    split_correct_marker(body, &dialect.correct_marker)
}

/// Remove a `N. ` list prefix. A decimal such as `0.104` has no space after
/// the period and is left alone.
pub fn strip_ordinal(line: &str) -> &str {
    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return line;
    }
    let Some(after_dot) = line[digits..].strip_prefix('.') else {
        return line;
    };
    if !after_dot.starts_with(char::is_whitespace) {
        return line;
    }
    match after_dot.trim_start() {
        "" => line,
        rest => rest,
    }
}

/// Split a trailing whitespace-separated marker off the text.
///
/// A marker glued to the text (`41`, `v1`) stays part of it, and a line that
/// is only the marker is text.
pub fn split_correct_marker<'a>(text: &'a str, marker: &str) -> (&'a str, bool) {
    if let Some(head) = text.strip_suffix(marker) {
        if head.ends_with(char::is_whitespace) {
            let head = head.trim_end();
            if !head.is_empty() {
                return (head, true);
            }
        }
    }
    (text, false)
}

/// Split a trailing whitespace-separated integer off the line.
pub fn split_rank(line: &str) -> (&str, Option<u64>) {
    let Some(idx) = line.rfind(char::is_whitespace) else {
        return (line, None);
    };
    let tail = line[idx..].trim_start();
    if tail.is_empty() || !tail.chars().all(|c| c.is_ascii_digit()) {
        return (line, None);
    }
    match tail.parse::<u64>() {
        Ok(rank) => (line[..idx].trim_end(), Some(rank)),
        Err(err) => {
            tracing::debug!(line, %err, "rank out of range, keeping it as text");
            (line, None)
        }
    }
}
