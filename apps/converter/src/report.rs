//! Console progress report.

use std::fmt::Write;

use quiz_bank_core::BankSummary;

/// Report printed after parsing a bank.
pub fn parsed(summary: &BankSummary) -> String {
    let mut out = format!("Parsed {} topics\n", summary.topic_count());
    for topic in &summary.topics {
        let _ = writeln!(out, "  - {}: {} questions", topic.topic, topic.questions);
    }
    let _ = write!(out, "Total questions: {}", summary.total_questions);
    out
}

/// Report printed by `count-questions`.
pub fn counted(summary: &BankSummary) -> String {
    let mut out = String::new();
    for topic in &summary.topics {
        let _ = writeln!(out, "{}: {} questions", topic.topic, topic.questions);
    }
    let _ = write!(out, "\nTotal: {} questions", summary.total_questions);
    out
}
