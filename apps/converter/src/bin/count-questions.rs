//! Prints per-topic question counts of an existing quiz data file.

fn main() -> anyhow::Result<()> {
    quiz_bank_converter::run_count()
}
