//! Converts the markdown quiz bank into the quiz application's JSON data file.

pub mod config;
pub mod error;
pub mod report;

use std::fs;
use std::path::Path;

use quiz_bank_core::{BankSummary, Dialect, KeywordImageClassifier, QuizBankParser, TopicGroup};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use config::Config;
pub use error::{ConvertError, Result};

/// Logs go to stderr; stdout carries the progress report.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ConvertError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a dialect file; fields it leaves out keep their defaults.
pub fn load_dialect(path: Option<&Path>) -> Result<Dialect> {
    let Some(path) = path else {
        return Ok(Dialect::default());
    };
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|source| ConvertError::InvalidDialect {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse the bank at `path`.
pub fn load_bank(path: &Path, dialect: Dialect) -> Result<Vec<TopicGroup>> {
    let content = read_file(path)?;
    let parser = QuizBankParser::new(dialect, KeywordImageClassifier::default());
    Ok(parser.parse(&content))
}

/// Write the quiz data file, creating its directory when missing.
pub fn write_quiz_data(path: &Path, groups: &[TopicGroup]) -> Result<()> {
    let json = quiz_bank_core::to_json(groups)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ConvertError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, json).map_err(|source| ConvertError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert the configured bank and return its summary.
///
/// Nothing is written unless the dialect and the bank were both read.
pub fn convert(config: &Config) -> Result<BankSummary> {
    let dialect = load_dialect(config.dialect.as_deref())?;
    let groups = load_bank(&config.input, dialect)?;
    write_quiz_data(&config.output, &groups)?;
    Ok(BankSummary::from_groups(&groups))
}

/// Summarize an existing quiz data file.
pub fn count(path: &Path) -> Result<BankSummary> {
    let content = read_file(path)?;
    Ok(BankSummary::from_json(&content)?)
}

/// Entry point of `quiz-bank-converter`.
pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env();
    tracing::debug!(?config, "loaded configuration");

    println!("Reading quiz bank from: {}", config.input.display());
    let summary = convert(&config)?;
    println!("{}", report::parsed(&summary));
    println!("\nWriting to: {}", config.output.display());
    tracing::info!(
        topics = summary.topic_count(),
        questions = summary.total_questions,
        "quiz data written"
    );
    println!("Conversion complete!");

    Ok(())
}

/// Entry point of `count-questions`.
pub fn run_count() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env();
    let summary = count(&config.output)?;
    println!("{}", report::counted(&summary));

    Ok(())
}
