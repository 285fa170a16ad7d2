//! Sentiment command handlers for the CLI.

mod input;

use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{Subcommand, ValueEnum};
use votesense_core::{AggregationStrategy, AppConfig, RankOrder};
use votesense_sentiment::{
    aggregator_for, build_ranking, classify_comments, render_markdown, render_table,
    run_sentiment, LexiconClassifier, RawCommentSentiment, SentimentPayload,
};

use self::input::{read_comment_texts, read_records, resolve_roster};

/// Sub-commands available under `sentiment`.
#[derive(Debug, Subcommand)]
pub enum SentimentCommands {
    /// Aggregate comment records into one verdict per candidate
    Aggregate {
        /// JSON array of `{candidate_id, sentiment, sentiment_probability}` records
        #[arg(long)]
        comments: PathBuf,

        /// Candidate roster YAML (defaults to VOTESENSE_CANDIDATES_PATH)
        #[arg(long)]
        candidates: Option<PathBuf>,

        /// Override the configured aggregation strategy for this run
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,

        /// Override the configured ranking order
        #[arg(long, value_enum)]
        order: Option<OrderArg>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Label raw comment text with the lexicon classifier
    Classify {
        /// JSON array of `{candidate_id, comment}` objects
        #[arg(long)]
        input: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Weighted,
    Polarity,
}

impl From<StrategyArg> for AggregationStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Weighted => AggregationStrategy::WeightedMajority,
            StrategyArg::Polarity => AggregationStrategy::PolarityCount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    Input,
    ScoreDesc,
}

impl From<OrderArg> for RankOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Input => RankOrder::Input,
            OrderArg::ScoreDesc => RankOrder::ScoreDesc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Markdown,
}

/// Dispatch a `sentiment` sub-command and return what should be printed.
///
/// # Errors
///
/// Returns an error if an input file cannot be read or parsed.
pub(crate) fn run(config: &AppConfig, command: SentimentCommands) -> anyhow::Result<String> {
    match command {
        SentimentCommands::Aggregate {
            comments,
            candidates,
            strategy,
            order,
            format,
        } => run_sentiment_aggregate(
            config,
            &AggregateOptions {
                comments,
                candidates,
                strategy: strategy.map(Into::into),
                order: order.map(Into::into),
                format,
            },
        ),
        SentimentCommands::Classify { input } => run_sentiment_classify(&input),
    }
}

#[derive(Debug)]
pub(crate) struct AggregateOptions {
    pub comments: PathBuf,
    pub candidates: Option<PathBuf>,
    pub strategy: Option<AggregationStrategy>,
    pub order: Option<RankOrder>,
    pub format: OutputFormat,
}

/// Run one aggregation over a records file.
///
/// Flags override the configured strategy and order for this invocation
/// only; a single run never mixes strategies.
///
/// # Errors
///
/// Returns an error if the records or roster cannot be loaded.
pub(crate) fn run_sentiment_aggregate(
    config: &AppConfig,
    options: &AggregateOptions,
) -> anyhow::Result<String> {
    let strategy = options.strategy.unwrap_or(config.strategy);
    let order = options.order.unwrap_or(config.rank_order);

    let records = read_records(&options.comments)?;
    let roster = resolve_roster(config, options.candidates.as_deref())?;

    let aggregator = aggregator_for(strategy);
    let run = run_sentiment(aggregator.as_ref(), &roster, &records);

    if !run.rejected.is_empty() {
        tracing::warn!(
            rejected = run.rejected.len(),
            total = records.len(),
            "some comment records were invalid and skipped"
        );
    }

    let output = match options.format {
        OutputFormat::Json => {
            let payload = SentimentPayload::from_run(&run, &roster, order);
            let mut json = serde_json::to_string_pretty(&payload)
                .context("failed to serialize sentiment payload")?;
            json.push('\n');
            json
        }
        OutputFormat::Table => render_table(&build_ranking(&run.verdicts, &roster, order)),
        OutputFormat::Markdown => render_markdown(
            &build_ranking(&run.verdicts, &roster, order),
            strategy,
            Utc::now(),
        ),
    };

    Ok(output)
}

/// Classify raw comments and emit records in the persistence wire shape.
///
/// # Errors
///
/// Returns an error if the input cannot be read or a classification is
/// out of range.
pub(crate) fn run_sentiment_classify(input: &std::path::Path) -> anyhow::Result<String> {
    let comments = read_comment_texts(input)?;
    let records = classify_comments(&LexiconClassifier, &comments)?;

    tracing::info!(comments = records.len(), "classified comments");

    let raw: Vec<RawCommentSentiment> = records.into_iter().map(Into::into).collect();
    let mut json =
        serde_json::to_string_pretty(&raw).context("failed to serialize comment records")?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
#[path = "sentiment_test.rs"]
mod tests;
