use std::path::{Path, PathBuf};

use clap::Parser;
use votesense_core::Environment;

use crate::{Cli, Commands};

use super::*;

/// Write `content` to a uniquely named file in the temp dir.
fn temp_file(tag: &str, ext: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "votesense-cli-{tag}-{}.{ext}",
        std::process::id()
    ));
    std::fs::write(&path, content).unwrap();
    path
}

fn test_config(candidates_path: &Path) -> AppConfig {
    AppConfig {
        env: Environment::Test,
        log_level: "info".to_string(),
        strategy: AggregationStrategy::WeightedMajority,
        rank_order: RankOrder::Input,
        candidates_path: candidates_path.to_path_buf(),
    }
}

const RECORDS: &str = r#"[
    {"candidate_id": 1, "sentiment": "positive", "sentiment_probability": 0.9},
    {"candidate_id": 1, "sentiment": "positive", "sentiment_probability": 0.6},
    {"candidate_id": 1, "sentiment": "negative", "sentiment_probability": 0.95},
    {"candidate_id": 2, "sentiment": "negative", "sentiment_probability": 0.99},
    {"candidate_id": 2, "sentiment": "negative"}
]"#;

const ROSTER: &str = "\
candidates:
  - id: 1
    name: Asha Rao
  - id: 2
    name: Ben Okafor
  - id: 3
    name: Chen Wei
";

// ---------------------------------------------------------------------------
// Argument parsing
// ---------------------------------------------------------------------------

#[test]
fn parses_aggregate_defaults() {
    let cli = Cli::try_parse_from([
        "votesense",
        "sentiment",
        "aggregate",
        "--comments",
        "c.json",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Sentiment {
            command: SentimentCommands::Aggregate {
                candidates: None,
                strategy: None,
                order: None,
                format: OutputFormat::Json,
                ..
            }
        })
    ));
}

#[test]
fn parses_aggregate_overrides() {
    let cli = Cli::try_parse_from([
        "votesense",
        "sentiment",
        "aggregate",
        "--comments",
        "c.json",
        "--candidates",
        "roster.yaml",
        "--strategy",
        "polarity",
        "--order",
        "score-desc",
        "--format",
        "markdown",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Sentiment {
            command: SentimentCommands::Aggregate {
                candidates: Some(_),
                strategy: Some(StrategyArg::Polarity),
                order: Some(OrderArg::ScoreDesc),
                format: OutputFormat::Markdown,
                ..
            }
        })
    ));
}

#[test]
fn aggregate_requires_comments() {
    assert!(Cli::try_parse_from(["votesense", "sentiment", "aggregate"]).is_err());
}

#[test]
fn rejects_unknown_strategy() {
    let result = Cli::try_parse_from([
        "votesense",
        "sentiment",
        "aggregate",
        "--comments",
        "c.json",
        "--strategy",
        "both",
    ]);
    assert!(result.is_err());
}

#[test]
fn parses_classify_command() {
    let cli =
        Cli::try_parse_from(["votesense", "sentiment", "classify", "--input", "raw.json"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Sentiment {
            command: SentimentCommands::Classify { ref input }
        }) if input == Path::new("raw.json")
    ));
}

#[test]
fn arg_enums_map_to_policy() {
    assert_eq!(
        AggregationStrategy::from(StrategyArg::Polarity),
        AggregationStrategy::PolarityCount
    );
    assert_eq!(RankOrder::from(OrderArg::ScoreDesc), RankOrder::ScoreDesc);
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

#[test]
fn aggregate_weighted_json_matches_source_shape() {
    let comments = temp_file("weighted-records", "json", RECORDS);
    let roster = temp_file("weighted-roster", "yaml", ROSTER);
    let config = test_config(&roster);

    let output = run_sentiment_aggregate(
        &config,
        &AggregateOptions {
            comments: comments.clone(),
            candidates: None,
            strategy: None,
            order: None,
            format: OutputFormat::Json,
        },
    )
    .unwrap();
    std::fs::remove_file(&comments).ok();
    std::fs::remove_file(&roster).ok();

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["strategy"], "weighted");
    assert_eq!(json["predictions"]["1"]["sentiment"], "positive");
    assert_eq!(json["predictions"]["1"]["probability"], 0.612);
    assert_eq!(json["predictions"]["2"]["sentiment"], "negative");
    assert_eq!(json["predictions"]["2"]["probability"], 1.0);
    assert_eq!(json["predictions"]["3"]["sentiment"], "neutral");
    assert_eq!(json["predictions"]["3"]["probability"], 0.5);
}

#[test]
fn aggregate_polarity_table_uses_roster_names() {
    let comments = temp_file("polarity-records", "json", RECORDS);
    let roster = temp_file("polarity-roster", "yaml", ROSTER);
    let config = test_config(Path::new("/nonexistent/candidates.yaml"));

    let output = run_sentiment_aggregate(
        &config,
        &AggregateOptions {
            comments: comments.clone(),
            candidates: Some(roster.clone()),
            strategy: Some(AggregationStrategy::PolarityCount),
            order: Some(RankOrder::ScoreDesc),
            format: OutputFormat::Table,
        },
    )
    .unwrap();
    std::fs::remove_file(&comments).ok();
    std::fs::remove_file(&roster).ok();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4, "unexpected table:\n{output}");
    assert!(lines[1].contains("Asha Rao") && lines[1].contains("0.791"));
    assert!(lines[2].contains("Ben Okafor") && lines[2].contains("0.209"));
    assert!(lines[3].contains("Chen Wei") && lines[3].contains("neutral"));
}

#[test]
fn aggregate_without_roster_uses_unknown_names() {
    let comments = temp_file("no-roster-records", "json", RECORDS);
    let config = test_config(Path::new("/nonexistent/candidates.yaml"));

    let output = run_sentiment_aggregate(
        &config,
        &AggregateOptions {
            comments: comments.clone(),
            candidates: None,
            strategy: Some(AggregationStrategy::PolarityCount),
            order: None,
            format: OutputFormat::Json,
        },
    )
    .unwrap();
    std::fs::remove_file(&comments).ok();

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    let ranking = json["ranking"].as_array().unwrap();
    assert_eq!(ranking.len(), 2);
    assert!(ranking.iter().all(|e| e["name"] == "Unknown"));
}

#[test]
fn aggregate_fails_on_missing_explicit_roster() {
    let comments = temp_file("missing-roster-records", "json", RECORDS);
    let config = test_config(Path::new("/nonexistent/candidates.yaml"));

    let result = run_sentiment_aggregate(
        &config,
        &AggregateOptions {
            comments: comments.clone(),
            candidates: Some(PathBuf::from("/nonexistent/explicit.yaml")),
            strategy: None,
            order: None,
            format: OutputFormat::Json,
        },
    );
    std::fs::remove_file(&comments).ok();

    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("explicit.yaml"), "got: {err:#}");
}

#[test]
fn aggregate_fails_on_malformed_comments_file() {
    let comments = temp_file("malformed-records", "json", "{not json");
    let config = test_config(Path::new("/nonexistent/candidates.yaml"));

    let result = run_sentiment_aggregate(
        &config,
        &AggregateOptions {
            comments: comments.clone(),
            candidates: None,
            strategy: None,
            order: None,
            format: OutputFormat::Json,
        },
    );
    std::fs::remove_file(&comments).ok();

    assert!(result.is_err());
}

#[test]
fn classify_emits_records_in_wire_shape() {
    let input = temp_file(
        "classify-input",
        "json",
        r#"[
            {"candidate_id": 1, "comment": "An honest and capable leader"},
            {"candidate_id": 2, "comment": "I don't like this party, it should not win"}
        ]"#,
    );

    let output = run_sentiment_classify(&input).unwrap();
    std::fs::remove_file(&input).ok();

    let records: Vec<RawCommentSentiment> = serde_json::from_str(&output).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].sentiment, "positive");
    assert_eq!(records[1].sentiment, "negative");
    assert!(records
        .iter()
        .all(|r| r.sentiment_probability.is_some_and(|p| (0.0..=1.0).contains(&p))));
}
