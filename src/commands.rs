//! Command handlers for bosun CLI.

use std::path::PathBuf;
use std::process::ExitCode;

use crate::candidate::{self, StaticBacklog};
use crate::config::Config;
use crate::errors::Error;
use crate::intent::IntentScorer;
use crate::lexicon::Lexicon;
use crate::output::*;
use crate::pipeline::{Pipeline, TriageOutcome};
use crate::similarity::SimilarityEngine;

/// Commands supported by bosun CLI.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Classify one message: request filter, score, category, title
    Analyze {
        /// Message text
        text: String,
    },
    /// Compute the request score for one message
    Score {
        /// Message text
        text: String,
    },
    /// Rank open candidates at least threshold-similar to a title
    Duplicates {
        /// Query title
        title: String,

        /// JSON file with the candidate snapshot
        #[arg(short = 'c', long)]
        candidates: PathBuf,

        /// Similarity threshold (default: configured duplicate threshold)
        #[arg(short = 't', long)]
        threshold: Option<f64>,
    },
    /// Exploratory low-threshold similar-title search
    Similar {
        /// Query title
        title: String,

        /// JSON file with the candidate snapshot
        #[arg(short = 'c', long)]
        candidates: PathBuf,

        /// Maximum number of results (default: 5)
        #[arg(short = 'l', long, default_value = "5")]
        limit: usize,

        /// Similarity floor (default: configured similar threshold)
        #[arg(long)]
        min_threshold: Option<f64>,
    },
    /// Per-algorithm similarity breakdown of two titles
    Compare {
        /// First title
        first: String,
        /// Second title
        second: String,
    },
    /// Run the full intake flow for one message against a candidate file
    Triage {
        /// Message text
        text: String,

        /// JSON file with the candidate snapshot
        #[arg(short = 'c', long)]
        candidates: PathBuf,
    },
    Version,
}

/// Execute a CLI command.
pub fn execute(command: &Commands, config: &Config, json: bool) -> Result<ExitCode, Error> {
    match command {
        Commands::Analyze { text } => handle_analyze(text, json),
        Commands::Score { text } => handle_score(text, json),
        Commands::Duplicates {
            title,
            candidates,
            threshold,
        } => handle_duplicates(title, candidates, *threshold, config, json),
        Commands::Similar {
            title,
            candidates,
            limit,
            min_threshold,
        } => handle_similar(title, candidates, *limit, *min_threshold, config, json),
        Commands::Compare { first, second } => handle_compare(first, second, config, json),
        Commands::Triage { text, candidates } => handle_triage(text, candidates, config, json),
        Commands::Version => handle_version(json),
    }
}

fn engine_from(config: &Config) -> SimilarityEngine {
    SimilarityEngine::new(config.blend_weights(), Lexicon::default_stop_words())
}

fn validate_threshold(value: f64) -> Result<f64, Error> {
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::InvalidInput(format!(
            "threshold {value} must be between 0.0 and 1.0"
        )));
    }
    Ok(value)
}

fn handle_analyze(text: &str, json: bool) -> Result<ExitCode, Error> {
    let scorer = IntentScorer::default();
    let could_be_request = scorer.could_be_request(text);
    let score = scorer.score(text);
    let analysis = scorer.analyze(text, score);

    if json {
        print_json(&AnalyzeResponse {
            could_be_request,
            score,
            analysis,
        });
    } else {
        println!("could be request: {}", could_be_request);
        println!("score:            {}", score);
        println!("category:         {}", analysis.category);
        println!("clear request:    {}", analysis.is_clear_request);
        println!("might be request: {}", analysis.might_be_request);
        println!("confidence:       {}", analysis.confidence);
        if let Some(title) = &analysis.title {
            println!("title:            {}", title);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_score(text: &str, json: bool) -> Result<ExitCode, Error> {
    let score = IntentScorer::default().score(text);
    if json {
        print_json(&ScoreResponse { score });
    } else {
        println!("{}", score);
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_duplicates(
    title: &str,
    candidates_path: &PathBuf,
    threshold: Option<f64>,
    config: &Config,
    json: bool,
) -> Result<ExitCode, Error> {
    let threshold = validate_threshold(threshold.unwrap_or(config.duplicate_threshold))?;
    let candidates = candidate::load_candidates(candidates_path)?;
    let matches = engine_from(config).find_duplicates(title, &candidates, threshold);

    if json {
        print_json(&DuplicatesResponse {
            query: title.to_string(),
            threshold,
            matches,
        });
    } else if matches.is_empty() {
        println!("No duplicates at or above {threshold:.2}");
    } else {
        for m in &matches {
            println!("{:.3}  {:?}  {}", m.score, m.strength, m.id);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_similar(
    title: &str,
    candidates_path: &PathBuf,
    limit: usize,
    min_threshold: Option<f64>,
    config: &Config,
    json: bool,
) -> Result<ExitCode, Error> {
    let min_threshold = validate_threshold(min_threshold.unwrap_or(config.similar_threshold))?;
    let candidates = candidate::load_candidates(candidates_path)?;
    let matches = engine_from(config).find_similar(title, &candidates, min_threshold, limit);

    if json {
        print_json(&SimilarResponse {
            query: title.to_string(),
            min_threshold,
            matches,
        });
    } else if matches.is_empty() {
        println!("No similar titles at or above {min_threshold:.2}");
    } else {
        for m in &matches {
            println!("{:.3}  {:?}  {}", m.score, m.strength, m.id);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_compare(first: &str, second: &str, config: &Config, json: bool) -> Result<ExitCode, Error> {
    let breakdown = engine_from(config).breakdown(first, second);
    if json {
        print_json(&breakdown);
    } else {
        println!("levenshtein: {:.3}", breakdown.levenshtein);
        println!("jaccard:     {:.3}", breakdown.jaccard);
        println!("semantic:    {:.3}", breakdown.semantic);
        println!("blended:     {:.3}", breakdown.blended);
        println!("normalized:  {:?} vs {:?}", breakdown.normalized_a, breakdown.normalized_b);
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_triage(
    text: &str,
    candidates_path: &PathBuf,
    config: &Config,
    json: bool,
) -> Result<ExitCode, Error> {
    let candidates = candidate::load_candidates(candidates_path)?;
    let backlog = StaticBacklog::new(candidates);
    let mut pipeline = Pipeline::new(config.clone());
    let outcome = pipeline.triage(text, &backlog)?;

    if json {
        print_json(&outcome);
    } else {
        match &outcome {
            TriageOutcome::Ignored { score } => {
                println!("ignored (score {score})");
            }
            TriageOutcome::Duplicate { matches, .. } => {
                println!("duplicate of:");
                for m in matches {
                    println!("  {:.3}  {}", m.score, m.id);
                }
            }
            TriageOutcome::Accepted { draft } => {
                println!("accepted: {} [{}] ({}%)", draft.title, draft.category, draft.confidence);
            }
            TriageOutcome::NeedsConfirmation { analysis } => {
                println!(
                    "needs confirmation ({}, confidence {})",
                    analysis.category, analysis.confidence
                );
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_version(json: bool) -> Result<ExitCode, Error> {
    if json {
        print_json(&VersionResponse {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        });
    } else {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn candidates_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "title": "אווטר דרך המים 2022"}}, {{"id": 2, "title": "Grand Theft Auto V"}}]"#
        )
        .unwrap();
        file
    }

    #[test]
    fn test_handle_analyze_runs() {
        assert!(handle_analyze("אפשר את הסרט אווטר 2022?", false).is_ok());
    }

    #[test]
    fn test_handle_duplicates_with_file() {
        let file = candidates_file();
        let result = handle_duplicates(
            "אווטר דרך המים 2022",
            &file.path().to_path_buf(),
            None,
            &Config::default(),
            true,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_duplicates_rejects_bad_threshold() {
        let file = candidates_file();
        let result = handle_duplicates(
            "avatar",
            &file.path().to_path_buf(),
            Some(1.5),
            &Config::default(),
            true,
        );
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_handle_triage_with_file() {
        let file = candidates_file();
        let result = handle_triage(
            "אפשר את הסרט אווטר 2022?",
            &file.path().to_path_buf(),
            &Config::default(),
            true,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_version() {
        assert!(handle_version(true).is_ok());
    }
}
