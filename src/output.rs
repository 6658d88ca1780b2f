//! JSON response types and formatting for CLI output.

use serde::Serialize;

use crate::intent::IntentAnalysis;
use crate::similarity::SimilarityMatch;

/// Response for message analysis.
#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub could_be_request: bool,
    pub score: u32,
    pub analysis: IntentAnalysis,
}

/// Response for score-only queries.
#[derive(Serialize)]
pub struct ScoreResponse {
    pub score: u32,
}

/// Response for duplicate scans.
#[derive(Serialize)]
pub struct DuplicatesResponse {
    pub query: String,
    pub threshold: f64,
    pub matches: Vec<SimilarityMatch>,
}

/// Response for exploratory similar-title searches.
#[derive(Serialize)]
pub struct SimilarResponse {
    pub query: String,
    pub min_threshold: f64,
    pub matches: Vec<SimilarityMatch>,
}

/// Version response.
#[derive(Serialize)]
pub struct VersionResponse {
    pub name: String,
    pub version: String,
}

/// Response for errors.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Print a value as formatted JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}
