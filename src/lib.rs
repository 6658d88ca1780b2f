//! bosun - request-intent scoring and duplicate detection for chat-driven
//! content backlogs.
//!
//! This crate is the algorithmic core of a content-request intake flow: it
//! decides whether free-text chat messages plausibly ask for content, extracts
//! a provisional title and category, and checks new requests against a
//! bounded backlog of open ones using a blended text-similarity metric. All
//! operations are synchronous, CPU-bound, pure functions of their inputs; the
//! chat transport, storage, and notification layers are external collaborators
//! consumed through the [`candidate::BacklogProvider`] contract.
//!
//! # Example
//!
//! ```
//! use bosun::{Config, IntentScorer, Pipeline, StaticBacklog, TextCandidate, TriageOutcome};
//!
//! let scorer = IntentScorer::default();
//! assert!(scorer.could_be_request("can I get the movie Avatar 2022"));
//! assert!(!scorer.could_be_request("thanks so much"));
//!
//! let backlog = StaticBacklog::new(vec![TextCandidate::new("42", "avatar 2022")]);
//! let mut pipeline = Pipeline::new(Config::default());
//! let outcome = pipeline
//!     .triage("can I get the movie Avatar 2022", &backlog)
//!     .unwrap();
//! assert!(matches!(outcome, TriageOutcome::Duplicate { .. }));
//! ```

pub mod candidate;
pub mod commands;
pub mod config;
pub mod errors;
pub mod intent;
pub mod lexicon;
pub mod output;
pub mod pipeline;
pub mod similarity;
pub mod stats;
pub mod text;

// Re-export public API
pub use candidate::{BacklogProvider, CandidateStatus, StaticBacklog, TextCandidate, load_candidates};
pub use config::{Config, MAX_PENDING_LIMIT};
pub use errors::Error;
pub use intent::{Category, IntentAnalysis, IntentScorer};
pub use lexicon::Lexicon;
pub use pipeline::{Pipeline, RequestDraft, TriageOutcome};
pub use similarity::{BlendWeights, MatchStrength, SimilarityEngine, SimilarityMatch};
pub use stats::{IntakeObserver, NoopObserver, QueryTally};
