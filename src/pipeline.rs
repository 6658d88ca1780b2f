//! Message triage: scoring gate, analysis, duplicate check, outcome.
//!
//! Wires the intent scorer and similarity engine into the control flow the
//! surrounding chat glue acts on: incoming text is scored, gated on the
//! configured confidence threshold, and clear requests are checked against
//! the open backlog before a draft is produced. Messages below the gate are
//! ignored silently on purpose, so unrelated chat traffic never gets a reply.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::candidate::BacklogProvider;
use crate::config::Config;
use crate::errors::Error;
use crate::intent::{Category, IntentAnalysis, IntentScorer};
use crate::similarity::{SimilarityEngine, SimilarityMatch};
use crate::stats::{IntakeObserver, NoopObserver};

/// A request the caller may create from an accepted message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestDraft {
    /// Fresh opaque identifier for the draft.
    pub id: String,
    /// Normalizable title extracted from the message.
    pub title: String,
    pub category: Category,
    pub confidence: u32,
    pub received_at: DateTime<Utc>,
}

/// What the surrounding glue should do with one message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TriageOutcome {
    /// Not a request, or below the confidence gate. No user-visible reply.
    Ignored { score: u32 },
    /// A clear request that matches existing open requests.
    Duplicate {
        analysis: IntentAnalysis,
        matches: Vec<SimilarityMatch>,
    },
    /// A clear request with no duplicates; ready to create.
    Accepted { draft: RequestDraft },
    /// Plausible but ambiguous; ask the user before creating anything.
    NeedsConfirmation { analysis: IntentAnalysis },
}

/// The full intake flow over one scorer/engine/config set.
pub struct Pipeline {
    scorer: IntentScorer,
    engine: SimilarityEngine,
    config: Config,
    observer: Box<dyn IntakeObserver>,
}

impl Pipeline {
    /// Build a pipeline from configuration, with default lexicon and no
    /// observer.
    pub fn new(config: Config) -> Self {
        let engine = SimilarityEngine::new(
            config.blend_weights(),
            crate::lexicon::Lexicon::default_stop_words(),
        );
        Pipeline {
            scorer: IntentScorer::default(),
            engine,
            config,
            observer: Box::new(NoopObserver),
        }
    }

    /// Build a pipeline from explicit parts.
    pub fn with_parts(scorer: IntentScorer, engine: SimilarityEngine, config: Config) -> Self {
        Pipeline {
            scorer,
            engine,
            config,
            observer: Box::new(NoopObserver),
        }
    }

    /// Attach an observer for query telemetry.
    pub fn with_observer(mut self, observer: Box<dyn IntakeObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn scorer(&self) -> &IntentScorer {
        &self.scorer
    }

    pub fn engine(&self) -> &SimilarityEngine {
        &self.engine
    }

    /// Triage one incoming message against the current backlog.
    #[must_use = "the outcome decides the user-visible action"]
    pub fn triage(
        &mut self,
        text: &str,
        backlog: &dyn BacklogProvider,
    ) -> Result<TriageOutcome, Error> {
        if !self.scorer.could_be_request(text) {
            tracing::debug!("rejected by request filter");
            return Ok(TriageOutcome::Ignored { score: 0 });
        }

        let score = self.scorer.score(text);
        tracing::debug!(score, "request score");
        if score < self.config.confidence_gate {
            return Ok(TriageOutcome::Ignored { score });
        }

        let analysis = self.scorer.analyze(text, score);

        if analysis.is_clear_request {
            let title = analysis
                .title
                .clone()
                .unwrap_or_else(|| text.trim().to_string());
            self.observer.record_query(&title);

            let candidates = backlog.pending(Some(analysis.category), self.config.pending_limit)?;
            let matches =
                self.engine
                    .find_duplicates(&title, &candidates, self.config.duplicate_threshold);
            if !matches.is_empty() {
                tracing::info!(matches = matches.len(), "duplicate request detected");
                return Ok(TriageOutcome::Duplicate { analysis, matches });
            }

            let draft = RequestDraft {
                id: Uuid::new_v4().to_string(),
                title,
                category: analysis.category,
                confidence: analysis.confidence,
                received_at: Utc::now(),
            };
            tracing::info!(id = %draft.id, category = %draft.category, "accepted new request");
            return Ok(TriageOutcome::Accepted { draft });
        }

        if analysis.might_be_request {
            return Ok(TriageOutcome::NeedsConfirmation { analysis });
        }

        Ok(TriageOutcome::Ignored { score })
    }
}
