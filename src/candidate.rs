//! Candidate records crossing the boundary from external backlog data.
//!
//! External snapshots arrive in whatever shape the surrounding system stores
//! them in; they are resolved into [`TextCandidate`] exactly once, here, so
//! the similarity algorithms only ever see a single concrete type.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::paths;
use crate::errors::Error;
use crate::intent::Category;

/// Lifecycle state of an open request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStatus {
    #[default]
    Pending,
    Fulfilled,
    Rejected,
}

/// One open request eligible for duplicate comparison.
///
/// A read-only snapshot handed in per call; the core never mutates or
/// persists it. Deserialization is lenient: numeric or string ids, missing
/// title, missing status (defaults to pending), unknown fields ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextCandidate {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: CandidateStatus,
}

impl TextCandidate {
    /// A pending candidate with the given id and title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        TextCandidate {
            id: id.into(),
            title: Some(title.into()),
            status: CandidateStatus::Pending,
        }
    }

    /// A pending candidate with no title (cannot meaningfully match).
    pub fn untitled(id: impl Into<String>) -> Self {
        TextCandidate {
            id: id.into(),
            title: None,
            status: CandidateStatus::Pending,
        }
    }
}

fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "candidate id must be a string or number, got {other}"
        ))),
    }
}

/// Contract for the external request-management collaborator: supply the
/// current open candidates for duplicate comparison.
pub trait BacklogProvider {
    /// Current pending candidates, optionally scoped to a category, capped
    /// at `limit`.
    fn pending(
        &self,
        category: Option<Category>,
        limit: usize,
    ) -> Result<Vec<TextCandidate>, Error>;
}

/// In-memory backlog snapshot, used by the CLI and tests.
///
/// The snapshot is assumed to be already category-scoped by whoever built
/// it; `pending` only filters on status and applies the limit.
#[derive(Debug, Clone, Default)]
pub struct StaticBacklog {
    candidates: Vec<TextCandidate>,
}

impl StaticBacklog {
    pub fn new(candidates: Vec<TextCandidate>) -> Self {
        StaticBacklog { candidates }
    }
}

impl BacklogProvider for StaticBacklog {
    fn pending(
        &self,
        _category: Option<Category>,
        limit: usize,
    ) -> Result<Vec<TextCandidate>, Error> {
        Ok(self
            .candidates
            .iter()
            .filter(|c| c.status == CandidateStatus::Pending)
            .take(limit)
            .cloned()
            .collect())
    }
}

/// Load a candidate snapshot from a JSON array file.
///
/// Entries that fail to resolve (e.g. missing id) are skipped with a warning
/// rather than aborting the whole load; a partial backlog snapshot must not
/// prevent comparison of the rest.
pub fn load_candidates(path: &Path) -> Result<Vec<TextCandidate>, Error> {
    let path = paths::expand_tilde_path(path);
    if !path.exists() {
        return Err(Error::FileNotFound(path));
    }
    let content = std::fs::read_to_string(&path)?;
    let values: Vec<serde_json::Value> = serde_json::from_str(&content)?;

    let mut candidates = Vec::with_capacity(values.len());
    for value in values {
        match serde_json::from_value::<TextCandidate>(value) {
            Ok(candidate) => candidates.push(candidate),
            Err(e) => tracing::warn!(error = %e, "skipping malformed candidate entry"),
        }
    }
    Ok(candidates)
}
