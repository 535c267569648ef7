//! Submission state for invoicing-service.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ValidationErrors;

/// Identifies one submission that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(pub Uuid);

impl SubmissionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Submission status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Idle,
    Pending,
    Accepted,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Accepted => "accepted",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "pending" => SubmissionStatus::Pending,
            "accepted" => SubmissionStatus::Accepted,
            _ => SubmissionStatus::Idle,
        }
    }
}

/// Result of asking the ledger to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Guest information is incomplete; nothing changed except the recorded
    /// errors.
    Rejected(ValidationErrors),
    /// Validation passed and the ledger is now waiting for completion.
    Pending(SubmissionId),
    /// A submission is already waiting for completion.
    AlreadyPending(SubmissionId),
}

impl SubmitOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitOutcome::Rejected(_) => "rejected",
            SubmitOutcome::Pending(_) => "pending",
            SubmitOutcome::AlreadyPending(_) => "already_pending",
        }
    }

    pub fn submission_id(&self) -> Option<SubmissionId> {
        match self {
            SubmitOutcome::Rejected(_) => None,
            SubmitOutcome::Pending(id) | SubmitOutcome::AlreadyPending(id) => Some(*id),
        }
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            SubmitOutcome::Rejected(errors) => Some(errors),
            _ => None,
        }
    }
}
