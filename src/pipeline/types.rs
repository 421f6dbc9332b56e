//! Shared types for the contact submission pipeline.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

// ── Contact submission ──────────────────────────────────────────────

/// One contact-form submission.
///
/// Built from form field values at submit time; a missing field coerces to
/// an empty string, never to an absent key. Lives only for the duration of
/// one submission attempt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

// ── Outcomes ────────────────────────────────────────────────────────

/// What happened to the record-store insert.
#[derive(Debug)]
pub enum PersistOutcome {
    /// The record store accepted the write.
    Stored,
    /// No record store configured — the step was skipped. Whether this still
    /// counts as success is a configuration choice, not an assumption.
    NotConfigured,
    /// The record store rejected the write or was unreachable. Fatal to the
    /// submission attempt.
    Failed(StoreError),
}

impl PersistOutcome {
    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Stored => "stored",
            Self::NotConfigured => "not_configured",
            Self::Failed(_) => "failed",
        }
    }
}

/// What happened to the notification email. Independent of persistence and
/// never fatal.
#[derive(Debug)]
pub enum EmailOutcome {
    /// The dispatch service accepted the send.
    Sent,
    /// No dispatch credentials configured, or the pipeline aborted before
    /// the email step.
    Skipped,
    /// Dispatch failed; carries the service's error text for diagnostics.
    Failed(String),
}

impl EmailOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Skipped => "skipped",
            Self::Failed(_) => "failed",
        }
    }
}

/// Result of one pass through the submission pipeline.
#[derive(Debug)]
pub struct SubmissionReport {
    pub persistence: PersistOutcome,
    pub email: EmailOutcome,
    /// When the pipeline finished with this submission.
    pub completed_at: DateTime<Utc>,
    /// Whether the user was shown the success indicator.
    pub success: bool,
}

// ── Form UI seam ────────────────────────────────────────────────────

/// Presentation seam for the submission pipeline — pure display, no logic.
///
/// The pipeline guarantees `busy` and `idle` are each called exactly once
/// per submission, on every exit path including the fatal one.
#[async_trait]
pub trait FormUi: Send + Sync {
    /// Engage the busy state (submit control relabeled to "Sending...").
    async fn busy(&self);

    /// Release the busy state (label restored).
    async fn idle(&self);

    /// Show the success indicator for `display` and clear the form fields.
    async fn show_success(&self, display: std::time::Duration);

    /// Show a user-visible failure notice carrying the error detail.
    async fn show_failure(&self, detail: &str);
}
