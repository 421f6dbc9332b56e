//! Submission pipeline — persists a contact submission and dispatches the
//! notification email.
//!
//! **Core invariant: the record-store insert is the sole fatal step.** An
//! email dispatch failure never fails a submission, because by then the
//! record is already durably stored (or the store was never configured).
//!
//! Flow:
//! 1. Busy state on (exactly once per call)
//! 2. Record store insert — fatal on error, aborts before email
//! 3. Notification email — logged on error, never fatal
//! 4. Success indicator / failure notice
//! 5. Busy state off (exactly once, every exit path)

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info};

use crate::config::PipelineConfig;
use crate::notify::Mailer;
use crate::pipeline::types::{
    ContactSubmission, EmailOutcome, FormUi, PersistOutcome, SubmissionReport,
};
use crate::store::ContactStore;

/// Notice shown when nothing was stored and that isn't accepted as success.
const NOT_SAVED_NOTICE: &str =
    "Submission was not saved: no record store is configured.";

/// Coordinates persistence and notification for one contact-form submission.
///
/// Both collaborators are optional; an absent one means that feature is
/// disabled, and the step is skipped rather than failed. The two network
/// calls are awaited sequentially, never concurrently. No retries.
pub struct SubmissionPipeline {
    store: Option<Arc<dyn ContactStore>>,
    mailer: Option<Arc<dyn Mailer>>,
    ui: Arc<dyn FormUi>,
    config: PipelineConfig,
}

impl SubmissionPipeline {
    pub fn new(
        store: Option<Arc<dyn ContactStore>>,
        mailer: Option<Arc<dyn Mailer>>,
        ui: Arc<dyn FormUi>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            store,
            mailer,
            ui,
            config,
        }
    }

    /// Run one submission through the full pipeline.
    pub async fn submit(&self, submission: ContactSubmission) -> SubmissionReport {
        info!(
            name = %submission.name,
            email = %submission.email,
            "Processing contact submission"
        );

        self.ui.busy().await;

        // Step 1: record store (sole fatal path)
        let persistence = match &self.store {
            Some(store) => match store.insert_contact(&submission).await {
                Ok(()) => PersistOutcome::Stored,
                Err(e) => {
                    error!(error = %e, "Contact record insert failed");
                    self.ui.show_failure(&e.to_string()).await;
                    self.ui.idle().await;
                    return SubmissionReport {
                        persistence: PersistOutcome::Failed(e),
                        email: EmailOutcome::Skipped,
                        completed_at: Utc::now(),
                        success: false,
                    };
                }
            },
            None => {
                info!("No record store configured, skipping persist step");
                PersistOutcome::NotConfigured
            }
        };

        // Step 2: notification email (never fatal)
        let email = match &self.mailer {
            Some(mailer) => match mailer.send_contact_notification(&submission).await {
                Ok(()) => EmailOutcome::Sent,
                Err(e) => {
                    error!(error = %e, "Contact notification dispatch failed");
                    EmailOutcome::Failed(e.to_string())
                }
            },
            None => {
                debug!("No email dispatch configured, skipping notification");
                EmailOutcome::Skipped
            }
        };

        // Step 3: user-visible outcome
        let success = match persistence {
            PersistOutcome::Stored => true,
            PersistOutcome::NotConfigured => self.config.accept_unpersisted,
            // Fatal path already returned above
            PersistOutcome::Failed(_) => false,
        };
        if success {
            self.ui.show_success(self.config.success_display).await;
        } else {
            self.ui.show_failure(NOT_SAVED_NOTICE).await;
        }

        self.ui.idle().await;

        info!(
            persistence = persistence.label(),
            email = email.label(),
            success,
            "Contact submission complete"
        );

        SubmissionReport {
            persistence,
            email,
            completed_at: Utc::now(),
            success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::error::{EmailError, StoreError};

    // ── Test doubles ────────────────────────────────────────────────

    #[derive(Debug, PartialEq)]
    enum UiEvent {
        Busy,
        Idle,
        Success,
        Failure(String),
    }

    #[derive(Default)]
    struct RecordingUi {
        events: Mutex<Vec<UiEvent>>,
    }

    impl RecordingUi {
        fn events(&self) -> Vec<UiEvent> {
            std::mem::take(&mut self.events.lock().unwrap())
        }
    }

    #[async_trait]
    impl FormUi for RecordingUi {
        async fn busy(&self) {
            self.events.lock().unwrap().push(UiEvent::Busy);
        }
        async fn idle(&self) {
            self.events.lock().unwrap().push(UiEvent::Idle);
        }
        async fn show_success(&self, _display: std::time::Duration) {
            self.events.lock().unwrap().push(UiEvent::Success);
        }
        async fn show_failure(&self, detail: &str) {
            self.events
                .lock()
                .unwrap()
                .push(UiEvent::Failure(detail.to_string()));
        }
    }

    struct FakeStore {
        fail: bool,
        inserts: Mutex<u32>,
    }

    impl FakeStore {
        fn ok() -> Self {
            Self {
                fail: false,
                inserts: Mutex::new(0),
            }
        }
        fn failing() -> Self {
            Self {
                fail: true,
                inserts: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl ContactStore for FakeStore {
        async fn insert_contact(
            &self,
            _submission: &ContactSubmission,
        ) -> Result<(), StoreError> {
            *self.inserts.lock().unwrap() += 1;
            if self.fail {
                Err(StoreError::Api {
                    status: 401,
                    detail: "Invalid API key".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    struct FakeMailer {
        fail: bool,
        sends: Mutex<u32>,
    }

    impl FakeMailer {
        fn ok() -> Self {
            Self {
                fail: false,
                sends: Mutex::new(0),
            }
        }
        fn failing() -> Self {
            Self {
                fail: true,
                sends: Mutex::new(0),
            }
        }
        fn send_count(&self) -> u32 {
            *self.sends.lock().unwrap()
        }
    }

    #[async_trait]
    impl Mailer for FakeMailer {
        async fn send_contact_notification(
            &self,
            _submission: &ContactSubmission,
        ) -> Result<(), EmailError> {
            *self.sends.lock().unwrap() += 1;
            if self.fail {
                Err(EmailError::Api {
                    status: 400,
                    detail: "template not found".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn submission() -> ContactSubmission {
        ContactSubmission::new("Ada", "ada@example.com", "Hello!")
    }

    fn assert_busy_bracket(events: &[UiEvent]) {
        assert_eq!(events.first(), Some(&UiEvent::Busy));
        assert_eq!(events.last(), Some(&UiEvent::Idle));
        assert_eq!(
            events.iter().filter(|e| **e == UiEvent::Busy).count(),
            1,
            "busy engaged more than once"
        );
        assert_eq!(
            events.iter().filter(|e| **e == UiEvent::Idle).count(),
            1,
            "busy released more than once"
        );
    }

    // ── Tests ───────────────────────────────────────────────────────

    #[tokio::test]
    async fn store_and_mailer_success_reports_success() {
        let ui = Arc::new(RecordingUi::default());
        let mailer = Arc::new(FakeMailer::ok());
        let pipeline = SubmissionPipeline::new(
            Some(Arc::new(FakeStore::ok())),
            Some(mailer.clone()),
            ui.clone(),
            PipelineConfig::default(),
        );

        let report = pipeline.submit(submission()).await;

        assert!(report.success);
        assert!(matches!(report.persistence, PersistOutcome::Stored));
        assert!(matches!(report.email, EmailOutcome::Sent));
        assert_eq!(mailer.send_count(), 1);
        let events = ui.events();
        assert_busy_bracket(&events);
        assert!(events.contains(&UiEvent::Success));
    }

    #[tokio::test]
    async fn failing_store_is_fatal_and_skips_email() {
        let ui = Arc::new(RecordingUi::default());
        let mailer = Arc::new(FakeMailer::ok());
        let pipeline = SubmissionPipeline::new(
            Some(Arc::new(FakeStore::failing())),
            Some(mailer.clone()),
            ui.clone(),
            PipelineConfig::default(),
        );

        let report = pipeline.submit(submission()).await;

        assert!(!report.success);
        assert!(matches!(report.persistence, PersistOutcome::Failed(_)));
        assert!(matches!(report.email, EmailOutcome::Skipped));
        assert_eq!(mailer.send_count(), 0, "email step must not run after fatal persist");

        let events = ui.events();
        assert_busy_bracket(&events);
        // Failure notice carries the raw error detail
        assert!(events
            .iter()
            .any(|e| matches!(e, UiEvent::Failure(d) if d.contains("Invalid API key"))));
        assert!(!events.contains(&UiEvent::Success));
    }

    #[tokio::test]
    async fn success_without_mailer_skips_dispatch() {
        let ui = Arc::new(RecordingUi::default());
        let pipeline = SubmissionPipeline::new(
            Some(Arc::new(FakeStore::ok())),
            None,
            ui.clone(),
            PipelineConfig::default(),
        );

        let report = pipeline.submit(submission()).await;

        assert!(report.success);
        assert!(matches!(report.email, EmailOutcome::Skipped));
        let events = ui.events();
        assert_busy_bracket(&events);
        assert!(events.contains(&UiEvent::Success));
    }

    #[tokio::test]
    async fn failing_mailer_does_not_block_success() {
        let ui = Arc::new(RecordingUi::default());
        let mailer = Arc::new(FakeMailer::failing());
        let pipeline = SubmissionPipeline::new(
            Some(Arc::new(FakeStore::ok())),
            Some(mailer.clone()),
            ui.clone(),
            PipelineConfig::default(),
        );

        let report = pipeline.submit(submission()).await;

        assert!(report.success);
        assert!(matches!(report.persistence, PersistOutcome::Stored));
        assert!(
            matches!(report.email, EmailOutcome::Failed(ref d) if d.contains("template not found"))
        );
        assert_eq!(mailer.send_count(), 1);
        let events = ui.events();
        assert_busy_bracket(&events);
        assert!(events.contains(&UiEvent::Success));
    }

    #[tokio::test]
    async fn unconfigured_store_counts_as_success_by_default() {
        let ui = Arc::new(RecordingUi::default());
        let pipeline =
            SubmissionPipeline::new(None, None, ui.clone(), PipelineConfig::default());

        let report = pipeline.submit(submission()).await;

        assert!(report.success);
        assert!(matches!(report.persistence, PersistOutcome::NotConfigured));
        let events = ui.events();
        assert_busy_bracket(&events);
        assert!(events.contains(&UiEvent::Success));
    }

    #[tokio::test]
    async fn unconfigured_store_can_be_rejected_as_success() {
        let ui = Arc::new(RecordingUi::default());
        let config = PipelineConfig {
            accept_unpersisted: false,
            ..Default::default()
        };
        let pipeline = SubmissionPipeline::new(None, None, ui.clone(), config);

        let report = pipeline.submit(submission()).await;

        assert!(!report.success);
        assert!(matches!(report.persistence, PersistOutcome::NotConfigured));
        let events = ui.events();
        assert_busy_bracket(&events);
        assert!(events
            .iter()
            .any(|e| matches!(e, UiEvent::Failure(d) if d.contains("not saved"))));
        assert!(!events.contains(&UiEvent::Success));
    }

    #[tokio::test]
    async fn busy_released_exactly_once_on_every_path() {
        // Fatal path
        let ui = Arc::new(RecordingUi::default());
        let pipeline = SubmissionPipeline::new(
            Some(Arc::new(FakeStore::failing())),
            None,
            ui.clone(),
            PipelineConfig::default(),
        );
        pipeline.submit(submission()).await;
        assert_busy_bracket(&ui.events());

        // Success path
        let ui = Arc::new(RecordingUi::default());
        let pipeline = SubmissionPipeline::new(
            Some(Arc::new(FakeStore::ok())),
            Some(Arc::new(FakeMailer::failing())),
            ui.clone(),
            PipelineConfig::default(),
        );
        pipeline.submit(submission()).await;
        assert_busy_bracket(&ui.events());
    }
}
