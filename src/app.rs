//! Application wiring.
//!
//! Each feature initializes independently: a missing or broken collaborator
//! logs a diagnostic and disables that feature only. Nothing here can stop
//! the rest of the app from coming up.

use std::sync::Arc;

use tracing::{info, warn};

use crate::chat::{ChatSession, ReplyResolver};
use crate::config::{EmailConfig, PipelineConfig, StoreConfig};
use crate::notify::{EmailJsMailer, Mailer};
use crate::pipeline::{FormUi, SubmissionPipeline};
use crate::store::{ContactStore, SupabaseStore};

/// The assembled application: chat session plus the submission collaborators.
///
/// Built once at startup; all handles are read-only thereafter.
pub struct App {
    chat: ChatSession,
    store: Option<Arc<dyn ContactStore>>,
    mailer: Option<Arc<dyn Mailer>>,
    pipeline_config: PipelineConfig,
}

impl App {
    /// Build the app from the environment.
    pub fn bootstrap() -> Self {
        let pipeline_config = PipelineConfig::default();

        let store: Option<Arc<dyn ContactStore>> = match StoreConfig::from_env() {
            Some(config) => {
                match SupabaseStore::new(config, pipeline_config.contacts_table.clone()) {
                    Ok(store) => {
                        info!("Record store configured");
                        Some(Arc::new(store))
                    }
                    Err(e) => {
                        warn!(error = %e, "Record store setup failed, persistence disabled");
                        None
                    }
                }
            }
            None => {
                info!("Record store not configured, submissions will not be persisted");
                None
            }
        };

        let mailer: Option<Arc<dyn Mailer>> = match EmailConfig::from_env() {
            Some(config) => match EmailJsMailer::new(config) {
                Ok(mailer) => {
                    info!("Email dispatch configured");
                    Some(Arc::new(mailer))
                }
                Err(e) => {
                    warn!(error = %e, "Email dispatch setup failed, notifications disabled");
                    None
                }
            },
            None => {
                info!("Email dispatch not configured, notifications disabled");
                None
            }
        };

        Self {
            chat: ChatSession::new(ReplyResolver::default_rules()),
            store,
            mailer,
            pipeline_config,
        }
    }

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    pub fn store_configured(&self) -> bool {
        self.store.is_some()
    }

    pub fn mailer_configured(&self) -> bool {
        self.mailer.is_some()
    }

    /// Build a submission pipeline bound to the given UI.
    pub fn pipeline(&self, ui: Arc<dyn FormUi>) -> SubmissionPipeline {
        SubmissionPipeline::new(
            self.store.clone(),
            self.mailer.clone(),
            ui,
            self.pipeline_config.clone(),
        )
    }
}
