//! Email-dispatch collaborator: templated notification for each contact
//! submission.
//!
//! The hosted service renders a template with supplied variables and delivers
//! it. Failure here never fails a submission; the pipeline logs and moves on.

pub mod emailjs;

use async_trait::async_trait;

use crate::error::EmailError;
use crate::pipeline::types::ContactSubmission;

pub use emailjs::EmailJsMailer;

/// Outbound notification sender.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send the templated contact notification for one submission.
    async fn send_contact_notification(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), EmailError>;
}
