//! Record-store collaborator: persistence for contact submissions.
//!
//! The hosted backend is opaque — one insert per submission, success or an
//! error value back. Everything behind [`ContactStore`] so the pipeline and
//! tests never see HTTP.

pub mod supabase;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::pipeline::types::ContactSubmission;

pub use supabase::SupabaseStore;

/// Storage backend for contact submissions.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Insert one submission as a record in the contacts collection.
    async fn insert_contact(&self, submission: &ContactSubmission) -> Result<(), StoreError>;
}
