//! Contact submission pipeline: shared types and the processor.

pub mod processor;
pub mod types;

pub use processor::SubmissionPipeline;
pub use types::{
    ContactSubmission, EmailOutcome, FormUi, PersistOutcome, SubmissionReport,
};
