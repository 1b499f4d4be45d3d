//! Hand-off point for validated records.

use crate::record::ValidatedRecord;

/// Error reported by a [`Submitter`].
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Submission failed: {0}")]
    Failed(String),
}

/// Receives records produced by a successful submit.
///
/// The form does not care what happens to the record afterwards.
pub trait Submitter {
    fn submit(&mut self, record: ValidatedRecord) -> Result<(), SubmitError>;
}

/// Submitter that only writes the record to the debug log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSubmitter;

impl Submitter for LogSubmitter {
    fn submit(&mut self, record: ValidatedRecord) -> Result<(), SubmitError> {
        log::debug!("Submitted record: {:?}", record);
        Ok(())
    }
}
