use std::io::Write;

use log::info;
use signup_form::ValidatedRecord;
use signup_form::submit::{SubmitError, Submitter};

/// Writes each submitted record as one line of JSON.
pub struct JsonSubmitter<W> {
    out: W,
}

impl<W: Write> JsonSubmitter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Submitter for JsonSubmitter<W> {
    fn submit(&mut self, record: ValidatedRecord) -> Result<(), SubmitError> {
        let json =
            serde_json::to_string(&record).map_err(|e| SubmitError::Failed(e.to_string()))?;
        info!("Submitting record: {}", json);
        writeln!(self.out, "{}", json).map_err(|e| SubmitError::Failed(e.to_string()))
    }
}
