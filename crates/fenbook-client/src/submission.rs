//! One-at-a-time submission control.
//!
//! The controller owns the only concurrency control in the system: an
//! explicit idle/submitting state checked as a precondition on `submit`.
//! There is no queue and no cancellation of an in-flight request.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use tempfile::NamedTempFile;

use crate::client::DocumentRenderer;
use crate::error::ClientError;
use fenbook_domain::GenerateRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
}

#[derive(Debug)]
pub enum SubmissionOutcome {
    /// Document received and persisted to the given path.
    Saved { path: PathBuf, bytes: usize },
    /// A submission was already in flight; no request was made.
    RejectedInFlight,
    Failed(ClientError),
}

pub struct SubmissionController<R: DocumentRenderer> {
    renderer: R,
    in_flight: AtomicBool,
}

impl<R: DocumentRenderer> SubmissionController<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> SubmissionState {
        if self.in_flight.load(Ordering::Acquire) {
            SubmissionState::Submitting
        } else {
            SubmissionState::Idle
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.state() == SubmissionState::Submitting
    }

    /// Submit the payload and save the resulting document at `output`.
    ///
    /// Rejected without a network call when already submitting. The state
    /// returns to idle on every exit path, success or failure.
    pub async fn submit(&self, payload: &GenerateRequest, output: &Path) -> SubmissionOutcome {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            tracing::debug!("submit ignored: a request is already in flight");
            return SubmissionOutcome::RejectedInFlight;
        }

        let result = self.perform(payload, output).await;
        self.in_flight.store(false, Ordering::Release);

        match result {
            Ok(bytes) => {
                tracing::info!(path = %output.display(), bytes, "document saved");
                SubmissionOutcome::Saved {
                    path: output.to_path_buf(),
                    bytes,
                }
            }
            Err(err) => {
                tracing::error!(error = %err, class = ?err.class(), "submission failed");
                SubmissionOutcome::Failed(err)
            }
        }
    }

    async fn perform(&self, payload: &GenerateRequest, output: &Path) -> Result<usize, ClientError> {
        let bytes = self.renderer.render(payload).await?;
        let len = bytes.len();
        save_document(&bytes, output)?;
        Ok(len)
    }
}

/// Spool the received bytes through a transient temp-file handle and move
/// it into place. The handle never outlives this call: `persist` consumes
/// it on success and the drop cleans it up on every error path.
fn save_document(bytes: &[u8], output: &Path) -> Result<(), ClientError> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut handle = NamedTempFile::new_in(dir)?;
    handle.write_all(bytes)?;
    handle.flush()?;
    handle.persist(output).map_err(|e| ClientError::Io(e.error))?;
    Ok(())
}
