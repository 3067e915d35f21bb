pub mod client;
pub mod error;
pub mod submission;

pub use client::{DocumentRenderer, RenderClient};
pub use error::{ClientError, FailureClass};
pub use submission::{SubmissionController, SubmissionOutcome, SubmissionState};
