use std::future::Future;

use postbox_models::message::{FieldError, Message, MessageSubmission};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait MessageService: Send + Sync + 'static {
    /// Validates a contact form submission.
    ///
    /// On success the message is assigned a fresh id and the submitted values
    /// are echoed back unmodified. On failure *all* firing rules for *all*
    /// fields are reported together; no rule short-circuits another.
    fn submit(
        &self,
        submission: MessageSubmission,
    ) -> impl Future<Output = Result<Message, MessageSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum MessageSubmitError {
    /// The payload contained a key the form does not define. Reported on its
    /// own; per-field validation is not performed for such payloads.
    #[error("Unrecognized field '{0}'")]
    UnknownField(String),
    /// One or more field rules fired. The list is never empty and preserves
    /// field order (name, email, phone, subject, description) with rule
    /// order within each field.
    #[error("Submission failed validation")]
    Invalid(Vec<FieldError>),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockMessageService {
    pub fn with_submit(
        mut self,
        submission: MessageSubmission,
        result: Result<Message, MessageSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
