use serde::Serialize;

pub mod message;

#[derive(Serialize)]
pub struct ApiError {
    pub detail: &'static str,
}

/// Body of the 405 response for unsupported methods on the submission path.
#[derive(Debug, Serialize)]
pub struct ApiStatus {
    pub status: u16,
}

/// Body of the 400 response for a rejected submission.
///
/// `field_errors` holds the fixed message text of every firing rule, in
/// reporting order; `error_message` repeats the first of them.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiValidationError {
    pub error_code: u16,
    pub field_errors: Vec<String>,
    pub error_message: String,
}

impl ApiValidationError {
    pub fn new(field_errors: Vec<String>) -> Self {
        Self {
            error_code: 400,
            error_message: field_errors.first().cloned().unwrap_or_default(),
            field_errors,
        }
    }
}
