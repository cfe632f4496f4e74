use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use postbox_core_message_contracts::{MessageService, MessageSubmitError};

use super::{internal_server_error, method_not_allowed, validation_error};
use crate::models::message::{ApiMessage, ApiMessageSubmission};

pub fn router(service: Arc<impl MessageService>) -> Router<()> {
    Router::new()
        .route(
            "/message/",
            routing::post(submit_message).fallback(method_not_allowed),
        )
        .with_state(service)
}

async fn submit_message(
    service: State<Arc<impl MessageService>>,
    Json(submission): Json<ApiMessageSubmission>,
) -> Response {
    match service.submit(submission.into()).await {
        Ok(message) => Json(ApiMessage::from(message)).into_response(),
        Err(err @ MessageSubmitError::UnknownField(_)) => validation_error(vec![err.to_string()]),
        Err(MessageSubmitError::Invalid(errors)) => validation_error(
            errors
                .into_iter()
                .map(|error| error.message().to_owned())
                .collect(),
        ),
        Err(MessageSubmitError::Other(err)) => internal_server_error(err),
    }
}
