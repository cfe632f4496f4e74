use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    routing, Form, Router,
};
use postbox_core_message_contracts::{MessageService, MessageSubmitError};
use postbox_templates_contracts::{
    ContactConfirmationTemplate, ContactPageTemplate, Template, TemplateService,
};

use super::internal_server_error;
use crate::models::message::form_submission;

pub fn router(
    message: Arc<impl MessageService>,
    template: Arc<impl TemplateService>,
) -> Router<()> {
    Router::new()
        .route(
            "/",
            routing::get(contact_page).post(submit_contact_form),
        )
        .with_state((message, template))
}

async fn contact_page(
    State((_, template)): State<(Arc<impl MessageService>, Arc<impl TemplateService>)>,
) -> Response {
    render(&*template, &ContactPageTemplate { errors: Vec::new() })
}

async fn submit_contact_form(
    State((message, template)): State<(Arc<impl MessageService>, Arc<impl TemplateService>)>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    match message.submit(form_submission(fields)).await {
        Ok(message) => render(
            &*template,
            &ContactConfirmationTemplate {
                name: message.name,
                subject: message.subject,
            },
        ),
        Err(err @ MessageSubmitError::UnknownField(_)) => render(
            &*template,
            &ContactPageTemplate {
                errors: vec![err.to_string()],
            },
        ),
        Err(MessageSubmitError::Invalid(errors)) => render(
            &*template,
            &ContactPageTemplate {
                errors: errors
                    .into_iter()
                    .map(|error| error.message().to_owned())
                    .collect(),
            },
        ),
        Err(MessageSubmitError::Other(err)) => internal_server_error(err),
    }
}

fn render<T: Template + 'static>(template_service: &impl TemplateService, template: &T) -> Response {
    match template_service.render(template) {
        Ok(html) => Html(html).into_response(),
        Err(err) => internal_server_error(err),
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use postbox_core_message_contracts::MockMessageService;
    use postbox_models::{
        message::{FieldError, Message, MessageSubmission},
        FieldValue,
    };
    use postbox_templates_contracts::MockTemplateService;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn get_renders_empty_contact_page() {
        // Arrange
        let template = MockTemplateService::new().with_render(
            ContactPageTemplate { errors: Vec::new() },
            "<form>".into(),
        );

        let router = router(Arc::new(MockMessageService::new()), Arc::new(template));

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        // Act
        let response = router.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_body(response).await, "<form>");
    }

    #[tokio::test]
    async fn post_renders_confirmation() {
        // Arrange
        let message = MockMessageService::new().with_submit(
            MessageSubmission {
                name: FieldValue::Value("Jane Doe".into()),
                email: FieldValue::Value("jane.doe@example.com".into()),
                phone: FieldValue::Value("01234567891".into()),
                subject: FieldValue::Value("Website feedback".into()),
                description: FieldValue::Value(
                    "I would like to ask about your opening hours.".into(),
                ),
                unknown_fields: Vec::new(),
            },
            Ok(Message {
                id: 7.into(),
                name: "Jane Doe".into(),
                email: "jane.doe@example.com".into(),
                phone: "01234567891".into(),
                subject: "Website feedback".into(),
                description: "I would like to ask about your opening hours.".into(),
            }),
        );

        let template = MockTemplateService::new().with_render(
            ContactConfirmationTemplate {
                name: "Jane Doe".into(),
                subject: "Website feedback".into(),
            },
            "<h2>thanks</h2>".into(),
        );

        let router = router(Arc::new(message), Arc::new(template));

        let body = "name=Jane+Doe\
                    &email=jane.doe%40example.com\
                    &phone=01234567891\
                    &subject=Website+feedback\
                    &description=I+would+like+to+ask+about+your+opening+hours.";

        // Act
        let response = router.oneshot(post(body)).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_body(response).await, "<h2>thanks</h2>");
    }

    #[tokio::test]
    async fn post_renders_contact_page_with_errors() {
        // Arrange
        let message = MockMessageService::new().with_submit(
            MessageSubmission {
                name: FieldValue::Empty,
                ..MessageSubmission::default()
            },
            Err(MessageSubmitError::Invalid(vec![FieldError::NameBlank])),
        );

        let template = MockTemplateService::new().with_render(
            ContactPageTemplate {
                errors: vec!["Name may not be blank".into()],
            },
            "<form>".into(),
        );

        let router = router(Arc::new(message), Arc::new(template));

        // Act
        let response = router.oneshot(post("name=")).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_body(response).await, "<form>");
    }

    fn post(body: &'static str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    async fn read_body(response: Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), 4096)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }
}
